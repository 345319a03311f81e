use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// One bucket of the per-category breakdown. The `_id` key matches the
/// grouped shape the admin frontend already consumes.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_products: i64,
    pub total_messages: i64,
    pub unread_messages: i64,
    pub category_counts: Vec<CategoryCount>,
}

/// Aggregates counts across both collections for the admin dashboard.
pub struct StatsService {
    pool: PgPool,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn summary(&self) -> Result<StatsSummary, StatsError> {
        let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM portfolio_items")
            .fetch_one(&self.pool)
            .await?;

        let total_messages: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM messages").fetch_one(&self.pool).await?;

        let unread_messages: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE read = FALSE")
                .fetch_one(&self.pool)
                .await?;

        let category_counts: Vec<(String, i64)> = sqlx::query_as(
            "SELECT category, COUNT(*) FROM portfolio_items GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(StatsSummary {
            total_products,
            total_messages,
            unread_messages,
            category_counts: category_counts
                .into_iter()
                .map(|(category, count)| CategoryCount { category, count })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_to_the_dashboard_shape() {
        let summary = StatsSummary {
            total_products: 2,
            total_messages: 1,
            unread_messages: 1,
            category_counts: vec![CategoryCount { category: "كتب وأغلفة".into(), count: 2 }],
        };

        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["totalProducts"], 2);
        assert_eq!(value["unreadMessages"], 1);
        assert_eq!(value["categoryCounts"][0]["_id"], "كتب وأغلفة");
        assert_eq!(value["categoryCounts"][0]["count"], 2);
    }
}
