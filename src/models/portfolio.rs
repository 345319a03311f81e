use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{current_date_string, required, ValidationError};

/// The closed set of catalog categories, stored under their Arabic labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// حلويات ومعارض - dessert boxes and exhibition prints
    DessertsExhibits,
    /// شركات أدوية - pharma company packaging
    PharmaCompanies,
    /// مراكز أشعة - radiology center envelopes
    RadiologyCenters,
    /// كتب وأغلفة - books and covers
    BooksCovers,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::DessertsExhibits,
        Category::PharmaCompanies,
        Category::RadiologyCenters,
        Category::BooksCovers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::DessertsExhibits => "حلويات ومعارض",
            Category::PharmaCompanies => "شركات أدوية",
            Category::RadiologyCenters => "مراكز أشعة",
            Category::BooksCovers => "كتب وأغلفة",
        }
    }

    /// Look a stored label up in the fixed set.
    pub fn parse(label: &str) -> Result<Category, ValidationError> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == label)
            .ok_or_else(|| ValidationError::UnknownCategory(label.to_string()))
    }
}

/// Row shape as persisted. `created_at` orders listings and never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct PortfolioRecord {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub details: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

/// Public wire shape: store identity renamed to `id`, internal fields dropped.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub details: String,
    pub date: String,
}

impl From<PortfolioRecord> for PortfolioItem {
    fn from(record: PortfolioRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            category: record.category,
            image: record.image,
            description: record.description,
            details: record.details,
            date: record.date,
        }
    }
}

/// Incoming create payload; all fields optional until validated.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePortfolioItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub date: Option<String>,
}

/// Validated create payload with defaults applied.
#[derive(Debug, Clone)]
pub struct NewPortfolioItem {
    pub title: String,
    pub category: Category,
    pub image: String,
    pub description: String,
    pub details: String,
    pub date: String,
}

impl CreatePortfolioItem {
    pub fn validate(self) -> Result<NewPortfolioItem, ValidationError> {
        let title = required(self.title, "title")?;
        let category = Category::parse(&required(self.category, "category")?)?;
        let image = required(self.image, "image")?;

        Ok(NewPortfolioItem {
            title,
            category,
            image,
            description: self.description.unwrap_or_default(),
            details: self.details.unwrap_or_default(),
            date: self.date.filter(|d| !d.is_empty()).unwrap_or_else(current_date_string),
        })
    }
}

/// Partial update payload. `date` and `created_at` are immutable after creation
/// and deliberately absent here.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
}

impl UpdatePortfolioItem {
    /// Supplied fields are held to the create-time invariants: category in
    /// the fixed set, title and image non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(category) = self.category.as_deref() {
            Category::parse(category)?;
        }
        if matches!(self.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(ValidationError::MissingField("title"));
        }
        if matches!(self.image.as_deref(), Some(i) if i.trim().is_empty()) {
            return Err(ValidationError::MissingField("image"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreatePortfolioItem {
        CreatePortfolioItem {
            title: Some("علبة حلويات".into()),
            category: Some("حلويات ومعارض".into()),
            image: Some("http://x/y.png".into()),
            description: None,
            details: None,
            date: None,
        }
    }

    #[test]
    fn parses_every_known_category() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn rejects_category_outside_the_fixed_set() {
        let err = Category::parse("books-covers").unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("books-covers".into()));
    }

    #[test]
    fn create_applies_defaults() {
        let item = full_payload().validate().unwrap();
        assert_eq!(item.description, "");
        assert_eq!(item.details, "");
        assert!(!item.date.is_empty());
    }

    #[test]
    fn create_requires_title_category_image() {
        for field in ["title", "category", "image"] {
            let mut payload = full_payload();
            match field {
                "title" => payload.title = None,
                "category" => payload.category = None,
                _ => payload.image = None,
            }
            assert_eq!(payload.validate().unwrap_err(), ValidationError::MissingField(field));
        }
    }

    #[test]
    fn create_rejects_unknown_category() {
        let mut payload = full_payload();
        payload.category = Some("غير موجود".into());
        assert!(matches!(payload.validate(), Err(ValidationError::UnknownCategory(_))));
    }

    #[test]
    fn update_accepts_partial_payload_without_category() {
        let update = UpdatePortfolioItem { title: Some("جديد".into()), ..Default::default() };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn update_rejects_blanking_title_or_image() {
        let update = UpdatePortfolioItem { title: Some("  ".into()), ..Default::default() };
        assert_eq!(update.validate().unwrap_err(), ValidationError::MissingField("title"));

        let update = UpdatePortfolioItem { image: Some(String::new()), ..Default::default() };
        assert_eq!(update.validate().unwrap_err(), ValidationError::MissingField("image"));
    }

    #[test]
    fn update_rejects_unknown_category() {
        let update = UpdatePortfolioItem { category: Some("x".into()), ..Default::default() };
        assert!(update.validate().is_err());
    }
}
