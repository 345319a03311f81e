//! Seeds the portfolio with the shop's default product set.
//!
//! Non-destructive: existing rows are kept, defaults are appended.
//! Run with: cargo run --bin seed

use anyhow::Result;
use tracing::info;

use madina_press_api::database;
use madina_press_api::models::current_date_string;
use madina_press_api::models::portfolio::Category;

struct SeedProduct {
    title: &'static str,
    category: Category,
    image: &'static str,
    description: &'static str,
    details: &'static str,
}

fn default_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            title: "علبة حلويات فاخرة",
            category: Category::DessertsExhibits,
            image: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=600",
            description: "تصميم علبة حلويات أنيقة وفاخرة",
            details: "علبة كرتون مطبوعة بجودة عالية مع تشطيب لامع",
        },
        SeedProduct {
            title: "كرتونة دواء شركة",
            category: Category::PharmaCompanies,
            image: "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=600",
            description: "عبوات أدوية احترافية",
            details: "كرتون طبي بمعايير الجودة العالمية",
        },
        SeedProduct {
            title: "غلاف أشعة طبية",
            category: Category::RadiologyCenters,
            image: "https://images.unsplash.com/photo-1579684385127-1ef15d508118?w=600",
            description: "أغلفة أشعة احترافية",
            details: "غلاف أشعة بجودة عالية ومقاوم للماء",
        },
        SeedProduct {
            title: "علب كيك وحلويات",
            category: Category::DessertsExhibits,
            image: "https://images.unsplash.com/photo-1562440499-64c9a111f713?w=600",
            description: "علب كيك متنوعة",
            details: "علب كيك بأحجام مختلفة مع إمكانية التخصيص",
        },
        SeedProduct {
            title: "عبوة دواء طبي",
            category: Category::PharmaCompanies,
            image: "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=600",
            description: "عبوات دوائية متقدمة",
            details: "عبوات محكمة الإغلاق ومطابقة للمواصفات الدوائية",
        },
        SeedProduct {
            title: "غلاف أشعة سينية",
            category: Category::RadiologyCenters,
            image: "https://images.unsplash.com/photo-1516549655169-df83a0774514?w=600",
            description: "أغلفة أشعة سينية",
            details: "أغلفة مخصصة لحفظ صور الأشعة السينية",
        },
        SeedProduct {
            title: "كتاب دراسي مطبوع",
            category: Category::BooksCovers,
            image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=600",
            description: "طباعة كتب دراسية",
            details: "طباعة كتب بأعلى جودة وورق فاخر",
        },
        SeedProduct {
            title: "غلاف كتاب فاخر",
            category: Category::BooksCovers,
            image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=600",
            description: "تصميم أغلفة كتب",
            details: "تصميم وطباعة أغلفة كتب بتشطيبات مميزة",
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let pool = database::connect().await?;
    database::run_migrations(&pool).await?;

    let existing: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM portfolio_items").fetch_one(&pool).await?;
    if existing > 0 {
        info!("{} products already in the database, appending defaults", existing);
    }

    let date = current_date_string();
    let products = default_products();

    for product in &products {
        sqlx::query(
            "INSERT INTO portfolio_items (title, category, image, description, details, date) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product.title)
        .bind(product.category.as_str())
        .bind(product.image)
        .bind(product.description)
        .bind(product.details)
        .bind(&date)
        .execute(&pool)
        .await?;
    }

    info!("seeded {} products", products.len());

    let titles: Vec<(String, String)> =
        sqlx::query_as("SELECT title, category FROM portfolio_items ORDER BY created_at DESC")
            .fetch_all(&pool)
            .await?;
    for (i, (title, category)) in titles.iter().enumerate() {
        info!("{}. {} ({})", i + 1, title, category);
    }

    Ok(())
}
