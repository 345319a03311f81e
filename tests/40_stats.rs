mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn summary_reflects_both_collections() -> Result<()> {
    if !common::db_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Make sure at least one item and one unread message exist
    let res = client
        .post(format!("{}/api/portfolio", server.base_url))
        .json(&json!({ "title": "إحصاء", "category": "حلويات ومعارض", "image": "http://x/s.png" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/messages", server.base_url))
        .json(&json!({ "type": "inquiry", "name": "سارة", "phone": "0111", "message": "سؤال" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.get(format!("{}/api/stats", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let stats = res.json::<Value>().await?;

    assert!(stats["totalProducts"].as_i64().unwrap_or(-1) >= 1);
    assert!(stats["totalMessages"].as_i64().unwrap_or(-1) >= 1);
    assert!(stats["unreadMessages"].as_i64().unwrap_or(-1) >= 1);

    let counts = stats["categoryCounts"].as_array().expect("categoryCounts is an array");
    let bucket = counts
        .iter()
        .find(|c| c["_id"] == "حلويات ومعارض")
        .expect("created category appears in the breakdown");
    assert!(bucket["count"].as_i64().unwrap_or(0) >= 1);

    Ok(())
}
