use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use madina_press_api::config::config;
use madina_press_api::services::upload_service::MAX_UPLOAD_BYTES;
use madina_press_api::state::AppState;
use madina_press_api::{database, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, BASE_URL.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config();

    let pool = database::connect().await?;
    database::run_migrations(&pool).await?;

    // Uploads are written and served from here
    tokio::fs::create_dir_all(&config.uploads_dir).await?;

    let app = app(AppState::new(pool));

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Al-Madina Press API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health))
        .merge(portfolio_routes())
        .merge(message_routes())
        .merge(settings_routes())
        // Leave headroom above the upload ceiling; oversize fields are
        // rejected with a localized 400 by the handler itself.
        .route(
            "/api/upload",
            post(handlers::upload::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024)),
        )
        .route("/api/stats", get(handlers::stats::summary))
        .nest_service("/uploads", ServeDir::new(&config().uploads_dir))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn portfolio_routes() -> Router<AppState> {
    use handlers::portfolio;

    Router::new()
        .route("/api/portfolio", get(portfolio::list).post(portfolio::create))
        .route(
            "/api/portfolio/:id",
            get(portfolio::get).put(portfolio::update).delete(portfolio::delete),
        )
}

fn message_routes() -> Router<AppState> {
    use handlers::messages;

    Router::new()
        .route(
            "/api/messages",
            get(messages::list).post(messages::create).delete(messages::delete_all),
        )
        .route("/api/messages/:id", delete(messages::delete))
        .route("/api/messages/:id/read", patch(messages::mark_read))
}

fn settings_routes() -> Router<AppState> {
    use handlers::settings;

    Router::new().route("/api/settings/:key", get(settings::get).put(settings::set))
}

/// GET / - Service banner and endpoint map
async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "message": "مرحباً بك في API مطبعة المدينة",
        "version": version,
        "endpoints": {
            "portfolio": "/api/portfolio",
            "messages": "/api/messages",
            "upload": "/api/upload",
            "settings": "/api/settings"
        }
    }))
}
