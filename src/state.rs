use sqlx::PgPool;

/// Shared application state: the store connection is opened once at startup
/// and injected into each service per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
