use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::errors::AppError;
use crate::slug::SlugCache;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Content store pool. `None` when `DATABASE_URL` is unset.
    pub db: Option<PgPool>,
    pub config: Config,
    pub slug_cache: Arc<SlugCache>,
}

impl AppState {
    pub fn new(db: Option<PgPool>, config: Config) -> Self {
        let slug_cache = Arc::new(SlugCache::new(config.slug_cache_capacity));
        AppState {
            db,
            config,
            slug_cache,
        }
    }

    /// The content store, or 503 when the service runs without one.
    pub fn db(&self) -> Result<&PgPool, AppError> {
        self.db.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("content database is not configured".to_string())
        })
    }
}
