use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SlugRequest {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct SlugResponse {
    pub slug: String,
    pub cached: bool,
}

/// POST /api/v1/slugs
pub async fn handle_generate_slug(
    State(state): State<AppState>,
    AppJson(req): AppJson<SlugRequest>,
) -> Result<Json<SlugResponse>, AppError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let (slug, cached) = state.slug_cache.slug_for(title);
    if slug.is_empty() {
        return Err(AppError::Validation(
            "title has no characters usable in a slug".to_string(),
        ));
    }

    debug!(cached, cache_size = state.slug_cache.len(), "generated slug");
    Ok(Json(SlugResponse { slug, cached }))
}
