//! Axum route handlers for the SEO API.

use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::content::ContentRecord;
use crate::seo::presentation::{Badge, ThemeMode};
use crate::seo::scoring::{compute_report, ScoreReport};

#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BadgeQuery {
    /// Kept raw so out-of-range and fractional values can be clamped.
    pub score: Option<String>,
    pub mode: Option<String>,
}

/// POST /api/v1/seo/score
///
/// Accepts any JSON body. Fields that are missing or of the wrong type count
/// as empty, so a half-filled editor form still gets a score.
pub async fn handle_score(
    AppQuery(query): AppQuery<ModeQuery>,
    AppJson(body): AppJson<Value>,
) -> Json<ScoreReport> {
    let content = ContentRecord::from_json(&body);
    let report = compute_report(&content, ThemeMode::parse(query.mode.as_deref()));
    debug!(
        score = report.score,
        earned = report.earned,
        possible = report.possible,
        "scored content"
    );
    Json(report)
}

/// GET /api/v1/seo/badge?score=N&mode=light|dark
pub async fn handle_badge(
    AppQuery(query): AppQuery<BadgeQuery>,
) -> Result<Json<Badge>, AppError> {
    let raw = query
        .score
        .ok_or_else(|| AppError::Validation("score is required".to_string()))?;
    let score = parse_score(&raw)?;
    Ok(Json(Badge::new(
        score,
        ThemeMode::parse(query.mode.as_deref()),
    )))
}

/// Any finite number (or infinity) rounded and clamped into 0..=100.
fn parse_score(raw: &str) -> Result<u8, AppError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("score must be a number, got '{raw}'")))?;
    if value.is_nan() {
        return Err(AppError::Validation("score must be a number".to_string()));
    }
    Ok(value.round().clamp(0.0, 100.0) as u8)
}
