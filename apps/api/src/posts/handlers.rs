use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{AppPath, AppQuery};
use crate::models::content::ContentRecord;
use crate::posts::repository::{find_post_by_slug, list_recent_posts};
use crate::seo::presentation::ScoreBand;
use crate::seo::{compute_report, compute_score, ScoreReport, ThemeMode};
use crate::state::AppState;

const DEFAULT_AUDIT_LIMIT: i64 = 50;
const MAX_AUDIT_LIMIT: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct PostScoreQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PostScoreSummary {
    pub slug: String,
    pub title: String,
    pub score: u8,
    pub band: ScoreBand,
}

/// GET /api/v1/posts/:slug/seo
pub async fn handle_post_score(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
    AppQuery(query): AppQuery<PostScoreQuery>,
) -> Result<Json<ScoreReport>, AppError> {
    let pool = state.db()?;
    let post = find_post_by_slug(pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post '{slug}' not found")))?;

    let content = ContentRecord::from(post);
    Ok(Json(compute_report(
        &content,
        ThemeMode::parse(query.mode.as_deref()),
    )))
}

/// GET /api/v1/posts/seo?limit=N
///
/// Scores the most recently updated posts, worst first.
pub async fn handle_posts_audit(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<AuditQuery>,
) -> Result<Json<Vec<PostScoreSummary>>, AppError> {
    let pool = state.db()?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_AUDIT_LIMIT)
        .clamp(1, MAX_AUDIT_LIMIT);

    let posts = list_recent_posts(pool, limit).await?;
    let summaries = summarize(posts.into_iter().map(ContentRecord::from));
    info!(count = summaries.len(), "audited post SEO scores");
    Ok(Json(summaries))
}

fn summarize(records: impl Iterator<Item = ContentRecord>) -> Vec<PostScoreSummary> {
    let mut summaries: Vec<PostScoreSummary> = records
        .map(|record| {
            let score = compute_score(&record);
            PostScoreSummary {
                slug: record.slug,
                title: record.title,
                score,
                band: ScoreBand::from_score(score),
            }
        })
        .collect();
    summaries.sort_by_key(|s| s.score);
    summaries
}
