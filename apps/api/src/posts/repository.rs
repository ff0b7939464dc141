//! Read-only queries against the content store's `blog_posts` table.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::post::PostRow;

const POST_COLUMNS: &str = "id, title, slug, meta_title, meta_description, meta_keywords, \
     focus_keyword, content, excerpt, featured_image, published, created_at, updated_at";

pub async fn find_post_by_slug(pool: &PgPool, slug: &str) -> Result<Option<PostRow>, AppError> {
    let post = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = $1 LIMIT 1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(post)
}

pub async fn list_recent_posts(pool: &PgPool, limit: i64) -> Result<Vec<PostRow>, AppError> {
    let posts = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {POST_COLUMNS} FROM blog_posts ORDER BY updated_at DESC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(posts)
}
