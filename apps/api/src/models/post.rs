use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::content::{split_keywords, ContentRecord};

/// A row of the content store's `blog_posts` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    /// Comma-separated.
    pub meta_keywords: Option<String>,
    pub focus_keyword: Option<String>,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostRow> for ContentRecord {
    fn from(row: PostRow) -> Self {
        ContentRecord {
            title: row.title,
            slug: row.slug,
            meta_title: row.meta_title.unwrap_or_default(),
            meta_description: row.meta_description.unwrap_or_default(),
            meta_keywords: row
                .meta_keywords
                .as_deref()
                .map(split_keywords)
                .unwrap_or_default(),
            focus_keyword: row.focus_keyword.unwrap_or_default(),
            body: row.content,
            excerpt: row.excerpt.unwrap_or_default(),
            featured_image: row.featured_image.filter(|url| !url.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_content_record() {
        let row = PostRow {
            id: Uuid::new_v4(),
            title: "Outsourced support".into(),
            slug: "outsourced-support".into(),
            meta_title: None,
            meta_description: Some("desc".into()),
            meta_keywords: Some("bpo, support".into()),
            focus_keyword: None,
            content: "<p>body</p>".into(),
            excerpt: None,
            featured_image: Some("".into()),
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let record = ContentRecord::from(row);
        assert_eq!(record.body, "<p>body</p>");
        assert_eq!(record.meta_keywords, vec!["bpo", "support"]);
        assert_eq!(record.focus_keyword, "");
        assert!(record.featured_image.is_none());
    }
}
