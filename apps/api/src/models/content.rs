use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A piece of authored content as the editor sees it.
///
/// Every field defaults to empty; scoring never fails on missing data, it just
/// scores lower.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRecord {
    pub title: String,
    pub slug: String,
    /// Overrides `title` in search results when set.
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: Vec<String>,
    pub focus_keyword: String,
    pub body: String,
    /// Stands in for the meta description when that is blank.
    pub excerpt: String,
    pub featured_image: Option<String>,
}

impl ContentRecord {
    /// Builds a record from arbitrary JSON, taking whatever string fields are
    /// present and treating anything else (missing, null, numbers, objects)
    /// as empty. Accepts both `snake_case` and `camelCase` keys.
    pub fn from_json(value: &Value) -> Self {
        let text = |keys: &[&str]| -> String {
            keys.iter()
                .find_map(|k| value.get(*k).and_then(|v| v.as_str()))
                .unwrap_or_default()
                .to_string()
        };

        let featured_image = Some(text(&["featured_image", "featuredImage"]))
            .filter(|url| !url.trim().is_empty());

        let meta_keywords = ["meta_keywords", "metaKeywords"]
            .iter()
            .find_map(|k| value.get(*k))
            .map(keywords_from_json)
            .unwrap_or_default();

        ContentRecord {
            title: text(&["title"]),
            slug: text(&["slug"]),
            meta_title: text(&["meta_title", "metaTitle"]),
            meta_description: text(&["meta_description", "metaDescription"]),
            meta_keywords,
            focus_keyword: text(&["focus_keyword", "focusKeyword"]),
            body: text(&["body", "content"]),
            excerpt: text(&["excerpt"]),
            featured_image,
        }
    }

    /// Title shown in search results.
    pub fn effective_title(&self) -> &str {
        if self.meta_title.trim().is_empty() {
            &self.title
        } else {
            &self.meta_title
        }
    }

    /// Description shown in search results.
    pub fn effective_description(&self) -> &str {
        if self.meta_description.trim().is_empty() {
            &self.excerpt
        } else {
            &self.meta_description
        }
    }

    /// Keywords meta tag content, falling back to the focus keyword.
    pub fn effective_keywords(&self) -> String {
        let joined = self
            .meta_keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            self.focus_keyword.trim().to_string()
        } else {
            joined
        }
    }

    pub fn has_featured_image(&self) -> bool {
        self.featured_image
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// Keywords arrive either as `"a, b, c"` or `["a", "b", "c"]`.
pub fn keywords_from_json(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => split_keywords(s),
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
