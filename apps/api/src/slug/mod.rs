//! Slug generation from post titles, memoised in a bounded cache.
//!
//! The editor asks for a slug on every title keystroke, so results are kept in
//! a fixed-capacity map. Reads use `peek`, which leaves recency untouched, so
//! the cache evicts the oldest inserted title rather than the least used one.

pub mod handlers;

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tracing::debug;

/// Slugs above this length lose credit in the SEO slug check.
pub const MAX_SLUG_LEN: usize = 60;

/// Lowercase ASCII words joined by single hyphens, at most `MAX_SLUG_LEN`
/// characters. Apostrophes are dropped rather than split on.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c == '\'' || c == '\u{2019}' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    truncate_at_word(&slug, MAX_SLUG_LEN)
}

fn truncate_at_word(slug: &str, max: usize) -> String {
    if slug.len() <= max {
        return slug.to_string();
    }
    // ASCII only, so byte offsets are char offsets.
    let cut = &slug[..max];
    if slug.as_bytes()[max] == b'-' {
        return cut.to_string();
    }
    match cut.rfind('-') {
        Some(idx) if idx > 0 => cut[..idx].to_string(),
        _ => cut.trim_end_matches('-').to_string(),
    }
}

/// Thread-safe FIFO cache of title → slug.
pub struct SlugCache {
    entries: Mutex<LruCache<String, String>>,
}

impl SlugCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the slug for `title` and whether it came from the cache.
    pub fn slug_for(&self, title: &str) -> (String, bool) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(slug) = entries.peek(title) {
            return (slug.clone(), true);
        }

        let slug = generate_slug(title);
        if let Some((evicted, _)) = entries.push(title.to_string(), slug.clone()) {
            debug!(evicted = %evicted, "slug cache full, dropped oldest title");
        }
        (slug, false)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
