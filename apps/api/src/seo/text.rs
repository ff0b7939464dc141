//! Naive markup analysis for SEO checks.
//!
//! No HTML parser: tags are matched with regexes, so malformed markup only
//! skews counts and never fails.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static HEADING_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h[2-4](?:\s[^>]*)?>").unwrap());
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h[2-4](?:\s[^>]*)?>(.*?)</h[2-4]\s*>").unwrap());
// Quoted attribute values may contain `>`.
static IMG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<img\b(?:"[^"]*"|'[^']*'|[^"'>])*>"#).unwrap());
static ALT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\salt\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});
static INTERNAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)href\s*=\s*["']/[^/]"#).unwrap());
static EXTERNAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)href\s*=\s*["']https?://"#).unwrap());
static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").unwrap());

const FIRST_PARAGRAPH_FALLBACK_CHARS: usize = 200;

/// Replaces every tag with a space and collapses whitespace.
pub fn strip_html(markup: &str) -> String {
    let without_tags = TAG.replace_all(markup, " ").replace("&nbsp;", " ");
    collapse_whitespace(&without_tags)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lowercased keyword with internal whitespace collapsed. Empty if blank.
pub fn normalize_keyword(keyword: &str) -> String {
    collapse_whitespace(keyword).to_lowercase()
}

/// Case-insensitive substring test. An empty needle never matches.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let keyword = normalize_keyword(keyword);
    !keyword.is_empty() && haystack.to_lowercase().contains(&keyword)
}

/// Non-overlapping, case-insensitive occurrences of `keyword`.
pub fn count_occurrences(haystack: &str, keyword: &str) -> usize {
    let keyword = normalize_keyword(keyword);
    if keyword.is_empty() {
        return 0;
    }
    haystack.to_lowercase().matches(keyword.as_str()).count()
}

/// Number of `<h2>`..`<h4>` opening tags.
pub fn heading_count(markup: &str) -> usize {
    HEADING_OPEN.find_iter(markup).count()
}

/// Stripped text of every closed `<h2>`..`<h4>` element.
pub fn heading_texts(markup: &str) -> Vec<String> {
    HEADING
        .captures_iter(markup)
        .filter_map(|c| c.get(1))
        .map(|m| strip_html(m.as_str()))
        .collect()
}

/// One entry per `<img>` tag: its trimmed `alt` value, or `None` when the
/// attribute is absent or blank.
pub fn image_alts(markup: &str) -> Vec<Option<String>> {
    IMG.find_iter(markup)
        .map(|tag| {
            ALT.captures(tag.as_str())
                .and_then(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
                .map(|m| m.as_str().trim().to_string())
                .filter(|alt| !alt.is_empty())
        })
        .collect()
}

/// Site-relative links (`href="/..."`), excluding protocol-relative `//`.
pub fn internal_link_count(markup: &str) -> usize {
    INTERNAL_LINK.find_iter(markup).count()
}

pub fn external_link_count(markup: &str) -> usize {
    EXTERNAL_LINK.find_iter(markup).count()
}

/// Word counts of every `<p>` block that has text after stripping.
pub fn paragraph_word_counts(markup: &str) -> Vec<usize> {
    PARAGRAPH
        .captures_iter(markup)
        .filter_map(|c| c.get(1))
        .map(|m| word_count(&strip_html(m.as_str())))
        .filter(|&n| n > 0)
        .collect()
}

/// Text up to the first blank line, or the first 200 characters of the
/// stripped body when there is no blank line.
pub fn first_paragraph(markup: &str) -> String {
    let normalized = markup.replace("\r\n", "\n");
    let normalized = normalized.trim_start();
    match normalized.split_once("\n\n") {
        Some((head, _)) => strip_html(head),
        None => strip_html(normalized)
            .chars()
            .take(FIRST_PARAGRAPH_FALLBACK_CHARS)
            .collect(),
    }
}
