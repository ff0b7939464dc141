//! The on-page SEO rule table.
//!
//! Each rule grades one aspect of a [`ContentRecord`] as full, half or no
//! credit against a fixed weight. Every rule always adds its weight to the
//! possible total, so missing data lowers the score instead of being skipped.

use serde::{Deserialize, Serialize};

use crate::models::content::ContentRecord;
use crate::seo::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Full,
    Half,
    None,
}

impl Grade {
    pub fn points(self, weight: u32) -> u32 {
        match self {
            Grade::Full => weight,
            Grade::Half => weight / 2,
            Grade::None => 0,
        }
    }

    fn from_bool(ok: bool) -> Self {
        if ok {
            Grade::Full
        } else {
            Grade::None
        }
    }
}

pub struct Rule {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: u32,
    pub evaluate: fn(&Analysis) -> Grade,
}

/// Everything the rules look at, derived once per scoring call.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub keyword: String,
    pub title: String,
    pub description: String,
    pub keywords_meta: String,
    pub slug: String,
    pub word_count: usize,
    pub keyword_occurrences: usize,
    pub heading_count: usize,
    pub heading_texts: Vec<String>,
    pub image_alts: Vec<Option<String>>,
    pub has_featured_image: bool,
    pub first_paragraph: String,
    pub internal_links: usize,
    pub external_links: usize,
    pub paragraph_word_counts: Vec<usize>,
}

impl Analysis {
    pub fn new(content: &ContentRecord) -> Self {
        let body_text = text::strip_html(&content.body);
        let keyword = text::normalize_keyword(&content.focus_keyword);

        Analysis {
            word_count: text::word_count(&body_text),
            keyword_occurrences: text::count_occurrences(&body_text, &keyword),
            title: content.effective_title().trim().to_string(),
            description: content.effective_description().trim().to_string(),
            keywords_meta: content.effective_keywords(),
            slug: content.slug.trim().to_string(),
            heading_count: text::heading_count(&content.body),
            heading_texts: text::heading_texts(&content.body),
            image_alts: text::image_alts(&content.body),
            has_featured_image: content.has_featured_image(),
            first_paragraph: text::first_paragraph(&content.body),
            internal_links: text::internal_link_count(&content.body),
            external_links: text::external_link_count(&content.body),
            paragraph_word_counts: text::paragraph_word_counts(&content.body),
            keyword,
        }
    }

    fn keyword_in(&self, haystack: &str) -> bool {
        text::contains_keyword(haystack, &self.keyword)
    }
}

fn length_grade(len: usize, full: (usize, usize), half: (usize, usize)) -> Grade {
    if (full.0..=full.1).contains(&len) {
        Grade::Full
    } else if (half.0..=half.1).contains(&len) {
        Grade::Half
    } else {
        Grade::None
    }
}

fn title_length(a: &Analysis) -> Grade {
    length_grade(a.title.chars().count(), (30, 60), (20, 70))
}

fn keyword_in_title(a: &Analysis) -> Grade {
    Grade::from_bool(a.keyword_in(&a.title))
}

fn meta_description_length(a: &Analysis) -> Grade {
    length_grade(a.description.chars().count(), (120, 160), (100, 180))
}

fn keyword_in_meta_description(a: &Analysis) -> Grade {
    Grade::from_bool(a.keyword_in(&a.description))
}

fn slug_length(a: &Analysis) -> Grade {
    length_grade(a.slug.chars().count(), (1, 60), (61, 75))
}

fn keyword_in_slug(a: &Analysis) -> Grade {
    let hyphenated = a.keyword.replace(' ', "-");
    Grade::from_bool(a.keyword_in(&a.slug) || text::contains_keyword(&a.slug, &hyphenated))
}

fn content_length(a: &Analysis) -> Grade {
    match a.word_count {
        n if n >= 600 => Grade::Full,
        n if n >= 300 => Grade::Half,
        _ => Grade::None,
    }
}

fn keyword_in_content(a: &Analysis) -> Grade {
    Grade::from_bool(a.keyword_occurrences > 0)
}

fn subheadings(a: &Analysis) -> Grade {
    match a.heading_count {
        n if n >= 3 => Grade::Full,
        n if n >= 1 => Grade::Half,
        _ => Grade::None,
    }
}

fn keyword_in_subheadings(a: &Analysis) -> Grade {
    Grade::from_bool(a.heading_texts.iter().any(|h| a.keyword_in(h)))
}

fn image_alt_coverage(a: &Analysis) -> Grade {
    let with_alt = a.image_alts.iter().filter(|alt| alt.is_some()).count();
    if with_alt == 0 {
        Grade::None
    } else if with_alt == a.image_alts.len() {
        Grade::Full
    } else {
        Grade::Half
    }
}

fn keyword_in_image_alt(a: &Analysis) -> Grade {
    Grade::from_bool(a.image_alts.iter().flatten().any(|alt| a.keyword_in(alt)))
}

fn featured_image(a: &Analysis) -> Grade {
    Grade::from_bool(a.has_featured_image)
}

fn keyword_density(a: &Analysis) -> Grade {
    if a.word_count == 0 || a.keyword_occurrences == 0 {
        return Grade::None;
    }
    let density = a.keyword_occurrences as f64 / a.word_count as f64 * 100.0;
    if (0.5..=2.5).contains(&density) {
        Grade::Full
    } else if (0.3..=3.0).contains(&density) {
        Grade::Half
    } else {
        Grade::None
    }
}

fn keyword_in_first_paragraph(a: &Analysis) -> Grade {
    Grade::from_bool(a.keyword_in(&a.first_paragraph))
}

fn keyword_at_title_start(a: &Analysis) -> Grade {
    let opening = a.title.split_whitespace().take(3).collect::<Vec<_>>().join(" ");
    Grade::from_bool(a.keyword_in(&opening))
}

fn internal_links(a: &Analysis) -> Grade {
    match a.internal_links {
        n if n >= 2 => Grade::Full,
        n if n >= 1 => Grade::Half,
        _ => Grade::None,
    }
}

fn external_links(a: &Analysis) -> Grade {
    Grade::from_bool(a.external_links >= 1)
}

fn balanced_links(a: &Analysis) -> Grade {
    Grade::from_bool(a.internal_links > 0 && a.external_links > 0)
}

fn paragraph_length(a: &Analysis) -> Grade {
    if a.paragraph_word_counts.is_empty() {
        return Grade::None;
    }
    let total: usize = a.paragraph_word_counts.iter().sum();
    let average = total as f64 / a.paragraph_word_counts.len() as f64;
    Grade::from_bool(average <= 150.0)
}

fn meta_complete(a: &Analysis) -> Grade {
    Grade::from_bool(
        !a.title.is_empty() && !a.description.is_empty() && !a.keywords_meta.is_empty(),
    )
}

const KEYWORD_IN_TITLE_WEIGHT: u32 = 10;

/// Rules with a half band all carry even weights so half credit is whole.
#[rustfmt::skip]
pub const RULES: &[Rule] = &[
    Rule { id: "title_length", label: "Title is 30-60 characters", weight: 10, evaluate: title_length },
    Rule { id: "keyword_in_title", label: "Focus keyword appears in the title", weight: KEYWORD_IN_TITLE_WEIGHT, evaluate: keyword_in_title },
    Rule { id: "meta_description_length", label: "Meta description is 120-160 characters", weight: 10, evaluate: meta_description_length },
    Rule { id: "keyword_in_meta_description", label: "Focus keyword appears in the meta description", weight: 10, evaluate: keyword_in_meta_description },
    Rule { id: "slug_length", label: "Slug is at most 60 characters", weight: 6, evaluate: slug_length },
    Rule { id: "keyword_in_slug", label: "Focus keyword appears in the slug", weight: 6, evaluate: keyword_in_slug },
    Rule { id: "content_length", label: "Content has at least 600 words", weight: 10, evaluate: content_length },
    Rule { id: "keyword_in_content", label: "Focus keyword appears in the content", weight: 10, evaluate: keyword_in_content },
    Rule { id: "subheadings", label: "Content has at least 3 subheadings (H2-H4)", weight: 6, evaluate: subheadings },
    Rule { id: "keyword_in_subheadings", label: "Focus keyword appears in a subheading", weight: 6, evaluate: keyword_in_subheadings },
    Rule { id: "image_alt_coverage", label: "All images have alt text", weight: 6, evaluate: image_alt_coverage },
    Rule { id: "keyword_in_image_alt", label: "Focus keyword appears in image alt text", weight: 6, evaluate: keyword_in_image_alt },
    Rule { id: "featured_image", label: "Featured image is set", weight: 6, evaluate: featured_image },
    Rule { id: "keyword_density", label: "Keyword density is 0.5-2.5%", weight: 10, evaluate: keyword_density },
    Rule { id: "keyword_in_first_paragraph", label: "Focus keyword appears in the first paragraph", weight: 6, evaluate: keyword_in_first_paragraph },
    Rule { id: "keyword_at_title_start", label: "Focus keyword is among the first 3 title words", weight: KEYWORD_IN_TITLE_WEIGHT / 2, evaluate: keyword_at_title_start },
    Rule { id: "internal_links", label: "Content has at least 2 internal links", weight: 6, evaluate: internal_links },
    Rule { id: "external_links", label: "Content has an external link", weight: 6, evaluate: external_links },
    Rule { id: "balanced_links", label: "Content links both internally and externally", weight: 4, evaluate: balanced_links },
    Rule { id: "paragraph_length", label: "Paragraphs average at most 150 words", weight: 4, evaluate: paragraph_length },
    Rule { id: "meta_complete", label: "Title, description and keywords are all set", weight: 4, evaluate: meta_complete },
];
