// On-page SEO grading for blog content.
// Implements: markup analysis, the weighted rule table, scoring, badge hints.
// Everything below `handlers` is pure and synchronous.

pub mod handlers;
pub mod presentation;
pub mod rules;
pub mod scoring;
pub mod text;

pub use presentation::ThemeMode;
pub use scoring::{compute_report, compute_score, ScoreReport};
