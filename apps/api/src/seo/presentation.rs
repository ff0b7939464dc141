//! Badge hints for a score: text color, background and icon per band.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Bad,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 90 => ScoreBand::Excellent,
            s if s >= 80 => ScoreBand::Good,
            s if s >= 70 => ScoreBand::Fair,
            s if s >= 60 => ScoreBand::Poor,
            _ => ScoreBand::Bad,
        }
    }
}

/// Color scheme of the editor the badge is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// `"dark"` in any case selects dark mode; anything else is light.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(m) if m.trim().eq_ignore_ascii_case("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

pub fn score_color(score: u8, mode: ThemeMode) -> &'static str {
    match (ScoreBand::from_score(score), mode) {
        (ScoreBand::Excellent, ThemeMode::Light) => "text-green-600",
        (ScoreBand::Excellent, ThemeMode::Dark) => "text-green-400",
        (ScoreBand::Good, ThemeMode::Light) => "text-lime-600",
        (ScoreBand::Good, ThemeMode::Dark) => "text-lime-400",
        (ScoreBand::Fair, ThemeMode::Light) => "text-yellow-600",
        (ScoreBand::Fair, ThemeMode::Dark) => "text-yellow-400",
        (ScoreBand::Poor, ThemeMode::Light) => "text-orange-600",
        (ScoreBand::Poor, ThemeMode::Dark) => "text-orange-400",
        (ScoreBand::Bad, ThemeMode::Light) => "text-red-600",
        (ScoreBand::Bad, ThemeMode::Dark) => "text-red-400",
    }
}

pub fn score_bg_color(score: u8, mode: ThemeMode) -> &'static str {
    match (ScoreBand::from_score(score), mode) {
        (ScoreBand::Excellent, ThemeMode::Light) => "bg-green-100",
        (ScoreBand::Excellent, ThemeMode::Dark) => "bg-green-900/30",
        (ScoreBand::Good, ThemeMode::Light) => "bg-lime-100",
        (ScoreBand::Good, ThemeMode::Dark) => "bg-lime-900/30",
        (ScoreBand::Fair, ThemeMode::Light) => "bg-yellow-100",
        (ScoreBand::Fair, ThemeMode::Dark) => "bg-yellow-900/30",
        (ScoreBand::Poor, ThemeMode::Light) => "bg-orange-100",
        (ScoreBand::Poor, ThemeMode::Dark) => "bg-orange-900/30",
        (ScoreBand::Bad, ThemeMode::Light) => "bg-red-100",
        (ScoreBand::Bad, ThemeMode::Dark) => "bg-red-900/30",
    }
}

/// Icons are the same in both modes.
pub fn score_icon(score: u8, _mode: ThemeMode) -> &'static str {
    match ScoreBand::from_score(score) {
        ScoreBand::Excellent => "check-circle",
        ScoreBand::Good => "thumbs-up",
        ScoreBand::Fair => "alert-circle",
        ScoreBand::Poor => "alert-triangle",
        ScoreBand::Bad => "x-circle",
    }
}

/// Everything the badge widget needs for one score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub score: u8,
    pub band: ScoreBand,
    pub color: String,
    pub background: String,
    pub icon: String,
}

impl Badge {
    pub fn new(score: u8, mode: ThemeMode) -> Self {
        Badge {
            score,
            band: ScoreBand::from_score(score),
            color: score_color(score, mode).to_string(),
            background: score_bg_color(score, mode).to_string(),
            icon: score_icon(score, mode).to_string(),
        }
    }
}
