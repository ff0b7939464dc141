use serde::{Deserialize, Serialize};

use crate::models::content::ContentRecord;
use crate::seo::presentation::{Badge, ScoreBand, ThemeMode};
use crate::seo::rules::{Analysis, Grade, RULES};

/// Outcome of one rule for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub id: String,
    pub label: String,
    pub grade: Grade,
    pub earned: u32,
    pub possible: u32,
}

/// Full scoring breakdown, recomputed on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8, // 0 – 100
    pub band: ScoreBand,
    pub badge: Badge,
    pub earned: u32,
    pub possible: u32,
    pub checks: Vec<CheckResult>,
}

/// Grades `content` against every rule and returns a 0–100 score.
pub fn compute_score(content: &ContentRecord) -> u8 {
    let analysis = Analysis::new(content);
    let (earned, possible) = RULES.iter().fold((0, 0), |(earned, possible), rule| {
        let grade = (rule.evaluate)(&analysis);
        (earned + grade.points(rule.weight), possible + rule.weight)
    });
    to_percentage(earned, possible)
}

/// Same score as [`compute_score`], with the per-rule breakdown and badge hints.
pub fn compute_report(content: &ContentRecord, mode: ThemeMode) -> ScoreReport {
    let analysis = Analysis::new(content);

    let checks: Vec<CheckResult> = RULES
        .iter()
        .map(|rule| {
            let grade = (rule.evaluate)(&analysis);
            CheckResult {
                id: rule.id.to_string(),
                label: rule.label.to_string(),
                grade,
                earned: grade.points(rule.weight),
                possible: rule.weight,
            }
        })
        .collect();

    let earned = checks.iter().map(|c| c.earned).sum();
    let possible = checks.iter().map(|c| c.possible).sum();
    let score = to_percentage(earned, possible);

    ScoreReport {
        score,
        band: ScoreBand::from_score(score),
        badge: Badge::new(score, mode),
        earned,
        possible,
        checks,
    }
}

fn to_percentage(earned: u32, possible: u32) -> u8 {
    if possible == 0 {
        return 0;
    }
    (earned as f64 / possible as f64 * 100.0).round().clamp(0.0, 100.0) as u8
}
