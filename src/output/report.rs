//! Report structures handed to the formatters

use crate::processing::features::FeatureRecord;
use crate::processing::leaderboard::Leaderboard;
use crate::processing::scorer::MatchReport;
use serde::{Deserialize, Serialize};

/// Extracted features of one document plus the start of its text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturePreview {
    pub source: String,
    pub features: FeatureRecord,
    pub text_preview: String,
}

impl FeaturePreview {
    pub fn new(source: String, text: &str, features: FeatureRecord, preview_chars: usize) -> Self {
        Self {
            source,
            features,
            text_preview: text.chars().take(preview_chars).collect(),
        }
    }
}

/// One resume scored against the active job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub job: String,
    pub resume: String,
    pub report: MatchReport,
}

/// Ranked candidates for one job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardSummary {
    pub job: String,
    pub leaderboard: Leaderboard,
    /// Entries to render; everything when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
}

impl LeaderboardSummary {
    pub fn visible_entries(&self) -> &[crate::processing::leaderboard::LeaderboardEntry] {
        match self.top {
            Some(n) => self.leaderboard.top(n),
            None => &self.leaderboard.entries,
        }
    }
}

/// Qualitative band for a 0-100 match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Excellent => write!(f, "Excellent"),
            ScoreBand::Good => write!(f, "Good"),
            ScoreBand::Fair => write!(f, "Fair"),
            ScoreBand::Poor => write!(f, "Poor"),
        }
    }
}
