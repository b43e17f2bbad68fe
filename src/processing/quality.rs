//! Heuristic 0-100 completeness score for a resume

use crate::processing::contact::EMAIL;
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

pub const SECTION_KEYWORDS: &[&str] = &["experience", "education", "skills", "projects"];
pub const ACTION_KEYWORDS: &[&str] = &["responsible", "managed", "developed", "implemented", "achieved"];

const LONG_TEXT_CHARS: usize = 1000;
const MEDIUM_TEXT_CHARS: usize = 500;
const LONG_TEXT_POINTS: u32 = 20;
const MEDIUM_TEXT_POINTS: u32 = 10;
const SECTION_POINTS: u32 = 15;
const ACTION_POINTS: u32 = 2;
const EMAIL_POINTS: u32 = 10;
const MAX_SCORE: u32 = 100;

/// Individual contributions, kept for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityBreakdown {
    pub length_points: u32,
    pub section_points: u32,
    pub action_points: u32,
    pub email_points: u32,
}

impl QualityBreakdown {
    pub fn total(&self) -> u32 {
        (self.length_points + self.section_points + self.action_points + self.email_points).min(MAX_SCORE)
    }
}

pub struct QualityScorer {
    sections: AhoCorasick,
    actions: AhoCorasick,
}

impl QualityScorer {
    pub fn new() -> Self {
        let build = |keywords: &[&str]| {
            AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(keywords)
                .expect("Failed to build quality keyword matcher")
        };

        Self {
            sections: build(SECTION_KEYWORDS),
            actions: build(ACTION_KEYWORDS),
        }
    }

    pub fn score(&self, text: &str) -> u32 {
        self.breakdown(text).total()
    }

    pub fn breakdown(&self, text: &str) -> QualityBreakdown {
        let length = text.chars().count();
        let length_points = if length > LONG_TEXT_CHARS {
            LONG_TEXT_POINTS
        } else if length > MEDIUM_TEXT_CHARS {
            MEDIUM_TEXT_POINTS
        } else {
            0
        };

        QualityBreakdown {
            length_points,
            section_points: Self::distinct_hits(&self.sections, text) * SECTION_POINTS,
            action_points: Self::distinct_hits(&self.actions, text) * ACTION_POINTS,
            email_points: if EMAIL.is_match(text) { EMAIL_POINTS } else { 0 },
        }
    }

    fn distinct_hits(matcher: &AhoCorasick, text: &str) -> u32 {
        // Overlapping search so "skills" inside a longer keyword run is still seen
        let found: HashSet<usize> = matcher
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect();
        found.len() as u32
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new()
    }
}
