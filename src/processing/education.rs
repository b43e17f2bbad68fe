//! Degree and institution detection

use crate::processing::features::{dedup_capped, DegreeLevel, Education};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub const MAX_INSTITUTIONS: usize = 5;

static DEGREE_PATTERNS: Lazy<Vec<(DegreeLevel, Regex)>> = Lazy::new(|| {
    [
        (DegreeLevel::Bachelor, r"\b(bachelor|b\.?[sa]\.?|bs|ba)\b"),
        (DegreeLevel::Master, r"\b(master|m\.?[sa]\.?|ms|ma|mba|msc)\b"),
        (DegreeLevel::Doctorate, r"\b(phd|ph\.?d\.?|doctorate|doctoral)\b"),
        (DegreeLevel::Associate, r"\b(associate|diploma|certificate)\b"),
    ]
    .into_iter()
    .map(|(level, pattern)| (level, Regex::new(pattern).expect("Invalid degree regex")))
    .collect()
});

// Name fragments are kept short and on one line
static INSTITUTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"university of [\w \t]{1,40}",
        r"[\w \t]{1,40} university",
        r"[\w \t]{1,40} college",
        r"[\w \t]{1,40} institute",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid institution regex"))
    .collect()
});

pub struct EducationExtractor;

impl EducationExtractor {
    pub fn extract(&self, text: &str) -> Education {
        let lowered = text.to_lowercase();

        let mut degrees = BTreeSet::new();
        let mut highest_level = None;
        for (level, pattern) in DEGREE_PATTERNS.iter() {
            for cap in pattern.captures_iter(&lowered) {
                if let Some(degree) = cap.get(1) {
                    degrees.insert(degree.as_str().to_string());
                    highest_level = highest_level.max(Some(*level));
                }
            }
        }

        let institutions = INSTITUTION_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.find_iter(&lowered))
            .map(|m| m.as_str().trim().to_string())
            .filter(|name| !name.is_empty());

        Education {
            degrees,
            institutions: dedup_capped(institutions, MAX_INSTITUTIONS),
            highest_level,
        }
    }
}
