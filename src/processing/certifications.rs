//! Certification and license phrases

use crate::processing::features::dedup_capped;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_CERTIFICATIONS: usize = 10;

pub const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "certificate",
    "license",
    "licensed",
    "aws certified",
    "microsoft certified",
    "google certified",
    "cisco",
    "comptia",
    "pmp",
    "scrum master",
    "agile",
];

// Keyword plus up to 50 characters of trailing words as context
static CERTIFICATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    CERTIFICATION_KEYWORDS
        .iter()
        .map(|keyword| {
            Regex::new(&format!(r"\b{}\s+[\w\s]{{1,50}}", regex::escape(keyword)))
                .expect("Invalid certification regex")
        })
        .collect()
});

pub struct CertificationExtractor;

impl CertificationExtractor {
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let phrases = CERTIFICATION_PATTERNS
            .iter()
            .flat_map(|pattern| pattern.find_iter(&lowered))
            .map(|m| m.as_str().trim().to_string());

        dedup_capped(phrases, MAX_CERTIFICATIONS)
    }
}
