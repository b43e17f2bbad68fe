//! Lexicon-based skill extraction with optional linguistic refinement

use crate::processing::enricher::LinguisticEnricher;
use crate::processing::features::SkillSet;
use crate::processing::lexicon::{self, SkillCategory};
use aho_corasick::{AhoCorasick, BuildError};
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Lexicon entries in pattern order, aligned with `SKILL_MATCHER` pattern ids.
static SKILL_ENTRIES: Lazy<Vec<(&'static str, SkillCategory)>> =
    Lazy::new(|| lexicon::entries().collect());

static SKILL_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| build_skill_matcher().expect("Failed to build skill matcher"));

/// Literal matcher over every lexicon entry; input is lowercased first.
fn build_skill_matcher() -> Result<AhoCorasick, BuildError> {
    AhoCorasick::new(SKILL_ENTRIES.iter().map(|(skill, _)| *skill))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A hit counts when it sits between text edges or non-word characters,
/// so "java" never matches inside "javascript" while "c++" still matches.
fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Skill extractor for technical and soft skills
pub struct SkillExtractor {
    enricher: Option<Arc<dyn LinguisticEnricher>>,
}

impl SkillExtractor {
    /// Direct lexicon scanning only
    pub fn new() -> Self {
        Self { enricher: None }
    }

    pub fn with_enricher(enricher: Arc<dyn LinguisticEnricher>) -> Self {
        Self {
            enricher: Some(enricher),
        }
    }

    pub fn has_enricher(&self) -> bool {
        self.enricher.is_some()
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        let mut technical = BTreeSet::new();
        let mut soft = BTreeSet::new();

        for hit in SKILL_MATCHER.find_overlapping_iter(&lowered) {
            if !on_word_boundaries(&lowered, hit.start(), hit.end()) {
                continue;
            }
            let (skill, category) = SKILL_ENTRIES[hit.pattern().as_usize()];
            match category {
                SkillCategory::Technical => technical.insert(skill.to_string()),
                SkillCategory::Soft => soft.insert(skill.to_string()),
            };
        }

        if let Some(enricher) = &self.enricher {
            match enricher.candidate_phrases(&lowered) {
                Ok(phrases) => {
                    for phrase in phrases {
                        let phrase = phrase.trim();
                        match lexicon::categorize(phrase) {
                            Some(SkillCategory::Technical) => {
                                technical.insert(phrase.to_string());
                            }
                            Some(SkillCategory::Soft) => {
                                soft.insert(phrase.to_string());
                            }
                            None => {}
                        }
                    }
                }
                Err(e) => {
                    warn!("Enricher '{}' failed, using lexicon scan only: {}", enricher.name(), e);
                }
            }
        }

        debug!("Found {} technical and {} soft skills", technical.len(), soft.len());
        SkillSet::new(technical, soft)
    }

    /// Number of lexicon entries the extractor scans for
    pub fn skill_count(&self) -> usize {
        SKILL_ENTRIES.len()
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}
