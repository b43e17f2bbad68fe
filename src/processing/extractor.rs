//! Feature aggregation: runs every extractor over one document

use crate::config::ExtractionConfig;
use crate::processing::certifications::CertificationExtractor;
use crate::processing::contact::ContactExtractor;
use crate::processing::education::EducationExtractor;
use crate::processing::enricher::{ChunkEnricher, LinguisticEnricher};
use crate::processing::experience::ExperienceExtractor;
use crate::processing::features::FeatureRecord;
use crate::processing::quality::QualityScorer;
use crate::processing::skills::SkillExtractor;
use log::{debug, error};
use once_cell::sync::Lazy;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Inputs shorter than this (after trimming) yield the empty record
pub const MIN_TEXT_CHARS: usize = 50;

static DEFAULT_EXTRACTOR: Lazy<FeatureExtractor> =
    Lazy::new(|| FeatureExtractor::from_config(&ExtractionConfig::default()));

/// Extract features with a shared extractor configured from defaults.
pub fn extract_features(text: &str) -> FeatureRecord {
    DEFAULT_EXTRACTOR.extract_features(text)
}

/// Owns the compiled extractors; cheap to share across threads.
pub struct FeatureExtractor {
    skills: SkillExtractor,
    experience: ExperienceExtractor,
    quality: QualityScorer,
}

impl FeatureExtractor {
    pub fn new(current_year: i32, enricher: Option<Arc<dyn LinguisticEnricher>>) -> Self {
        let skills = match enricher {
            Some(enricher) => SkillExtractor::with_enricher(enricher),
            None => SkillExtractor::new(),
        };
        debug!(
            "Feature extractor ready: {} lexicon entries, enrichment {}, current year {}",
            skills.skill_count(),
            if skills.has_enricher() { "on" } else { "off" },
            current_year
        );

        Self {
            skills,
            experience: ExperienceExtractor::new(current_year),
            quality: QualityScorer::new(),
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        let enricher: Option<Arc<dyn LinguisticEnricher>> = if config.enable_enrichment {
            Some(Arc::new(ChunkEnricher::new()))
        } else {
            None
        };
        Self::new(config.resolved_current_year(), enricher)
    }

    pub fn current_year(&self) -> i32 {
        self.experience.current_year()
    }

    /// Never fails: short input and any panic inside an extractor both
    /// produce [`FeatureRecord::empty`].
    pub fn extract_features(&self, text: &str) -> FeatureRecord {
        let text_length = text.chars().count();

        if text.trim().chars().count() < MIN_TEXT_CHARS {
            debug!("Input too short for extraction ({} chars)", text_length);
            return FeatureRecord::empty(text_length);
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.extract_all(text, text_length))) {
            Ok(record) => record,
            Err(_) => {
                error!("Feature extraction aborted, returning empty record");
                FeatureRecord::empty(text_length)
            }
        }
    }

    fn extract_all(&self, text: &str, text_length: usize) -> FeatureRecord {
        let record = FeatureRecord {
            skills: self.skills.extract(text),
            experience_years: self.experience.extract(text),
            education: EducationExtractor.extract(text),
            contact: ContactExtractor.extract(text),
            certifications: CertificationExtractor.extract(text),
            quality_score: self.quality.score(text),
            text_length,
        };

        debug!(
            "Extracted {} skills, {} years, {} certifications, quality {}",
            record.skills.len(),
            record.experience_years,
            record.certifications.len(),
            record.quality_score
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(2024, Some(Arc::new(ChunkEnricher::new())))
    }

    struct PanickingEnricher;

    impl LinguisticEnricher for PanickingEnricher {
        fn name(&self) -> &str {
            "panicking"
        }

        fn candidate_phrases(&self, _text: &str) -> anyhow::Result<Vec<String>> {
            panic!("tagger crashed")
        }
    }

    #[test]
    fn test_short_input_is_empty_record() {
        let ex = extractor();

        assert_eq!(ex.extract_features(""), FeatureRecord::empty(0));

        let short = "Python, AWS, 5 years of experience";
        let record = ex.extract_features(short);
        assert!(record.is_empty());
        assert_eq!(record.text_length, short.chars().count());

        let padded = format!("   {}   \n\n\n", short);
        assert!(ex.extract_features(&padded).is_empty());
    }

    #[test]
    fn test_full_extraction() {
        let text = "Jane Roe - jane@roe.dev - github.com/janeroe\n\
                    Skills: Python, Django, Docker, leadership\n\
                    Experience: Backend engineer at Acme 2016 - 2022, developed billing APIs.\n\
                    Education: B.S. Computer Science, University of Oregon\n\
                    AWS Certified Developer";
        let record = extractor().extract_features(text);

        assert!(record.skills.technical.contains("python"));
        assert!(record.skills.technical.contains("django"));
        assert!(record.skills.soft.contains("leadership"));
        assert_eq!(record.experience_years, 6);
        assert!(record.education.degrees.contains("b.s"));
        assert_eq!(record.contact.email.as_deref(), Some("jane@roe.dev"));
        assert_eq!(record.contact.github.as_deref(), Some("github.com/janeroe"));
        assert!(record.certifications.iter().any(|c| c.starts_with("aws certified")));
        assert!(record.quality_score > 0);
    }

    #[test]
    fn test_panic_degrades_to_empty_record() {
        let ex = FeatureExtractor::new(2024, Some(Arc::new(PanickingEnricher)));
        let text = "Python developer with 5 years of experience building Django services on AWS";

        let record = ex.extract_features(text);

        assert!(record.is_empty());
        assert_eq!(record.text_length, text.chars().count());
    }

    #[test]
    fn test_default_extractor() {
        let record = extract_features("Looking for a Python developer with 5 years of experience in Django and AWS");
        assert_eq!(record.experience_years, 5);
        assert!(record.skills.technical.contains("python"));
        assert!(record.skills.technical.contains("aws"));
    }

    #[test]
    fn test_from_config_toggles_enrichment() {
        let mut config = ExtractionConfig {
            current_year: Some(2025),
            enable_enrichment: false,
        };
        let plain = FeatureExtractor::from_config(&config);
        assert!(!plain.skills.has_enricher());
        assert_eq!(plain.current_year(), 2025);
        assert!(plain.skills.skill_count() > 100);

        config.enable_enrichment = true;
        assert!(FeatureExtractor::from_config(&config).skills.has_enricher());
    }
}
