//! Structured features extracted from one resume or job description

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: BTreeSet<String>,
    pub soft: BTreeSet<String>,
    /// Union of `technical` and `soft`
    pub all: BTreeSet<String>,
}

impl SkillSet {
    pub fn new(technical: BTreeSet<String>, soft: BTreeSet<String>) -> Self {
        let all = technical.union(&soft).cloned().collect();
        Self { technical, soft, all }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl std::fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegreeLevel::Associate => write!(f, "Associate"),
            DegreeLevel::Bachelor => write!(f, "Bachelor"),
            DegreeLevel::Master => write!(f, "Master"),
            DegreeLevel::Doctorate => write!(f, "Doctorate"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degrees: BTreeSet<String>,
    /// First-seen order, at most five entries
    pub institutions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_level: Option<DegreeLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.linkedin.is_none() && self.github.is_none()
    }
}

/// Everything the extractors found in a single document.
///
/// Built once by [`FeatureExtractor`](crate::processing::extractor::FeatureExtractor)
/// and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub skills: SkillSet,
    pub experience_years: u32,
    pub education: Education,
    pub contact: ContactInfo,
    /// First-seen order, at most ten entries
    pub certifications: Vec<String>,
    /// 0..=100
    pub quality_score: u32,
    /// Length of the source text in characters
    pub text_length: usize,
}

impl FeatureRecord {
    /// The canonical record returned for blank, too-short or unprocessable input.
    pub fn empty(text_length: usize) -> Self {
        Self {
            text_length,
            ..Self::default()
        }
    }

    /// True when nothing beyond the text length was extracted.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty(self.text_length)
    }
}

/// Dedup preserving first appearance, then cap.
pub(crate) fn dedup_capped<I>(items: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(cap)
        .collect()
}
