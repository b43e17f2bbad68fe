//! Weighted compatibility scoring between a job description and a resume

use crate::processing::features::FeatureRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which weighting to apply.
///
/// `Primary` feeds batch ranking and adds a small quality nudge; `Simple` is
/// the single-resume preview formula without it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    Primary,
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyWeights {
    pub skill: f64,
    pub experience: f64,
    pub quality: f64,
    /// Skill score used when the job description lists no skills
    pub skill_score_without_jd_skills: f64,
}

impl ScoringPolicy {
    pub fn weights(self) -> PolicyWeights {
        match self {
            ScoringPolicy::Primary => PolicyWeights {
                skill: 0.6,
                experience: 0.3,
                quality: 0.1,
                skill_score_without_jd_skills: 0.0,
            },
            ScoringPolicy::Simple => PolicyWeights {
                skill: 0.7,
                experience: 0.3,
                quality: 0.0,
                skill_score_without_jd_skills: 1.0,
            },
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Primary => write!(f, "primary"),
            ScoringPolicy::Simple => write!(f, "simple"),
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" | "batch" => Ok(ScoringPolicy::Primary),
            "simple" | "preview" => Ok(ScoringPolicy::Simple),
            _ => Err(format!("Invalid scoring policy: {}. Supported: primary, simple", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub policy: ScoringPolicy,
    /// Weighted total, 0-100
    pub total_score: f64,
    /// Fraction of JD skills present in the resume, 0-1
    pub skill_score: f64,
    /// 0-1
    pub experience_score: f64,
    /// Resume quality score as extracted, 0-100
    pub quality_score: u32,
    pub matching_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub technical_skills_match: usize,
    pub soft_skills_match: usize,
    /// Percentage of JD skills covered, 0 when the JD lists none
    pub skill_coverage: f64,
    pub resume_experience: u32,
    pub jd_experience_required: u32,
    pub experience_gap: u32,
}

/// Score `resume` against the job description `jd`.
pub fn score_match(jd: &FeatureRecord, resume: &FeatureRecord, policy: ScoringPolicy) -> MatchReport {
    let weights = policy.weights();
    let jd_skills = &jd.skills.all;
    let resume_skills = &resume.skills.all;

    let matching_skills: BTreeSet<String> = jd_skills.intersection(resume_skills).cloned().collect();
    let missing_skills: BTreeSet<String> = jd_skills.difference(resume_skills).cloned().collect();

    let coverage = if jd_skills.is_empty() {
        None
    } else {
        Some(matching_skills.len() as f64 / jd_skills.len() as f64)
    };
    let skill_score = coverage.unwrap_or(weights.skill_score_without_jd_skills);

    let experience_score = experience_score(jd.experience_years, resume.experience_years);
    let quality_bonus = f64::from(resume.quality_score) / 1000.0;

    let total = (skill_score * weights.skill
        + experience_score * weights.experience
        + quality_bonus * weights.quality)
        * 100.0;

    MatchReport {
        policy,
        total_score: round_to(total.clamp(0.0, 100.0), 2),
        skill_score: round_to(skill_score, 4),
        experience_score: round_to(experience_score, 4),
        quality_score: resume.quality_score,
        technical_skills_match: jd.skills.technical.intersection(&resume.skills.technical).count(),
        soft_skills_match: jd.skills.soft.intersection(&resume.skills.soft).count(),
        skill_coverage: round_to(coverage.unwrap_or(0.0) * 100.0, 2),
        matching_skills,
        missing_skills,
        resume_experience: resume.experience_years,
        jd_experience_required: jd.experience_years,
        experience_gap: jd.experience_years.saturating_sub(resume.experience_years),
    }
}

/// 1.0 when nothing is required or the requirement is met.
pub fn experience_score(jd_years: u32, resume_years: u32) -> f64 {
    if jd_years == 0 || resume_years >= jd_years {
        1.0
    } else {
        (f64::from(resume_years) / f64::from(jd_years)).min(1.0)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::features::SkillSet;

    fn record(technical: &[&str], soft: &[&str], years: u32, quality: u32) -> FeatureRecord {
        let to_set = |skills: &[&str]| skills.iter().map(|s| s.to_string()).collect();
        FeatureRecord {
            skills: SkillSet::new(to_set(technical), to_set(soft)),
            experience_years: years,
            quality_score: quality,
            text_length: 100,
            ..FeatureRecord::default()
        }
    }

    #[test]
    fn test_primary_policy() {
        let jd = record(&["python", "django", "aws"], &[], 5, 0);
        let resume = record(&["python", "django", "aws", "gcp"], &[], 3, 15);

        let report = score_match(&jd, &resume, ScoringPolicy::Primary);

        assert_eq!(report.skill_score, 1.0);
        assert_eq!(report.experience_score, 0.6);
        // (1.0 * 0.6 + 0.6 * 0.3 + 0.015 * 0.1) * 100
        assert!((report.total_score - 78.15).abs() < 1e-9);
        assert_eq!(report.matching_skills.len(), 3);
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.experience_gap, 2);
        assert_eq!(report.skill_coverage, 100.0);
    }

    #[test]
    fn test_simple_policy() {
        let jd = record(&["python", "rust"], &["leadership"], 4, 0);
        let resume = record(&["python"], &["leadership"], 2, 90);

        let report = score_match(&jd, &resume, ScoringPolicy::Simple);

        // (2/3 * 0.7 + 0.5 * 0.3) * 100
        assert!((report.total_score - 61.67).abs() < 1e-9);
        assert_eq!(report.technical_skills_match, 1);
        assert_eq!(report.soft_skills_match, 1);
        assert_eq!(report.missing_skills.iter().collect::<Vec<_>>(), vec!["rust"]);
        assert_eq!(report.skill_coverage, 66.67);
    }

    #[test]
    fn test_jd_without_skills() {
        let jd = record(&[], &[], 0, 0);
        let resume = record(&["python"], &[], 1, 0);

        let primary = score_match(&jd, &resume, ScoringPolicy::Primary);
        assert_eq!(primary.skill_score, 0.0);
        assert_eq!(primary.skill_coverage, 0.0);
        assert_eq!(primary.total_score, 30.0);

        let simple = score_match(&jd, &resume, ScoringPolicy::Simple);
        assert_eq!(simple.skill_score, 1.0);
        assert_eq!(simple.skill_coverage, 0.0);
        assert_eq!(simple.total_score, 100.0);
    }

    #[test]
    fn test_experience_score_rules() {
        for resume_years in 0..20 {
            assert_eq!(experience_score(0, resume_years), 1.0);
        }
        for jd_years in 1..20 {
            for resume_years in jd_years..30 {
                assert_eq!(experience_score(jd_years, resume_years), 1.0);
            }
        }
        assert_eq!(experience_score(4, 1), 0.25);
    }

    #[test]
    fn test_total_score_bounds() {
        let jd = record(&["python"], &[], 2, 0);
        let resume = record(&["python"], &[], 10, 100);

        let report = score_match(&jd, &resume, ScoringPolicy::Primary);
        assert!(report.total_score <= 100.0);
        assert_eq!(report.experience_gap, 0);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("Primary".parse::<ScoringPolicy>(), Ok(ScoringPolicy::Primary));
        assert_eq!("simple".parse::<ScoringPolicy>(), Ok(ScoringPolicy::Simple));
        assert!("fancy".parse::<ScoringPolicy>().is_err());
    }
}
