//! Ranking several candidates against one job description

use crate::processing::features::FeatureRecord;
use crate::processing::scorer::{score_match, MatchReport, ScoringPolicy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub candidate: String,
    pub report: MatchReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub policy: ScoringPolicy,
    pub jd_skills: Vec<String>,
    pub jd_experience_required: u32,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new(jd: &FeatureRecord, policy: ScoringPolicy) -> Self {
        Self {
            policy,
            jd_skills: jd.skills.all.iter().cloned().collect(),
            jd_experience_required: jd.experience_years,
            entries: Vec::new(),
        }
    }

    /// Score every candidate and return the ranked board.
    pub fn rank<'a, I>(jd: &FeatureRecord, candidates: I, policy: ScoringPolicy) -> Self
    where
        I: IntoIterator<Item = (String, &'a FeatureRecord)>,
    {
        let mut board = Self::new(jd, policy);
        for (candidate, resume) in candidates {
            board.add(jd, candidate, resume);
        }
        board
    }

    /// Insert one candidate, keeping entries ordered by total score
    /// (descending) and then by name.
    pub fn add(&mut self, jd: &FeatureRecord, candidate: String, resume: &FeatureRecord) {
        let report = score_match(jd, resume, self.policy);
        self.entries.push(LeaderboardEntry {
            rank: 0,
            candidate,
            report,
        });

        self.entries.sort_by(|a, b| {
            b.report
                .total_score
                .partial_cmp(&a.report.total_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.candidate.cmp(&b.candidate))
        });
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }
    }

    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::features::SkillSet;

    fn record(technical: &[&str], years: u32) -> FeatureRecord {
        FeatureRecord {
            skills: SkillSet::new(technical.iter().map(|s| s.to_string()).collect(), Default::default()),
            experience_years: years,
            text_length: 100,
            ..FeatureRecord::default()
        }
    }

    #[test]
    fn test_ranking_order() {
        let jd = record(&["python", "aws", "docker"], 4);
        let strong = record(&["python", "aws", "docker"], 6);
        let weak = record(&["python"], 1);
        let tied = record(&["python"], 1);

        let board = Leaderboard::rank(
            &jd,
            vec![
                ("zed.pdf".to_string(), &tied),
                ("weak.pdf".to_string(), &weak),
                ("strong.pdf".to_string(), &strong),
            ],
            ScoringPolicy::Primary,
        );

        let names: Vec<&str> = board.entries.iter().map(|e| e.candidate.as_str()).collect();
        assert_eq!(names, vec!["strong.pdf", "weak.pdf", "zed.pdf"]);
        assert_eq!(board.entries[0].rank, 1);
        assert_eq!(board.entries[2].rank, 3);
        assert_eq!(board.top(1).len(), 1);
        assert_eq!(board.top(10).len(), 3);
    }
}
