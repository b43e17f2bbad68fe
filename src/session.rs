//! Holder for the currently active job description

use crate::error::{Result, ResumeMatcherError};
use crate::processing::features::FeatureRecord;
use crate::processing::scorer::{score_match, MatchReport, ScoringPolicy};
use log::info;
use std::sync::{Arc, PoisonError, RwLock};

/// One job description at a time; replacing it is serialized by the lock.
#[derive(Default)]
pub struct JobSession {
    active: RwLock<Option<Arc<FeatureRecord>>>,
}

impl JobSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new job description, returning the previous one.
    pub fn replace_job(&self, record: FeatureRecord) -> Option<Arc<FeatureRecord>> {
        info!(
            "Active job description replaced ({} skills, {} years required)",
            record.skills.len(),
            record.experience_years
        );
        let mut slot = self.active.write().unwrap_or_else(PoisonError::into_inner);
        slot.replace(Arc::new(record))
    }

    pub fn active_job(&self) -> Option<Arc<FeatureRecord>> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn match_resume(&self, resume: &FeatureRecord, policy: ScoringPolicy) -> Result<MatchReport> {
        let jd = self.active_job().ok_or(ResumeMatcherError::NoActiveJob)?;
        Ok(score_match(&jd, resume, policy))
    }
}
