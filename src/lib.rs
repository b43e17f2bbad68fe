//! Resume matcher library
//!
//! Extracts structured features from resume and job description text and
//! scores candidates against a job with a weighted formula.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod session;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use processing::{extract_features, score_match, FeatureExtractor, FeatureRecord, MatchReport, ScoringPolicy};
pub use session::JobSession;
