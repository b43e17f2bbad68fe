//! Feature extraction and match scoring

pub mod lexicon;
pub mod features;
pub mod enricher;
pub mod skills;
pub mod experience;
pub mod education;
pub mod contact;
pub mod certifications;
pub mod quality;
pub mod extractor;
pub mod scorer;
pub mod leaderboard;

pub use extractor::{extract_features, FeatureExtractor};
pub use features::FeatureRecord;
pub use scorer::{score_match, MatchReport, ScoringPolicy};
