//! Output formatting for feature previews, match reports and leaderboards

pub mod report;
pub mod formatter;

pub use formatter::ReportGenerator;
pub use report::{FeaturePreview, LeaderboardSummary, MatchSummary};
