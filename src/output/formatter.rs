//! Output formatters: console, JSON and markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::{FeaturePreview, LeaderboardSummary, MatchSummary, ScoreBand};
use crate::processing::features::FeatureRecord;
use crate::processing::scorer::MatchReport;
use colored::{Color, Colorize};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Renders each report kind for one output format
pub trait OutputFormatter {
    fn format_preview(&self, preview: &FeaturePreview) -> Result<String>;
    fn format_match(&self, summary: &MatchSummary) -> Result<String>;
    fn format_leaderboard(&self, summary: &LeaderboardSummary) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn join_or_none(items: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let band = ScoreBand::from_score(score);
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::BrightGreen,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };
        let badge = band.to_string().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_skill_list(&self, label: &str, skills: &BTreeSet<String>, color: Color) -> String {
        format!("  {} {}\n", label, self.colorize(&join_or_none(skills), color))
    }

    fn format_features(&self, features: &FeatureRecord) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&self.format_skill_list("Technical:", &features.skills.technical, Color::Cyan));
        output.push_str(&self.format_skill_list("Soft:     ", &features.skills.soft, Color::Magenta));

        output.push_str(&self.format_header("Profile", 2));
        output.push_str(&format!("  Experience: {} years\n", features.experience_years));
        output.push_str(&format!(
            "  Quality score: {}/100 {}\n",
            features.quality_score,
            self.format_score_badge(f64::from(features.quality_score))
        ));
        output.push_str(&format!("  Text length: {} characters\n", features.text_length));

        output.push_str(&self.format_header("Education", 3));
        if let Some(level) = features.education.highest_level {
            output.push_str(&format!("  Highest level: {}\n", level));
        }
        output.push_str(&format!("  Degrees: {}\n", join_or_none(&features.education.degrees)));
        output.push_str(&format!("  Institutions: {}\n", join_or_none(&features.education.institutions)));

        if !features.contact.is_empty() {
            output.push_str(&self.format_header("Contact", 3));
            let contact = &features.contact;
            for (label, value) in [
                ("Email", &contact.email),
                ("Phone", &contact.phone),
                ("LinkedIn", &contact.linkedin),
                ("GitHub", &contact.github),
            ] {
                if let Some(value) = value {
                    output.push_str(&format!("  {}: {}\n", label, value));
                }
            }
        }

        if !features.certifications.is_empty() {
            output.push_str(&self.format_header("Certifications", 3));
            for cert in &features.certifications {
                output.push_str(&format!("  • {}\n", cert));
            }
        }

        output
    }

    fn format_report_body(&self, report: &MatchReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total Score: {:.2}% {}\n",
            report.total_score,
            self.format_score_badge(report.total_score)
        ));
        output.push_str(&format!("Scoring policy: {}\n", report.policy));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!("🎯 Skill match: {:.1}%\n", report.skill_score * 100.0));
        output.push_str(&format!("📅 Experience: {:.1}%\n", report.experience_score * 100.0));
        output.push_str(&format!("📝 Resume quality: {}/100\n", report.quality_score));

        output.push_str(&self.format_header("Skills", 3));
        output.push_str(&format!(
            "  Coverage: {:.2}% ({} technical, {} soft matched)\n",
            report.skill_coverage, report.technical_skills_match, report.soft_skills_match
        ));
        output.push_str(&self.format_skill_list("✅ Matching:", &report.matching_skills, Color::Green));
        output.push_str(&self.format_skill_list("⚠️  Missing: ", &report.missing_skills, Color::Yellow));

        output.push_str(&self.format_header("Experience", 3));
        output.push_str(&format!(
            "  Resume: {} years | Required: {} years",
            report.resume_experience, report.jd_experience_required
        ));
        if report.experience_gap > 0 {
            output.push_str(&self.colorize(&format!(" | Gap: {} years", report.experience_gap), Color::Red));
        }
        output.push('\n');

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_preview(&self, preview: &FeaturePreview) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("📄 {}", preview.source), 1));
        if preview.features.is_empty() {
            output.push_str(&self.colorize("Not enough text to extract features.\n", Color::Yellow));
        }
        output.push_str(&self.format_features(&preview.features));

        if self.detailed && !preview.text_preview.is_empty() {
            output.push_str(&self.format_header("Text Preview", 3));
            output.push_str(&preview.text_preview);
            output.push('\n');
        }

        Ok(output)
    }

    fn format_match(&self, summary: &MatchSummary) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME MATCH", 1));
        output.push_str(&format!("Resume: {} | Job: {}\n", summary.resume, summary.job));
        output.push_str(&self.format_report_body(&summary.report));

        Ok(output)
    }

    fn format_leaderboard(&self, summary: &LeaderboardSummary) -> Result<String> {
        let board = &summary.leaderboard;
        let mut output = String::new();

        output.push_str(&self.format_header("🏆 CANDIDATE LEADERBOARD", 1));
        output.push_str(&format!(
            "Job: {} | {} candidates | policy: {}\n",
            summary.job,
            board.len(),
            board.policy
        ));
        output.push_str(&format!(
            "Required: {} years | Skills: {}\n\n",
            board.jd_experience_required,
            join_or_none(&board.jd_skills)
        ));

        for entry in summary.visible_entries() {
            output.push_str(&format!(
                "{:>3}. {:<32} {:>6.2}% {}\n",
                entry.rank,
                entry.candidate,
                entry.report.total_score,
                self.format_score_badge(entry.report.total_score)
            ));
            if self.detailed {
                output.push_str(&format!(
                    "     skills {:.0}% | experience {}y (gap {}) | missing: {}\n",
                    entry.report.skill_coverage,
                    entry.report.resume_experience,
                    entry.report.experience_gap,
                    join_or_none(&entry.report.missing_skills)
                ));
            }
        }

        if board.is_empty() {
            output.push_str(&self.colorize("No candidates scored.\n", Color::Yellow));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_preview(&self, preview: &FeaturePreview) -> Result<String> {
        self.to_json(preview)
    }

    fn format_match(&self, summary: &MatchSummary) -> Result<String> {
        self.to_json(summary)
    }

    fn format_leaderboard(&self, summary: &LeaderboardSummary) -> Result<String> {
        self.to_json(summary)
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn metadata_line(&self) -> String {
        if self.include_metadata {
            format!("**Generated:** {}\n\n", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
        } else {
            String::new()
        }
    }

    fn skill_cell(skills: &BTreeSet<String>) -> String {
        if skills.is_empty() {
            "_none_".to_string()
        } else {
            skills.iter().map(|s| format!("`{}`", s)).collect::<Vec<_>>().join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_preview(&self, preview: &FeaturePreview) -> Result<String> {
        let features = &preview.features;
        let mut output = String::new();

        output.push_str(&format!("# 📄 Feature Preview: {}\n\n", preview.source));
        output.push_str(&self.metadata_line());

        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        output.push_str(&format!("| Technical skills | {} |\n", Self::skill_cell(&features.skills.technical)));
        output.push_str(&format!("| Soft skills | {} |\n", Self::skill_cell(&features.skills.soft)));
        output.push_str(&format!("| Experience | {} years |\n", features.experience_years));
        output.push_str(&format!("| Degrees | {} |\n", join_or_none(&features.education.degrees)));
        output.push_str(&format!("| Institutions | {} |\n", join_or_none(&features.education.institutions)));
        output.push_str(&format!("| Certifications | {} |\n", join_or_none(&features.certifications)));
        output.push_str(&format!("| Quality score | {}/100 |\n", features.quality_score));
        output.push_str(&format!("| Text length | {} |\n\n", features.text_length));

        if !preview.text_preview.is_empty() {
            output.push_str("## Text Preview\n\n```text\n");
            output.push_str(&preview.text_preview);
            output.push_str("\n```\n");
        }

        Ok(output)
    }

    fn format_match(&self, summary: &MatchSummary) -> Result<String> {
        let report = &summary.report;
        let mut output = String::new();

        output.push_str("# 📊 Resume Match Report\n\n");
        output.push_str(&self.metadata_line());
        output.push_str(&format!("**Resume:** `{}` | **Job:** `{}`\n\n", summary.resume, summary.job));
        output.push_str(&format!(
            "**Total Score:** {:.2}% ({}, `{}` policy)\n\n",
            report.total_score,
            ScoreBand::from_score(report.total_score),
            report.policy
        ));

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Component | Score |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| 🎯 Skills | {:.1}% |\n", report.skill_score * 100.0));
        output.push_str(&format!("| 📅 Experience | {:.1}% |\n", report.experience_score * 100.0));
        output.push_str(&format!("| 📝 Quality | {}/100 |\n\n", report.quality_score));

        output.push_str("## Skills\n\n");
        output.push_str(&format!("- **Coverage:** {:.2}%\n", report.skill_coverage));
        output.push_str(&format!("- **Matching:** {}\n", Self::skill_cell(&report.matching_skills)));
        output.push_str(&format!("- **Missing:** {}\n\n", Self::skill_cell(&report.missing_skills)));

        output.push_str("## Experience\n\n");
        output.push_str(&format!(
            "Resume shows **{}** years against **{}** required (gap: {}).\n",
            report.resume_experience, report.jd_experience_required, report.experience_gap
        ));

        Ok(output)
    }

    fn format_leaderboard(&self, summary: &LeaderboardSummary) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# 🏆 Candidate Leaderboard: {}\n\n", summary.job));
        output.push_str(&self.metadata_line());
        output.push_str("| Rank | Candidate | Score | Skills | Experience | Missing |\n");
        output.push_str("|------|-----------|-------|--------|------------|---------|\n");

        for entry in summary.visible_entries() {
            let report = &entry.report;
            output.push_str(&format!(
                "| {} | {} | {:.2}% | {:.0}% | {}y | {} |\n",
                entry.rank,
                entry.candidate,
                report.total_score,
                report.skill_coverage,
                report.resume_experience,
                Self::skill_cell(&report.missing_skills)
            ));
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn preview(&self, preview: &FeaturePreview, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_preview(preview)
    }

    pub fn match_report(&self, summary: &MatchSummary, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_match(summary)
    }

    pub fn leaderboard(&self, summary: &LeaderboardSummary, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_leaderboard(summary)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::features::SkillSet;
    use crate::processing::leaderboard::Leaderboard;
    use crate::processing::scorer::{score_match, ScoringPolicy};

    fn record(technical: &[&str], years: u32) -> FeatureRecord {
        FeatureRecord {
            skills: SkillSet::new(technical.iter().map(|s| s.to_string()).collect(), BTreeSet::new()),
            experience_years: years,
            quality_score: 40,
            text_length: 200,
            ..FeatureRecord::default()
        }
    }

    fn summary() -> MatchSummary {
        let jd = record(&["python", "rust"], 5);
        let resume = record(&["python"], 2);
        MatchSummary {
            job: "jd.txt".to_string(),
            resume: "cv.pdf".to_string(),
            report: score_match(&jd, &resume, ScoringPolicy::Simple),
        }
    }

    #[test]
    fn test_console_match_without_colors() {
        let output = ConsoleFormatter::new(false, false).format_match(&summary()).unwrap();

        assert!(output.contains("Resume: cv.pdf | Job: jd.txt"));
        assert!(output.contains("Missing:  rust"));
        assert!(output.contains("Gap: 3 years"));
        assert!(output.contains("policy: simple"));
    }

    #[test]
    fn test_json_match_round_trips() {
        let output = JsonFormatter::new(false).format_match(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["report"]["policy"], "simple");
        assert_eq!(value["report"]["matching_skills"], serde_json::json!(["python"]));
        assert_eq!(value["report"]["experience_gap"], 3);
    }

    #[test]
    fn test_markdown_leaderboard_respects_top() {
        let jd = record(&["python"], 1);
        let a = record(&["python"], 3);
        let b = record(&[], 0);
        let board = Leaderboard::rank(
            &jd,
            vec![("a.pdf".to_string(), &a), ("b.pdf".to_string(), &b)],
            ScoringPolicy::Primary,
        );
        let summary = LeaderboardSummary {
            job: "jd.txt".to_string(),
            leaderboard: board,
            top: Some(1),
        };

        let output = MarkdownFormatter::new(false).format_leaderboard(&summary).unwrap();

        assert!(output.contains("| 1 | a.pdf |"));
        assert!(!output.contains("b.pdf"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::from_config(&OutputConfig {
            color_output: false,
            ..OutputConfig::default()
        });
        let preview = FeaturePreview::new("cv.txt".to_string(), "short", FeatureRecord::empty(5), 100);

        let console = generator.preview(&preview, OutputFormat::Console).unwrap();
        assert!(console.contains("Not enough text"));

        let json = generator.preview(&preview, OutputFormat::Json).unwrap();
        assert!(json.contains("\"text_preview\": \"short\""));
    }
}
