//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use crate::input::TextSource;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Extract resume features and score them against a job description")]
#[command(long_about = "Pull skills, experience, education, contact details and certifications out of \
resumes and job descriptions, then score candidates against the job with a weighted formula")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview the features extracted from one document
    Extract {
        /// Path to a resume or job description (PDF, TXT, MD)
        file: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include a text preview and extra detail
        #[arg(short, long)]
        detailed: bool,
    },

    /// Score a single resume against a job description
    Match {
        #[command(flatten)]
        job: JobArgs,

        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Scoring policy: primary, simple (defaults to simple for single matches)
        #[arg(short, long)]
        policy: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rank several resumes against a job description
    Rank {
        #[command(flatten)]
        job: JobArgs,

        /// Resume files to rank
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Scoring policy: primary, simple
        #[arg(short, long)]
        policy: Option<String>,

        /// Only show the best N candidates
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Show per-candidate breakdowns
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Job description given either as a file or as inline text
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct JobArgs {
    /// Path to job description file (PDF, TXT, MD)
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Job description text
    #[arg(long)]
    pub job_text: Option<String>,
}

impl JobArgs {
    pub fn source(&self) -> Option<TextSource> {
        match (&self.job, &self.job_text) {
            (Some(path), _) => Some(TextSource::File(path.clone())),
            (None, Some(text)) => Some(TextSource::Inline(text.clone())),
            (None, None) => None,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.batch_policy")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
