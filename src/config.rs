//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use crate::processing::scorer::ScoringPolicy;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Year that "present"/"current" resolve to; the local calendar year when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_year: Option<i32>,
    pub enable_enrichment: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Policy for ranking several resumes
    pub batch_policy: ScoringPolicy,
    /// Policy for scoring a single resume
    pub single_policy: ScoringPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            current_year: None,
            enable_enrichment: true,
        }
    }
}

impl ExtractionConfig {
    pub fn resolved_current_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            batch_policy: ScoringPolicy::Primary,
            single_policy: ScoringPolicy::Simple,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            preview_chars: 2000,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file is created with defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    /// Update a single value addressed by a dotted key, e.g. `scoring.batch_policy`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |e: String| ResumeMatcherError::Configuration(format!("{}: {}", key, e));

        match key {
            "extraction.current_year" => {
                self.extraction.current_year = match value {
                    "" | "auto" => None,
                    year => Some(year.parse::<i32>().map_err(|e| invalid(e.to_string()))?),
                };
            }
            "extraction.enable_enrichment" => {
                self.extraction.enable_enrichment = parse_bool(value).map_err(invalid)?;
            }
            "scoring.batch_policy" => {
                self.scoring.batch_policy = value.parse().map_err(invalid)?;
            }
            "scoring.single_policy" => {
                self.scoring.single_policy = value.parse().map_err(invalid)?;
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value).map_err(invalid)?;
            }
            "output.detailed" => {
                self.output.detailed = parse_bool(value).map_err(invalid)?;
            }
            "output.color_output" => {
                self.output.color_output = parse_bool(value).map_err(invalid)?;
            }
            "output.preview_chars" => {
                self.output.preview_chars = value.parse::<usize>().map_err(|e| invalid(e.to_string()))?;
            }
            _ => {
                return Err(ResumeMatcherError::Configuration(format!("Unknown configuration key: {}", key)));
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("expected a boolean, got '{}'", value)),
    }
}
