//! resume-matcher: feature extraction and match scoring for resumes and job descriptions

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::input::{InputManager, TextSource};
use resume_matcher::output::formatter::save_report_to_file;
use resume_matcher::output::{FeaturePreview, LeaderboardSummary, MatchSummary, ReportGenerator};
use resume_matcher::processing::leaderboard::Leaderboard;
use resume_matcher::processing::{FeatureExtractor, FeatureRecord, ScoringPolicy};
use resume_matcher::session::JobSession;
use resume_matcher::{Result, ResumeMatcherError};
use std::path::Path;
use std::process;

const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load(Some(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Extract { file, output, detailed } => {
            validate_input(&file, "Document")?;
            let format = resolve_format(output.as_deref(), &config)?;
            config.output.detailed |= detailed;

            let extractor = FeatureExtractor::from_config(&config.extraction);
            let mut input_manager = InputManager::new();
            let source = TextSource::File(file);
            let text = input_manager.load(&source).await?;

            let features = extractor.extract_features(&text);
            info!(
                "Extracted {} skills, {} years of experience from {}",
                features.skills.len(),
                features.experience_years,
                source.label()
            );

            let preview = FeaturePreview::new(source.label(), &text, features, config.output.preview_chars);
            let generator = ReportGenerator::from_config(&config.output);
            emit(&generator.preview(&preview, format)?, None)?;
        }

        Commands::Match { job, resume, policy, output, save } => {
            validate_input(&resume, "Resume")?;
            let format = resolve_format(output.as_deref(), &config)?;
            let policy = resolve_policy(policy.as_deref(), config.scoring.single_policy)?;
            let job_source = job_source(job.source())?;

            let extractor = FeatureExtractor::from_config(&config.extraction);
            let mut input_manager = InputManager::new();

            let session = JobSession::new();
            let job_text = input_manager.load(&job_source).await?;
            session.replace_job(extractor.extract_features(&job_text));

            let resume_source = TextSource::File(resume);
            let resume_text = input_manager.load(&resume_source).await?;
            let resume_features = extractor.extract_features(&resume_text);

            info!("Scoring {} with the {} policy", resume_source.label(), policy);
            let summary = MatchSummary {
                job: job_source.label(),
                resume: resume_source.label(),
                report: session.match_resume(&resume_features, policy)?,
            };

            let generator = ReportGenerator::from_config(&config.output);
            emit(&generator.match_report(&summary, format)?, save.as_deref())?;
        }

        Commands::Rank { job, resumes, policy, top, output, detailed, save } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let policy = resolve_policy(policy.as_deref(), config.scoring.batch_policy)?;
            let job_source = job_source(job.source())?;
            config.output.detailed |= detailed;

            let extractor = FeatureExtractor::from_config(&config.extraction);
            let mut input_manager = InputManager::new();

            let job_text = input_manager.load(&job_source).await?;
            let jd = extractor.extract_features(&job_text);

            let pb = ProgressBar::new(resumes.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Scoring [{bar:30}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let mut candidates: Vec<(String, FeatureRecord)> = Vec::with_capacity(resumes.len());
            for path in resumes {
                let source = TextSource::File(path.clone());
                pb.set_message(source.label());

                let loaded = match validate_input(&path, "Resume") {
                    Ok(()) => input_manager.load(&source).await,
                    Err(e) => Err(e),
                };
                match loaded {
                    Ok(text) => candidates.push((source.label(), extractor.extract_features(&text))),
                    Err(e) => warn!("Skipping {}: {}", source.label(), e),
                }
                pb.inc(1);
            }
            pb.finish_and_clear();

            if candidates.is_empty() {
                return Err(ResumeMatcherError::InvalidInput("No readable resumes to rank".to_string()));
            }

            let leaderboard = Leaderboard::rank(
                &jd,
                candidates.iter().map(|(name, record)| (name.clone(), record)),
                policy,
            );
            info!("Ranked {} candidates with the {} policy", leaderboard.len(), policy);

            let summary = LeaderboardSummary {
                job: job_source.label(),
                leaderboard,
                top,
            };
            let generator = ReportGenerator::from_config(&config.output);
            emit(&generator.leaderboard(&summary, format)?, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeMatcherError::Configuration(e.to_string()))?;
                println!("{}", content);
                println!(
                    "Current year for date ranges: {}",
                    config.extraction.resolved_current_year()
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set(&key, &value)?;
                config.save_to(config_path)?;
                println!("🔧 {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn resolve_policy(policy: Option<&str>, fallback: ScoringPolicy) -> Result<ScoringPolicy> {
    match policy {
        Some(policy) => policy.parse().map_err(ResumeMatcherError::InvalidInput),
        None => Ok(fallback),
    }
}

fn job_source(source: Option<TextSource>) -> Result<TextSource> {
    let source = source.ok_or_else(|| {
        ResumeMatcherError::InvalidInput("Provide a job description with --job or --job-text".to_string())
    })?;
    if let TextSource::File(path) = &source {
        validate_input(path, "Job description")?;
    }
    Ok(source)
}

fn validate_input(path: &Path, what: &str) -> Result<()> {
    cli::validate_file_extension(path, SUPPORTED_EXTENSIONS)
        .map_err(|e| ResumeMatcherError::InvalidInput(format!("{} file: {}", what, e)))
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
