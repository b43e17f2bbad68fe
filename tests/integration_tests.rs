//! Integration tests for the resume matcher

use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::input::{InputManager, TextSource};
use resume_matcher::output::{LeaderboardSummary, MatchSummary, ReportGenerator};
use resume_matcher::processing::leaderboard::Leaderboard;
use resume_matcher::processing::{extract_features, score_match, FeatureExtractor, ScoringPolicy};
use resume_matcher::{JobSession, ResumeMatcherError};
use std::path::Path;

fn extractor() -> FeatureExtractor {
    FeatureExtractor::new(2024, None)
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    let text2 = manager.extract_text(path).await.unwrap();

    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;

    assert!(matches!(result, Err(ResumeMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_inline_text_source() {
    let mut manager = InputManager::new();

    let text = manager
        .load(&TextSource::Inline("Python developer wanted".to_string()))
        .await
        .unwrap();
    assert_eq!(text, "Python developer wanted");

    let blank = manager.load(&TextSource::Inline("   ".to_string())).await;
    assert!(matches!(blank, Err(ResumeMatcherError::InvalidInput(_))));
}

#[test]
fn test_job_and_resume_example() {
    let jd = extract_features("Looking for a Python developer with 5 years of experience in Django and AWS");
    let resume = extract_features("Experienced Python developer, 3 years using Django, deployed on AWS and GCP");

    assert_eq!(jd.experience_years, 5);
    assert_eq!(resume.experience_years, 3);
    for skill in ["python", "django", "aws"] {
        assert!(jd.skills.all.contains(skill));
    }
    assert!(resume.skills.all.contains("gcp"));

    let report = score_match(&jd, &resume, ScoringPolicy::Primary);
    let matching: Vec<&str> = report.matching_skills.iter().map(String::as_str).collect();
    assert_eq!(matching, vec!["aws", "django", "python"]);
    assert!(report.missing_skills.is_empty());
    assert_eq!(report.skill_score, 1.0);
    assert_eq!(report.experience_score, 0.6);
    assert_eq!(report.experience_gap, 2);
    assert!(report.total_score >= 78.0 && report.total_score <= 80.0);
}

#[tokio::test]
async fn test_fixture_features() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let record = extractor().extract_features(&text);

    assert_eq!(record.experience_years, 6);
    for skill in ["react", "node.js", "typescript", "kubernetes", "ci/cd"] {
        assert!(record.skills.technical.contains(skill), "missing {}", skill);
    }
    assert!(!record.skills.technical.contains("java"));
    assert!(record.skills.soft.contains("leadership"));
    assert_eq!(record.contact.email.as_deref(), Some("john.doe@example.com"));
    assert_eq!(record.contact.phone.as_deref(), Some("5551234567"));
    assert_eq!(record.contact.github.as_deref(), Some("github.com/johndoe"));
    assert!(record.education.institutions.iter().any(|i| i == "stanford university"));
    assert!(!record.certifications.is_empty());
    assert!(record.quality_score >= 90);
    assert!(record.quality_score <= 100);
}

#[tokio::test]
async fn test_session_and_leaderboard_over_fixtures() {
    let mut manager = InputManager::new();
    let ex = extractor();

    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();
    let senior = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let junior = manager
        .extract_text(Path::new("tests/fixtures/sample_resume_junior.txt"))
        .await
        .unwrap();

    let jd = ex.extract_features(&job_text);
    assert_eq!(jd.experience_years, 5);

    let senior = ex.extract_features(&senior);
    let junior = ex.extract_features(&junior);

    let session = JobSession::new();
    assert!(session.match_resume(&senior, ScoringPolicy::Simple).is_err());
    session.replace_job(jd.clone());
    let single = session.match_resume(&senior, ScoringPolicy::Simple).unwrap();
    assert_eq!(single.experience_score, 1.0);

    let board = Leaderboard::rank(
        &jd,
        vec![("junior.txt".to_string(), &junior), ("senior.txt".to_string(), &senior)],
        ScoringPolicy::Primary,
    );

    assert_eq!(board.len(), 2);
    assert_eq!(board.entries[0].candidate, "senior.txt");
    assert_eq!(board.entries[0].rank, 1);
    assert!(board.entries[0].report.total_score > board.entries[1].report.total_score);

    let summary = LeaderboardSummary {
        job: "sample_job.txt".to_string(),
        leaderboard: board,
        top: Some(1),
    };
    let json = ReportGenerator::new().leaderboard(&summary, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["leaderboard"]["entries"][0]["candidate"], "senior.txt");

    let match_summary = MatchSummary {
        job: "sample_job.txt".to_string(),
        resume: "senior.txt".to_string(),
        report: single,
    };
    let markdown = ReportGenerator::new()
        .match_report(&match_summary, OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("senior.txt"));
}

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let created = Config::load(Some(&path)).unwrap();
    assert!(path.exists());
    assert_eq!(created, Config::default());

    let mut config = created;
    config.set("scoring.single_policy", "primary").unwrap();
    config.set("extraction.current_year", "2030").unwrap();
    config.save_to(&path).unwrap();

    let reloaded = Config::load(Some(&path)).unwrap();
    assert_eq!(reloaded.scoring.single_policy, ScoringPolicy::Primary);
    assert_eq!(reloaded.extraction.resolved_current_year(), 2030);
    assert_eq!(FeatureExtractor::from_config(&reloaded.extraction).current_year(), 2030);
}
