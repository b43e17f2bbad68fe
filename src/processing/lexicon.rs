//! Skill vocabularies recognized by the extractor

use once_cell::sync::Lazy;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Technical,
    Soft,
}

pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming Languages
    "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go", "rust",
    "swift", "kotlin", "scala", "r", "matlab", "sql", "nosql", "html", "css", "sass", "less",

    // Frameworks & Libraries
    "react", "angular", "vue.js", "node.js", "express.js", "django", "flask", "spring", "laravel",
    "react native", "flutter", "xamarin", "jquery", "bootstrap", "tailwind css",

    // Databases
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra", "oracle", "sqlite",
    "dynamodb", "firebase", "mariadb",

    // Cloud & DevOps
    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins", "git", "github",
    "gitlab", "bitbucket", "ci/cd", "terraform", "ansible", "vagrant", "linux", "ubuntu",

    // Data Science & ML
    "machine learning", "deep learning", "artificial intelligence", "data science", "pandas",
    "numpy", "scipy", "scikit-learn", "tensorflow", "pytorch", "keras", "opencv", "nltk",
    "spacy", "matplotlib", "seaborn", "tableau", "power bi",

    // Mobile Development
    "ios", "android", "cordova", "phonegap",

    // Testing
    "selenium", "junit", "pytest", "jest", "cypress", "postman", "swagger",

    // Others
    "rest api", "graphql", "microservices", "agile", "scrum", "kanban", "jira", "confluence",
    "blockchain", "solidity", "web3", "ethereum",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "teamwork", "communication", "problem solving", "analytical", "creative",
    "adaptable", "flexible", "organized", "detail oriented", "time management", "multitasking",
    "project management", "team player", "collaborative", "innovative", "strategic thinking",
    "customer service", "presentation", "negotiation", "mentoring", "coaching",
];

static TECHNICAL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TECHNICAL_SKILLS.iter().copied().collect());

static SOFT_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SOFT_SKILLS.iter().copied().collect());

/// Exact lookup of an already-lowercased phrase.
pub fn categorize(phrase: &str) -> Option<SkillCategory> {
    if TECHNICAL_SET.contains(phrase) {
        Some(SkillCategory::Technical)
    } else if SOFT_SET.contains(phrase) {
        Some(SkillCategory::Soft)
    } else {
        None
    }
}

/// Every lexicon entry paired with its category.
pub fn entries() -> impl Iterator<Item = (&'static str, SkillCategory)> {
    TECHNICAL_SKILLS
        .iter()
        .map(|s| (*s, SkillCategory::Technical))
        .chain(SOFT_SKILLS.iter().map(|s| (*s, SkillCategory::Soft)))
}
