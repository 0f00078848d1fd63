//! Vocabulary — the ordered set of skill labels recognised by both extractors.
//!
//! Built once at startup and shared read-only (`Arc<Vocabulary>`) for the
//! lifetime of the process. Iteration order is the order skills were supplied,
//! and every extraction result follows that order.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// The skills dictionary the service ships with, grouped by area.
#[rustfmt::skip]
pub const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "javascript", "typescript", "python", "java", "c#", "go", "ruby", "php", "swift", "kotlin",
    // Frontend
    "html", "css", "react", "angular", "vue", "redux", "next.js", "gatsby", "webpack", "babel", "jest",
    // Backend
    "node.js", "express.js", "django", "flask", "ruby on rails", "spring boot",
    // Mobile
    "react native", "flutter", "android", "ios",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis",
    // Cloud & DevOps
    "aws", "azure", "google cloud", "docker", "kubernetes", "terraform", "ci/cd", "jenkins", "git",
    "github",
    // Data science & ML
    "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "tableau", "power bi",
    // Design
    "figma", "sketch", "adobe xd", "user research", "wireframing", "prototyping",
    "usability testing",
    // APIs
    "rest apis", "graphql",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("vocabulary is empty")]
    Empty,

    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid skill pattern for '{skill}': {source}")]
    Pattern {
        skill: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug)]
struct Skill {
    label: String,
    /// Matches the label only when it is not flanked by a word character.
    whole_word: Regex,
}

/// Ordered, de-duplicated, lowercase skill labels.
#[derive(Debug)]
pub struct Vocabulary {
    skills: Vec<Skill>,
}

impl Vocabulary {
    /// Builds a vocabulary from raw labels. Labels are trimmed and lowercased;
    /// blanks are dropped and duplicates keep their first position.
    pub fn new<I, S>(labels: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for raw in labels {
            let label = raw.as_ref().trim().to_lowercase();
            if label.is_empty() || !seen.insert(label.clone()) {
                continue;
            }
            let whole_word = whole_word_pattern(&label)?;
            skills.push(Skill { label, whole_word });
        }

        if skills.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(Self { skills })
    }

    /// Parses one skill per line. Blank lines and `#` comments are ignored.
    pub fn parse(text: &str) -> Result<Self, VocabularyError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn builtin() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied()).expect("built-in vocabulary is valid")
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.label == skill)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.label.as_str())
    }

    /// Every label that occurs anywhere in `text` as a substring.
    /// `text` must already be lowercase.
    pub(crate) fn substring_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> {
        self.skills
            .iter()
            .filter(move |s| text.contains(s.label.as_str()))
            .map(|s| s.label.as_str())
    }

    /// Every label that occurs in `text` as a delimited whole word.
    /// `text` must already be lowercase.
    pub(crate) fn whole_word_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> {
        self.skills
            .iter()
            .filter(move |s| s.whole_word.is_match(text))
            .map(|s| s.label.as_str())
    }
}

/// `\b` alone misbehaves on labels that start or end with punctuation
/// ("c#", "node.js"), so the boundary is "start/end of text or a non-word char".
fn whole_word_pattern(label: &str) -> Result<Regex, VocabularyError> {
    let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(label));
    Regex::new(&pattern).map_err(|source| VocabularyError::Pattern {
        skill: label.to_string(),
        source,
    })
}

/// An ordered set of vocabulary members. Always built in vocabulary order and
/// never edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut skills: Vec<String> = Vec::new();
        for skill in iter {
            if !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }
        Self(skills)
    }
}
