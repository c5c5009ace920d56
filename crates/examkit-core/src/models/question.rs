use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::errors::ValidationError;
use crate::text::normalize_term;

/// Subject area of a bank question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Os,
    Db,
    Network,
    Algorithm,
    Program,
    AppTest,
    AppDefect,
    BaseSql,
    HardSql,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Self::Os,
        Self::Db,
        Self::Network,
        Self::Algorithm,
        Self::Program,
        Self::AppTest,
        Self::AppDefect,
        Self::BaseSql,
        Self::HardSql,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Db => "db",
            Self::Network => "network",
            Self::Algorithm => "algorithm",
            Self::Program => "program",
            Self::AppTest => "app_test",
            Self::AppDefect => "app_defect",
            Self::BaseSql => "base_sql",
            Self::HardSql => "hard_sql",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Question identifier: category plus sequence number, written `os-12`.
///
/// Ordering is by category name, then numerically by sequence, so
/// `os-2` sorts before `os-10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId {
    category: Category,
    seq: u32,
}

impl QuestionId {
    pub fn new(category: Category, seq: u32) -> Self {
        Self { category, seq }
    }

    /// Parse `"<category>-<seq>"`. The category may itself contain underscores.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidQuestionId {
            id: s.to_string(),
            reason: reason.to_string(),
        };
        let (category, seq) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| invalid("expected <category>-<seq>"))?;
        let category = category
            .parse::<Category>()
            .map_err(|_| invalid("unknown category"))?;
        let seq = seq
            .parse::<u32>()
            .map_err(|_| invalid("sequence is not a number"))?;
        Ok(Self { category, seq })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.seq)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.to_string()
    }
}

impl Ord for QuestionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .as_str()
            .cmp(other.category.as_str())
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for QuestionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Question difficulty, 1 (easiest) through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidDifficulty { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Distance to a (possibly fractional) target difficulty.
    pub fn distance_to(&self, target: f64) -> f64 {
        (f64::from(self.0) - target).abs()
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

/// A bank question. Immutable except through explicit admin edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    /// Canonical reference answer.
    pub answer: String,
    /// Numbered options or a worked example, when the question has one.
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Ordered, normalized, deduplicated.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Question {
    pub fn new(id: QuestionId, text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            answer: answer.into(),
            example: None,
            difficulty: Difficulty::default(),
            keywords: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replace the keyword set, normalizing and deduplicating in order.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_keywords(keywords);
        self
    }

    pub fn set_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for kw in keywords {
            let term = normalize_term(kw.as_ref());
            if !term.is_empty() && !out.contains(&term) {
                out.push(term);
            }
        }
        self.keywords = out;
    }

    pub fn category(&self) -> Category {
        self.id.category()
    }
}
