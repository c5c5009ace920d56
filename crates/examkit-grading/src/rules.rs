//! Deterministic grading rules evaluated before any external call.

use std::sync::LazyLock;

use examkit_core::models::Question;
use examkit_core::text::{normalize, split_enumeration};
use regex::Regex;

static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*[.)]\s*(.+?)\s*$").unwrap());
static UPPERCASE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{2,}").unwrap());

const ACRONYM_MARKERS: &[&str] = &["영문 약어", "영문약어"];

/// Which rule decided the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    ExactMatch,
    OptionMatch,
    EnumerationMatch,
    /// The question asks for an abbreviation and the answer has none.
    MissingAcronym,
}

impl RuleMatch {
    pub fn is_correct(&self) -> bool {
        !matches!(self, Self::MissingAcronym)
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            Self::ExactMatch => "exact match with the reference answer",
            Self::OptionMatch => "selected the correct option",
            Self::EnumerationMatch => "all listed items match in order",
            Self::MissingAcronym => "an English abbreviation was required",
        }
    }
}

/// Numbered options `(number, text)` parsed from the question example.
pub fn parse_options(example: &str) -> Vec<(u32, String)> {
    example
        .lines()
        .filter_map(|line| {
            let caps = OPTION_LINE.captures(line)?;
            let number = caps.get(1)?.as_str().parse().ok()?;
            Some((number, caps.get(2)?.as_str().to_string()))
        })
        .collect()
}

fn option_number(answer: &str) -> Option<u32> {
    answer.trim().trim_end_matches('번').trim().parse().ok()
}

fn matches_option(question: &Question, answer: &str) -> bool {
    let Some(example) = &question.example else {
        return false;
    };
    let options = parse_options(example);
    if options.is_empty() {
        return false;
    }

    let canonical = question.answer.trim();
    let correct = match option_number(canonical) {
        Some(n) => options.iter().find(|(num, _)| *num == n),
        None => options
            .iter()
            .find(|(_, text)| normalize(text) == normalize(canonical)),
    };
    let Some((number, text)) = correct else {
        return false;
    };

    option_number(answer) == Some(*number) || normalize(answer) == normalize(text)
}

fn requires_acronym(question: &Question) -> bool {
    ACRONYM_MARKERS.iter().any(|m| question.text.contains(m))
        && UPPERCASE_RUN.is_match(&question.answer)
}

fn matches_enumeration(question: &Question, answer: &str) -> bool {
    if !question.answer.contains([',', '，']) {
        return false;
    }
    let expected = split_enumeration(&question.answer);
    let given = split_enumeration(answer);
    !expected.is_empty() && expected == given
}

/// Run the rules in order. `None` means no rule decided the answer.
pub fn check_rules(question: &Question, answer: &str) -> Option<RuleMatch> {
    if answer.trim() == question.answer.trim() {
        return Some(RuleMatch::ExactMatch);
    }
    if matches_option(question, answer) {
        return Some(RuleMatch::OptionMatch);
    }
    if requires_acronym(question) && !UPPERCASE_RUN.is_match(answer) {
        return Some(RuleMatch::MissingAcronym);
    }
    if matches_enumeration(question, answer) {
        return Some(RuleMatch::EnumerationMatch);
    }
    None
}
