//! Post-refinement validation: stop-list and traceability.

use std::collections::HashSet;

use examkit_core::text::normalize_term;

/// Normalized set of generic terms that never survive refinement.
#[derive(Debug, Clone, Default)]
pub struct StopList {
    terms: HashSet<String>,
}

impl StopList {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| normalize_term(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&normalize_term(term))
    }
}

// Trailing particles stripped before stem comparison, longest first.
const KOREAN_SUFFIXES: &[&str] = &[
    "에서", "으로", "에게", "와", "과", "은", "는", "이", "가", "을", "를", "의", "에", "로", "도",
];
const ENGLISH_SUFFIXES: &[&str] = &["ing", "es", "ed", "s"];

fn squash(text: &str) -> String {
    normalize_term(text).split_whitespace().collect()
}

/// Strip one trailing particle or inflection. Stems shorter than two
/// characters are not useful for matching and yield `None`.
fn stem(term: &str) -> Option<String> {
    let suffixes = if term.chars().any(|c| c.is_ascii_alphabetic()) {
        ENGLISH_SUFFIXES
    } else {
        KOREAN_SUFFIXES
    };
    let stripped = suffixes
        .iter()
        .find_map(|s| term.strip_suffix(s))
        .unwrap_or(term);
    (stripped.chars().count() >= 2).then(|| stripped.to_string())
}

/// A term is traceable when it, or its stem, occurs in a candidate term
/// or the source text. Comparison ignores case and whitespace.
pub fn is_traceable(term: &str, candidates: &[String], source_text: &str) -> bool {
    let needle = squash(term);
    if needle.is_empty() {
        return false;
    }
    let haystacks: Vec<String> = candidates
        .iter()
        .map(|c| squash(c))
        .chain(std::iter::once(squash(source_text)))
        .collect();

    if haystacks.iter().any(|h| h.contains(&needle)) {
        return true;
    }
    match stem(&needle) {
        Some(stem) => haystacks.iter().any(|h| h.contains(&stem)),
        None => false,
    }
}
