//! Local frequency-based extractor.
//!
//! Hangul runs longer than one syllable and Latin words longer than two
//! letters, minus stopwords, ranked by frequency. Never fails; used when
//! the remote extractor is down or not configured.

use std::collections::HashMap;
use std::sync::LazyLock;

use examkit_core::errors::CapabilityError;
use examkit_core::models::{KeywordCandidate, KeywordCandidateSet};
use examkit_core::traits::IKeywordExtractor;
use regex::Regex;

use super::stopwords::{is_english_stopword, is_korean_stopword};

static HANGUL_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[가-힣]+").unwrap());
static LATIN_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9]*").unwrap());

/// Default number of candidates returned.
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone)]
pub struct LocalKeywordExtractor {
    top_n: usize,
}

impl Default for LocalKeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl LocalKeywordExtractor {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n: top_n.max(1),
        }
    }

    /// Synchronous extraction. Confidence is frequency over the top frequency.
    pub fn extract(&self, text: &str) -> KeywordCandidateSet {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        let hangul = HANGUL_WORD
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .filter(|w| w.chars().count() > 1 && !is_korean_stopword(w));
        let latin = LATIN_WORD
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .filter(|w| w.len() > 2 && !is_english_stopword(w));

        for word in hangul.chain(latin) {
            let count = counts.entry(word.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push(word);
            }
            *count += 1;
        }

        // Stable sort keeps first-appearance order among equal counts.
        first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
        let top = first_seen.first().map(|w| counts[w]).unwrap_or(1) as f64;

        first_seen
            .into_iter()
            .take(self.top_n)
            .map(|w| {
                let confidence = counts[&w] as f64 / top;
                KeywordCandidate::new(w, confidence)
            })
            .collect()
    }
}

impl IKeywordExtractor for LocalKeywordExtractor {
    async fn extract_candidates(&self, text: &str) -> Result<KeywordCandidateSet, CapabilityError> {
        Ok(self.extract(text))
    }

    fn name(&self) -> &str {
        "local-frequency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency() {
        let extractor = LocalKeywordExtractor::default();
        let set = extractor.extract("교착상태 상호배제 교착상태 순환대기 교착상태 회피");
        let terms: Vec<&str> = set.terms().collect();
        assert_eq!(terms[0], "교착상태");
        assert_eq!(set.iter().next().map(|c| c.confidence), Some(1.0));
    }

    #[test]
    fn drops_stopwords_and_short_words() {
        let extractor = LocalKeywordExtractor::default();
        let set = extractor.extract("그리고 the OS is a TCP and UDP 수 것");
        let terms: Vec<&str> = set.terms().collect();
        assert_eq!(terms, vec!["tcp", "udp"]);
    }

    #[test]
    fn caps_at_top_n() {
        let extractor = LocalKeywordExtractor::new(2);
        let set = extractor.extract("alpha beta gamma delta epsilon");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(LocalKeywordExtractor::default().extract("").is_empty());
    }
}
