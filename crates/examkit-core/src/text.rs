//! Text normalization shared by grading, extraction, and recommendation.

/// Lowercase, strip punctuation, collapse whitespace.
///
/// Letters and digits of every script are kept, so Hangul survives intact.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect();
    collapse_whitespace(&stripped)
}

/// Normalize a keyword: case-fold, trim, collapse inner whitespace.
///
/// Unlike [`normalize`], punctuation is kept (`tcp/ip`, `c++`).
pub fn normalize_term(term: &str) -> String {
    collapse_whitespace(&term.to_lowercase())
}

/// Split normalized text into tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Join runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Split an enumeration answer on ASCII or full-width commas.
pub fn split_enumeration(text: &str) -> Vec<String> {
    text.split([',', '，'])
        .map(normalize)
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("  Deadlock!  is   BAD. "), "deadlock is bad");
    }

    #[test]
    fn normalize_keeps_hangul() {
        assert_eq!(normalize("교착상태(Deadlock)란?"), "교착상태deadlock란");
    }

    #[test]
    fn normalize_term_keeps_symbols() {
        assert_eq!(normalize_term("  TCP/IP   Stack "), "tcp/ip stack");
    }

    #[test]
    fn tokenize_splits_on_whitespace() {
        assert_eq!(tokenize("Mutual exclusion, hold-and-wait"), vec!["mutual", "exclusion", "holdandwait"]);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("교착상태", 2), "교착");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn enumeration_handles_fullwidth_comma() {
        assert_eq!(split_enumeration("상호배제，점유대기, 비선점"), vec!["상호배제", "점유대기", "비선점"]);
    }
}
