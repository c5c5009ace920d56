//! Content-addressed keys for the result cache.
//!
//! Keys are blake3 hashes over length-prefixed parts so that
//! `("ab", "c")` and `("a", "bc")` never collide.

/// Hash an ordered list of parts into a hex cache key.
pub fn content_key(namespace: &str, parts: &[&str]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(namespace.as_bytes());
    hasher.update(&[0]);
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// Hash a single text blob.
pub fn text_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_boundaries_matter() {
        assert_ne!(content_key("g", &["ab", "c"]), content_key("g", &["a", "bc"]));
    }

    #[test]
    fn namespace_separates_keys() {
        assert_ne!(content_key("grade", &["x"]), content_key("extract", &["x"]));
    }

    #[test]
    fn stable_across_calls() {
        assert_eq!(text_hash("교착상태"), text_hash("교착상태"));
        assert_eq!(text_hash("").len(), 64);
    }
}
