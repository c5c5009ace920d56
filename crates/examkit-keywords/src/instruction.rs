//! Refinement instruction text.

/// Build the filtering instruction sent with every refinement request.
pub fn refinement_instruction(generic_terms: &[String]) -> String {
    format!(
        "Remove generic or filler words such as {}. \
Merge near-duplicates into one term. \
Keep technical terminology of operating systems, databases, networks, algorithms, programming, and software testing.",
        generic_terms
            .iter()
            .map(|t| format!("'{t}'"))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_generic_terms() {
        let text = refinement_instruction(&["의".to_string(), "주요".to_string()]);
        assert!(text.contains("'의', '주요'"));
    }
}
