//! Prompt templates. Wording is tunable; only the JSON shapes are relied on.

use examkit_core::traits::{RefinementRequest, ScoringRequest};

pub(crate) const SCORING_SYSTEM: &str = "You grade exam answers for IT certification practice. \
Compare the student's answer with the reference answer and judge whether they mean the same thing. \
Ignore spelling, spacing, word order, and language differences (Korean or English) when the meaning matches. \
Reply with JSON only: {\"score\": <integer 0-100>, \"feedback\": \"<one sentence>\"}.";

pub(crate) fn scoring_user(request: &ScoringRequest) -> String {
    let mut prompt = format!("Question:\n{}\n", request.question_text);
    if let Some(options) = &request.options {
        prompt.push_str(&format!("\nOptions:\n{options}\n"));
    }
    prompt.push_str(&format!(
        "\nReference answer:\n{}\n\nStudent answer:\n{}\n",
        request.reference_text, request.candidate_text
    ));
    prompt
}

pub(crate) fn refinement_system(request: &RefinementRequest) -> String {
    format!(
        "You select technical keywords for an exam review tool. {} \
Return at most {} keywords, most important first, copied exactly as they appear in the candidates or the source text. \
Reply with JSON only: {{\"keywords\": [\"...\"]}}.",
        request.instruction, request.max_terms
    )
}

pub(crate) fn refinement_user(request: &RefinementRequest) -> String {
    format!(
        "Candidates: {}\n\nSource text:\n{}\n",
        request.candidate_terms.join(", "),
        request.source_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_prompt_includes_options_when_present() {
        let request = ScoringRequest {
            question_text: "Which layer routes packets?".into(),
            options: Some("1. Physical\n2. Network".into()),
            reference_text: "2".into(),
            candidate_text: "Network".into(),
        };
        let prompt = scoring_user(&request);
        assert!(prompt.contains("Options:\n1. Physical"));
        assert!(prompt.contains("Student answer:\nNetwork"));
    }

    #[test]
    fn refinement_prompt_carries_cap() {
        let request = RefinementRequest {
            candidate_terms: vec!["교착상태".into(), "의".into()],
            source_text: "교착상태의 조건".into(),
            instruction: "Drop filler words.".into(),
            max_terms: 3,
        };
        assert!(refinement_system(&request).contains("at most 3"));
        assert!(refinement_user(&request).contains("교착상태, 의"));
    }
}
