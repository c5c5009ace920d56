//! Scored candidates, tie-breaks, and diversity-capped selection.

use std::cmp::Ordering;

use examkit_core::models::{Category, Question, Recommendation};

/// A bank question with its overlap score.
#[derive(Debug, Clone)]
pub struct ScoredQuestion {
    pub question: Question,
    pub score: f64,
    /// Distance from the target difficulty, used only for tie-breaks.
    pub difficulty_distance: f64,
}

/// Score descending, then closer difficulty, then identifier ascending.
pub fn compare(a: &ScoredQuestion, b: &ScoredQuestion) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.difficulty_distance.total_cmp(&b.difficulty_distance))
        .then_with(|| a.question.id.cmp(&b.question.id))
}

/// Sort and take up to `limit` entries scoring above `min_score`.
///
/// With `category_cap = Some((category, cap))`, at most `cap` entries of
/// that category are taken; skipped entries do not reserve slots.
pub fn select(
    mut scored: Vec<ScoredQuestion>,
    limit: usize,
    min_score: f64,
    category_cap: Option<(Category, usize)>,
) -> Vec<Recommendation> {
    scored.retain(|s| s.score > min_score);
    scored.sort_by(compare);

    let mut taken_in_category = 0;
    let mut out: Vec<Recommendation> = Vec::with_capacity(limit);
    for candidate in scored {
        if out.len() == limit {
            break;
        }
        if out.iter().any(|r| r.question_id == candidate.question.id) {
            continue;
        }
        if let Some((category, cap)) = category_cap {
            if candidate.question.category() == category {
                if taken_in_category == cap {
                    continue;
                }
                taken_in_category += 1;
            }
        }
        out.push(Recommendation {
            question_id: candidate.question.id,
            score: candidate.score,
        });
    }
    out
}

/// `ceil(limit / 2)`.
pub fn diversity_cap(limit: usize) -> usize {
    limit.div_ceil(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use examkit_core::models::QuestionId;

    fn scored(category: Category, seq: u32, score: f64, distance: f64) -> ScoredQuestion {
        ScoredQuestion {
            question: Question::new(QuestionId::new(category, seq), "q", "a"),
            score,
            difficulty_distance: distance,
        }
    }

    #[test]
    fn ties_break_on_difficulty_then_id() {
        let picked = select(
            vec![
                scored(Category::Os, 10, 0.5, 1.0),
                scored(Category::Os, 2, 0.5, 1.0),
                scored(Category::Db, 1, 0.5, 0.0),
            ],
            3,
            0.0,
            None,
        );
        let ids: Vec<String> = picked.iter().map(|r| r.question_id.to_string()).collect();
        assert_eq!(ids, ["db-1", "os-2", "os-10"]);
    }

    #[test]
    fn zero_scores_are_never_padded_in() {
        let picked = select(vec![scored(Category::Os, 1, 0.0, 0.0)], 5, 0.0, None);
        assert!(picked.is_empty());
    }

    #[test]
    fn category_cap_skips_without_reserving() {
        let picked = select(
            vec![
                scored(Category::Os, 1, 0.9, 0.0),
                scored(Category::Os, 2, 0.8, 0.0),
                scored(Category::Os, 3, 0.7, 0.0),
                scored(Category::Db, 1, 0.1, 0.0),
            ],
            4,
            0.0,
            Some((Category::Os, 2)),
        );
        let ids: Vec<String> = picked.iter().map(|r| r.question_id.to_string()).collect();
        assert_eq!(ids, ["os-1", "os-2", "db-1"]);
    }

    #[test]
    fn cap_rounds_up() {
        assert_eq!(diversity_cap(4), 2);
        assert_eq!(diversity_cap(5), 3);
        assert_eq!(diversity_cap(1), 1);
    }
}
