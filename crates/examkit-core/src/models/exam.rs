use serde::{Deserialize, Serialize};

use super::GradingResult;

/// Score sheet for a whole submitted test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamReport {
    pub results: Vec<GradingResult>,
    pub correct: usize,
    pub total: usize,
    pub points: u32,
    pub passed: bool,
}

impl ExamReport {
    pub fn from_results(results: Vec<GradingResult>, points_per_correct: u32, pass_mark: u32) -> Self {
        let correct = results.iter().filter(|r| r.is_correct()).count();
        let points = points_per_correct.saturating_mul(correct as u32);
        Self {
            total: results.len(),
            correct,
            points,
            passed: points >= pass_mark,
            results,
        }
    }
}
