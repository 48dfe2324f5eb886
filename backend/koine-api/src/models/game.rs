use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nominal_forms::{Combination, MissedAnswer, Question};
use super::stats::AnswerStat;

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    #[serde(default)]
    pub shuffle: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameQuestionsResponse {
    pub game_id: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, max = 256))]
    pub question: String,
    #[validate(length(max = 30))]
    pub selections: Vec<Combination>,
}

/// Outcome of grading a single prompt, before it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCheck {
    pub correct: bool,
    pub expected: Vec<Combination>,
    pub missed: Option<MissedAnswer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub expected: Vec<Combination>,
    pub missed: Option<MissedAnswer>,
    pub stat: AnswerStat,
}
