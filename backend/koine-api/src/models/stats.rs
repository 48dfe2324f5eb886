use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStat {
    pub seen: u64,
    pub correct: u64,
}

/// Flat mapping from `"<game_id>|<question>"` to counters.
pub type AnswerStats = BTreeMap<String, AnswerStat>;

#[derive(Debug, Deserialize, Validate)]
pub struct RecordOutcomeRequest {
    #[validate(length(min = 1, max = 128))]
    pub game_id: String,
    #[validate(length(min = 1, max = 256))]
    pub question: String,
    pub was_correct: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordOutcomeResponse {
    pub key: String,
    pub stat: AnswerStat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameStatsResponse {
    pub game_id: String,
    /// Keyed by question text.
    pub stats: BTreeMap<String, AnswerStat>,
}
