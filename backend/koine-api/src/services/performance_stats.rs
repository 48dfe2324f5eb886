use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, error, warn};

use super::storage::{StorageError, StorageProvider};
use crate::metrics::{record_stats_fallback, OUTCOMES_RECORDED_TOTAL, STATS_WRITE_FAILURES_TOTAL};
use crate::models::stats::{AnswerStat, AnswerStats};

/// Bump the version suffix to start over with an empty mapping; old keys are
/// left untouched.
pub const STATS_STORAGE_KEY: &str = "koine:question-stats:v1";

const KEY_SEPARATOR: char = '|';

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to encode answer stats: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to persist answer stats: {0}")]
    Storage(#[from] StorageError),
}

pub fn build_stat_key(game_id: &str, question: &str) -> String {
    format!("{}{}{}", game_id, KEY_SEPARATOR, question)
}

/// Per-question seen/correct tallies kept in an injected key-value store.
///
/// Without a storage provider the tracker still answers every call: loads are
/// empty and writes are dropped.
pub struct PerformanceStats {
    storage: Option<Box<dyn StorageProvider>>,
    storage_key: String,
}

impl PerformanceStats {
    pub fn new(storage: Box<dyn StorageProvider>) -> Self {
        Self::with_key(Some(storage), STATS_STORAGE_KEY)
    }

    pub fn detached() -> Self {
        Self::with_key(None, STATS_STORAGE_KEY)
    }

    pub fn with_key(storage: Option<Box<dyn StorageProvider>>, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_kind(&self) -> &'static str {
        self.storage.as_ref().map(|s| s.kind()).unwrap_or("none")
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Never fails: an absent provider, a missing value or a value that does not
    /// parse all yield an empty mapping.
    pub fn load_answer_stats(&self) -> AnswerStats {
        let Some(storage) = self.storage.as_ref() else {
            return AnswerStats::new();
        };

        let raw = match storage.get_item(&self.storage_key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return AnswerStats::new(),
            Err(e) => {
                warn!("Answer stats unavailable, starting empty: {}", e);
                record_stats_fallback("storage");
                return AnswerStats::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(stats) => stats,
            Err(e) => {
                warn!(
                    "Discarding unreadable answer stats under {}: {}",
                    self.storage_key, e
                );
                record_stats_fallback("parse");
                AnswerStats::new()
            }
        }
    }

    /// Counts one more sighting of `question` in `game_id` and, when
    /// `was_correct`, one more correct answer. Returns the updated counters.
    pub fn record_outcome(
        &mut self,
        game_id: &str,
        question: &str,
        was_correct: bool,
    ) -> Result<AnswerStat, StatsError> {
        let mut stats = self.load_answer_stats();
        let key = build_stat_key(game_id, question);

        let entry = stats.entry(key).or_default();
        entry.seen = entry.seen.saturating_add(1);
        if was_correct {
            entry.correct = entry.correct.saturating_add(1);
        }
        let updated = *entry;

        self.save_answer_stats(&stats)?;
        OUTCOMES_RECORDED_TOTAL.with_label_values(&[game_id]).inc();

        debug!(
            "Recorded outcome: game={}, question={}, correct={}, seen={}",
            game_id, question, updated.correct, updated.seen
        );

        Ok(updated)
    }

    /// Stats of one game keyed by question text.
    pub fn stats_for_game(&self, game_id: &str) -> BTreeMap<String, AnswerStat> {
        let prefix = build_stat_key(game_id, "");
        self.load_answer_stats()
            .into_iter()
            .filter_map(|(key, stat)| {
                key.strip_prefix(&prefix)
                    .map(|question| (question.to_string(), stat))
            })
            .collect()
    }

    pub fn stat_for(&self, game_id: &str, question: &str) -> AnswerStat {
        self.load_answer_stats()
            .get(&build_stat_key(game_id, question))
            .copied()
            .unwrap_or_default()
    }

    fn save_answer_stats(&mut self, stats: &AnswerStats) -> Result<(), StatsError> {
        let Some(storage) = self.storage.as_mut() else {
            return Ok(());
        };

        let encoded = serde_json::to_string(stats)?;
        storage.set_item(&self.storage_key, &encoded).map_err(|e| {
            error!("Failed to persist answer stats: {}", e);
            STATS_WRITE_FAILURES_TOTAL.inc();
            StatsError::from(e)
        })
    }
}
