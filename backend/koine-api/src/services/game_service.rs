use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use thiserror::Error;

use super::performance_stats::{PerformanceStats, StatsError};
use crate::data::{definite_article_questions, second_declension_words};
use crate::metrics::record_answer_graded;
use crate::models::game::{AnswerCheck, SubmitAnswerResponse};
use crate::models::nominal_forms::{Combination, MissedAnswer, Question};
use crate::views::{DEFINITE_ARTICLES_GAME_ID, FLASH_CARDS_GAME_ID};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Game not found: {0}")]
    UnknownGame(String),
    #[error("Question {question} is not part of game {game_id}")]
    UnknownQuestion { game_id: String, question: String },
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Question sets of every game listed in the route table.
pub struct GameService;

impl GameService {
    pub const GAME_IDS: [&'static str; 2] = [DEFINITE_ARTICLES_GAME_ID, FLASH_CARDS_GAME_ID];

    pub fn questions(game_id: &str) -> Result<Vec<Question>, GameError> {
        match game_id {
            FLASH_CARDS_GAME_ID => Ok(second_declension_words()
                .iter()
                .flat_map(|word| word.questions.iter().cloned())
                .collect()),
            DEFINITE_ARTICLES_GAME_ID => Ok(definite_article_questions().to_vec()),
            other => Err(GameError::UnknownGame(other.to_string())),
        }
    }

    pub fn shuffled_questions(game_id: &str) -> Result<Vec<Question>, GameError> {
        let mut questions = Self::questions(game_id)?;
        questions.shuffle(&mut rand::rng());
        Ok(questions)
    }

    pub fn find_question(game_id: &str, prompt: &str) -> Result<Question, GameError> {
        Self::questions(game_id)?
            .into_iter()
            .find(|question| question.q == prompt)
            .ok_or_else(|| GameError::UnknownQuestion {
                game_id: game_id.to_string(),
                question: prompt.to_string(),
            })
    }

    /// The learner must pick exactly the readings the form can carry: no
    /// missing and no extra combinations. Selection order is irrelevant.
    pub fn check_answer(question: &Question, selections: &[Combination]) -> AnswerCheck {
        let expected = question.a.combinations();
        let expected_set: BTreeSet<&Combination> = expected.iter().collect();
        let selected_set: BTreeSet<&Combination> = selections.iter().collect();
        let correct = expected_set == selected_set;

        let missed = (!correct).then(|| MissedAnswer {
            question: question.q.clone(),
            combos: expected.clone(),
        });

        AnswerCheck {
            correct,
            expected,
            missed,
        }
    }

    /// Grades the answer and records the outcome against the prompt text.
    pub fn submit_answer(
        stats: &mut PerformanceStats,
        game_id: &str,
        prompt: &str,
        selections: &[Combination],
    ) -> Result<SubmitAnswerResponse, GameError> {
        let question = Self::find_question(game_id, prompt)?;
        let check = Self::check_answer(&question, selections);
        record_answer_graded(game_id, check.correct);

        tracing::info!(
            "Graded answer: game={}, question={}, correct={}",
            game_id,
            prompt,
            check.correct
        );

        let stat = stats.record_outcome(game_id, &question.q, check.correct)?;

        Ok(SubmitAnswerResponse {
            correct: check.correct,
            expected: check.expected,
            missed: check.missed,
            stat,
        })
    }
}
