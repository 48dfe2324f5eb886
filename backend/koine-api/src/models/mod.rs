use serde::Serialize;

pub mod game;
pub mod nominal_forms;
pub mod stats;
pub mod view;

use nominal_forms::Question;

#[derive(Debug, Clone, Serialize)]
pub struct WordEntry {
    pub nominative_singular: String,
    pub meaning: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub declension: &'static str,
    pub words: Vec<WordEntry>,
}
