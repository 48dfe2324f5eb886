use axum::{response::IntoResponse, Json};

use crate::data::second_declension_words;
use crate::models::VocabularyResponse;

/// GET /api/v1/vocabulary
pub async fn list_vocabulary() -> impl IntoResponse {
    Json(VocabularyResponse {
        declension: "second",
        words: second_declension_words().to_vec(),
    })
}
