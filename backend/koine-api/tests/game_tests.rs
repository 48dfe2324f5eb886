mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_definite_article_questions() {
    let app = common::create_test_app();

    let (status, json) = common::get_json(&app, "/api/v1/games/definite-articles-1/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["game_id"], "definite-articles-1");
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 17);
    assert_eq!(questions[0]["q"], "ὁ");
    assert_eq!(questions[0]["a"]["genders"], json!(["masculine"]));
    assert_eq!(questions[0]["a"]["number"], "singular");
    assert_eq!(questions[0]["a"]["cases"], json!(["nominative"]));
}

#[tokio::test]
async fn test_shuffled_questions_keep_size() {
    let app = common::create_test_app();

    let (status, json) = common::get_json(
        &app,
        "/api/v1/games/second-declension-flash-cards/questions?shuffle=true",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["questions"].as_array().unwrap().len(), 117);
}

#[tokio::test]
async fn test_unknown_game_is_not_found() {
    let app = common::create_test_app();

    let (status, _) = common::get_json(&app, "/api/v1/games/third-declension/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_correct_then_incorrect_answer() {
    let app = common::create_test_app();
    let uri = "/api/v1/games/second-declension-flash-cards/answers";

    let (status, json) = common::post_json(
        &app,
        uri,
        json!({
            "question": "ἄνθρωποι",
            "selections": [
                {"gender": "masculine", "number": "plural", "case": "vocative"},
                {"gender": "masculine", "number": "plural", "case": "nominative"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["correct"], true);
    assert!(json["missed"].is_null());
    assert_eq!(json["stat"], json!({"seen": 1, "correct": 1}));

    // Nominative alone misses the vocative reading
    let (status, json) = common::post_json(
        &app,
        uri,
        json!({
            "question": "ἄνθρωποι",
            "selections": [
                {"gender": "masculine", "number": "plural", "case": "nominative"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["correct"], false);
    assert_eq!(json["missed"]["question"], "ἄνθρωποι");
    assert_eq!(json["missed"]["combos"].as_array().unwrap().len(), 2);
    assert_eq!(json["stat"], json!({"seen": 2, "correct": 1}));

    let (status, json) = common::get_json(
        &app,
        "/api/v1/games/second-declension-flash-cards/stats",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stats"]["ἄνθρωποι"], json!({"seen": 2, "correct": 1}));
}

#[tokio::test]
async fn test_submit_question_from_other_game() {
    let app = common::create_test_app();

    let (status, _) = common::post_json(
        &app,
        "/api/v1/games/definite-articles-1/answers",
        json!({ "question": "λόγος", "selections": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = common::get_json(&app, "/api/v1/stats").await;
    assert_eq!(json, json!({}));
}

#[tokio::test]
async fn test_submit_rejects_malformed_selection() {
    let app = common::create_test_app();

    let (status, json) = common::post_json(
        &app,
        "/api/v1/games/definite-articles-1/answers",
        json!({
            "question": "τοῦ",
            "selections": [{"gender": "common", "number": "singular", "case": "genitive"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_submit_rejects_empty_question() {
    let app = common::create_test_app();

    let (status, json) = common::post_json(
        &app,
        "/api/v1/games/definite-articles-1/answers",
        json!({ "question": "", "selections": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Validation error"));
}
