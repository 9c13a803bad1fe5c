//! Quiz endpoint - picks the next unasked question

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{loose_int, JsonBody};
use crate::http::server::AppState;
use crate::models::Question;

/// Next quiz question request
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already asked in this quiz
    pub previous_questions: Vec<i32>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category filter; id 0 (or null) means any category
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "loose_int::deserialize")]
    pub id: Option<i32>,
}

impl QuizRequest {
    fn category_filter(&self) -> Option<i32> {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id)
            .filter(|&id| id != 0)
    }
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// Null once every candidate has been asked
    pub question: Option<Question>,
}

/// POST /quizzes - a random question not yet asked
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let candidates = state
        .store
        .quiz_candidates(&req.previous_questions, req.category_filter())
        .await
        .map_err(ApiError::read_failed)?;

    let question = state
        .picker
        .pick(candidates.len())
        .and_then(|idx| candidates.into_iter().nth(idx));

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::db::MemoryStore;
    use crate::http::server::{build_router, AppState};
    use crate::http::test_support::{send, send_raw, TestApp};
    use crate::models::NewQuestion;
    use crate::quiz::QuestionPicker;

    /// Always takes the last candidate
    struct LastPicker;

    impl QuestionPicker for LastPicker {
        fn pick(&self, len: usize) -> Option<usize> {
            len.checked_sub(1)
        }
    }

    #[tokio::test]
    async fn picks_from_unasked_questions() {
        let app = TestApp::seeded(6);
        let (status, body) = send(
            &app.router,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": [1, 2, 3]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!((4..=6).contains(&id));
    }

    #[tokio::test]
    async fn respects_category_filter() {
        let app = TestApp::seeded(12);
        for _ in 0..5 {
            let (_, body) = send(
                &app.router,
                "POST",
                "/quizzes",
                Some(json!({"previous_questions": [], "quiz_category": {"type": "Art", "id": "2"}})),
            )
            .await;
            assert_eq!(body["question"]["category"], 2);
        }
    }

    #[tokio::test]
    async fn category_zero_means_any() {
        let app = TestApp::seeded(3);
        let (status, body) = send(
            &app.router,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": [1, 2], "quiz_category": {"type": "click", "id": 0}})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 3);
    }

    #[tokio::test]
    async fn exhausted_category_returns_null_question() {
        let app = TestApp::seeded(12);
        let (status, body) = send(
            &app.router,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": [1, 7], "quiz_category": {"id": 1}})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "question": null}));
    }

    #[tokio::test]
    async fn injected_picker_decides() {
        let store = MemoryStore::with_default_categories();
        for text in ["first", "second", "third"] {
            store.add_question(
                NewQuestion::new(Some(text.into()), Some("a".into()), Some(1), None).unwrap(),
            );
        }
        let state = AppState::new(Arc::new(store)).with_picker(Arc::new(LastPicker));
        let router = build_router(state);

        let (_, body) = send(
            &router,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": []})),
        )
        .await;
        assert_eq!(body["question"]["question"], "third");
    }

    #[tokio::test]
    async fn missing_previous_questions_is_400() {
        let app = TestApp::seeded(3);
        let (status, body) = send(
            &app.router,
            "POST",
            "/quizzes",
            Some(json!({"quiz_category": {"id": 1}})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], 400);
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = TestApp::seeded(3);
        let (status, _) = send_raw(&app.router, "POST", "/quizzes", "[1, 2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_failure_is_400() {
        let app = TestApp::seeded(3);
        app.store.set_unavailable(true);
        let (status, body) = send(
            &app.router,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": []})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_ne!(body, Value::Null);
    }
}
