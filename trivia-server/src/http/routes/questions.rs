//! Question endpoints
//!
//! Listing and search honor `?page=N`. Create and delete always answer
//! with the first page of the remaining questions.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::{loose_int, JsonBody, PathId};
use crate::http::server::AppState;
use crate::models::{category_map, paginate, CategoryMap, NewQuestion, Page, Question};

/// Create question request
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "loose_int::deserialize")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "loose_int::deserialize")]
    pub difficulty: Option<i32>,
}

/// Search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Paginated question listing
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// Category of each question on this page, in page order
    pub current_category: Vec<i32>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always null: search is not category-scoped
    pub current_category: Option<String>,
}

/// GET /questions - one page of all questions plus the category map
///
/// An empty page (no questions, or page past the end) is 404, as is an
/// empty category table.
async fn list_questions(
    State(state): State<Arc<AppState>>,
    page: Page,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = state
        .store
        .list_questions()
        .await
        .map_err(ApiError::read_failed)?;

    let current = paginate(page, &questions);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    let current_category = current.iter().map(|q| q.category).collect();

    let categories = state
        .store
        .list_categories()
        .await
        .map_err(ApiError::read_failed)?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current,
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category,
    }))
}

/// POST /questions - store a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let req: CreateQuestionRequest = serde_json::from_value(body).map_err(ApiError::write_failed)?;
    let new = NewQuestion::new(req.question, req.answer, req.category, req.difficulty)
        .map_err(ApiError::write_failed)?;

    let created = state
        .store
        .insert_question(new)
        .await
        .map_err(ApiError::write_failed)?;
    tracing::info!(id = created.id, category = created.category, "question created");

    let questions = state
        .store
        .list_questions()
        .await
        .map_err(ApiError::write_failed)?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: paginate(Page::FIRST, &questions),
        total_questions: questions.len(),
    }))
}

/// DELETE /questions/{id}/delete - remove a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let existing = state
        .store
        .find_question(id)
        .await
        .map_err(ApiError::write_failed)?;
    if existing.is_none() {
        return Err(ApiError::NotFound);
    }

    // Lost a race with another delete.
    if !state
        .store
        .delete_question(id)
        .await
        .map_err(ApiError::write_failed)?
    {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "question deleted");

    let questions = state
        .store
        .list_questions()
        .await
        .map_err(ApiError::write_failed)?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions: paginate(Page::FIRST, &questions),
        total_questions: questions.len(),
    }))
}

/// POST /questions/search - case-insensitive substring search
///
/// No matches is a successful empty page, never 404.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    page: Page,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req.search_term.ok_or(ApiError::Unprocessable)?;

    let matches = state
        .store
        .search_questions(&term)
        .await
        .map_err(ApiError::read_failed)?;

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(page, &matches),
        total_questions: matches.len(),
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}/delete", delete(delete_question))
}
