//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::PathId;
use crate::http::server::AppState;
use crate::models::{category_map, paginate, CategoryMap, Page, Question};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Questions in one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Display name of the requested category
    pub current_category: String,
}

/// GET /categories - every category as an id -> type map
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(ApiError::read_failed)?;

    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = category_map(categories);
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
///
/// An unknown category is a bad request rather than 404, and an empty
/// page is a successful empty list.
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
    page: Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store
        .find_category(id)
        .await
        .map_err(ApiError::read_failed)?
        .ok_or_else(|| {
            tracing::warn!(category = id, "unknown category");
            ApiError::BadRequest
        })?;

    let questions = state
        .store
        .questions_in_category(id)
        .await
        .map_err(ApiError::read_failed)?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(page, &questions),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
