//! Data access seam used by the HTTP handlers
//!
//! Provides a trait for the store, with:
//! - Postgres implementation over the sqlx repositories
//! - In-memory implementation ([`super::MemoryStore`]) for tests and demos

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CategoryRepo, QuestionRepo};
use crate::models::{Category, NewQuestion, Question};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Typed queries over the categories and questions tables
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError>;

    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError>;

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match on question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Questions whose id is not in `previous`, restricted to `category`
    /// when one is given.
    async fn quiz_candidates(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError>;

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Returns false when no question had that id.
    async fn delete_question(&self, id: i32) -> Result<bool, StoreError>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list_for_category(category).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn quiz_candidates(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool)
            .quiz_candidates(previous, category)
            .await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        QuestionRepo::new(&self.pool).insert(&new).await
    }

    async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}
