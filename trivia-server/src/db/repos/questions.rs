//! Question repository
//!
//! Handles question reads, search, quiz candidates, insert and delete.
//! Every write is a single statement.

use sqlx::PgPool;

use crate::db::StoreError;
use crate::models::{NewQuestion, Question};

/// Escape LIKE metacharacters so `term` matches literally.
///
/// Pairs with `ESCAPE '\'` in the query.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every question, ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Get a single question by id.
    pub async fn get(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Questions whose category column equals `category`.
    pub async fn list_for_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring search over question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let pattern = format!("%{}%", escape_like(term));
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions not in `previous`, optionally restricted to one category.
    pub async fn quiz_candidates(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE NOT (id = ANY($1))
              AND ($2::int IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(previous.to_vec())
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a question, returning the stored row.
    pub async fn insert(&self, new: &NewQuestion) -> Result<Question, StoreError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a question. Returns false if no row had that id.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
