//! In-memory store
//!
//! Mirrors the Postgres store's semantics: ids are assigned from a
//! monotonically increasing counter and never reused, listings are
//! ordered by id, and question categories are not checked.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{StoreError, TriviaStore, DEFAULT_CATEGORIES};
use crate::models::{Category, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
    unavailable: bool,
}

/// Store backed by process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the standard six categories and no questions.
    pub fn with_default_categories() -> Self {
        let store = Self::new();
        for name in DEFAULT_CATEGORIES {
            store.add_category(name);
        }
        store
    }

    /// Add a category, returning its id.
    pub fn add_category(&self, kind: &str) -> i32 {
        let mut tables = self.lock();
        let id = tables.categories.last().map_or(1, |c| c.id + 1);
        tables.categories.push(Category::new(id, kind));
        id
    }

    /// Insert a question regardless of availability, returning the stored row.
    pub fn add_question(&self, new: NewQuestion) -> Question {
        let mut tables = self.lock();
        tables.next_question_id += 1;
        let question = new.into_question(tables.next_question_id);
        tables.questions.push(question.clone());
        question
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        let tables = self.lock();
        if tables.unavailable {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(tables)
    }

    fn filter_questions<F>(&self, keep: F) -> Result<Vec<Question>, StoreError>
    where
        F: Fn(&Question) -> bool,
    {
        Ok(self
            .tables()?
            .questions
            .iter()
            .filter(|q| keep(*q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables()?.categories.clone())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        Ok(self.tables()?.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.filter_questions(|_| true)
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        Ok(self.tables()?.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        self.filter_questions(|q| q.category == category)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        self.filter_questions(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn quiz_candidates(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        self.filter_questions(|q| {
            !previous.contains(&q.id) && category.map_or(true, |c| q.category == c)
        })
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        drop(self.tables()?);
        Ok(self.add_question(new))
    }

    async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        let mut tables = self.tables()?;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }
}
