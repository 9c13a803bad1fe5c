//! trivia-server: HTTP API backing the trivia app
//!
//! Lists categories, pages through questions, searches, creates and
//! deletes questions, and picks the next quiz question. All state lives
//! in the relational store behind [`db::TriviaStore`].

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use db::{MemoryStore, PgTriviaStore, StoreError, TriviaStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use quiz::{QuestionPicker, RandomPicker, SeededPicker};
