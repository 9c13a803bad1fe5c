//! Database layer - connection pool, schema, and the trivia store
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - a connection is held only
//!   for the duration of one query and returned on drop
//! - Handlers talk to [`TriviaStore`], never to the pool directly
//! - Each write is its own unit of work; no multi-statement transactions

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{CategoryRepo, QuestionRepo};
pub use store::{PgTriviaStore, StoreError, TriviaStore};

/// Categories inserted by `trivia seed` and `serve --in-memory`
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
