//! Repository implementations for database access
//!
//! Each repository borrows the pool and runs one query per call.
//! Listings come back ordered by id.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;
