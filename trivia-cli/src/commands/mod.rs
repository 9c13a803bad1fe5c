//! Command implementations for the trivia CLI

pub mod db;
pub mod serve;

pub use db::{run_migrate, run_seed};
pub use serve::run_serve;
