//! trivia-server: HTTP API for the trivia game
//!
//! Serves questions and categories from a relational store with
//! pagination, keyword search, category filtering, question
//! creation/deletion, and next-question selection for quiz play.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
