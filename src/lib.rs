//! AlgoCatalog - Interview Problem Catalog
//!
//! This library provides the core functionality for the AlgoCatalog service:
//! a catalog of programming-interview problems, the candidate solutions
//! attached to them, and the best known time/space complexity per problem.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Complexity**: Big-O parsing and comparison (pure, no I/O)
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod complexity;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
