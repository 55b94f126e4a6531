//! Problem management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/", post(handler::create_problem))
        .route("/{id}", get(handler::get_problem))
        .route("/{id}", put(handler::update_problem))
        .route("/{id}", delete(handler::delete_problem))
        // Attached resources
        .route("/{id}/solutions", get(handler::list_problem_solutions))
        .route(
            "/{id}/real-world-examples",
            get(handler::list_problem_real_world_examples),
        )
}
