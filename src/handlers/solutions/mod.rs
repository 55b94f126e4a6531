//! Solution handlers
//!
//! Creating a solution attaches it to its problem and may move the
//! problem's best recorded complexity.

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

/// Solution routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_solution))
        .route("/", get(handler::list_solutions))
        .route("/{id}", get(handler::get_solution))
        .route("/{id}", put(handler::update_solution))
        .route("/{id}", delete(handler::delete_solution))
}
