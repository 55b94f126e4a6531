//! Real-world example handlers

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

/// Real-world example routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_real_world_example))
        .route("/", get(handler::list_real_world_examples))
        .route("/{id}", get(handler::get_real_world_example))
        .route("/{id}", put(handler::update_real_world_example))
        .route("/{id}", delete(handler::delete_real_world_example))
}
