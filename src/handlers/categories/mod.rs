//! Category management handlers

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

/// Category routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_categories))
        .route("/", post(handler::create_category))
        .route("/{id}", get(handler::get_category))
        .route("/{id}", put(handler::update_category))
        .route("/{id}", delete(handler::delete_category))
}
