//! Real-world example handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    services::RealWorldExampleService,
    state::AppState,
    utils::Pagination,
};

use super::{
    request::{
        CreateRealWorldExampleRequest, ListRealWorldExamplesQuery, UpdateRealWorldExampleRequest,
    },
    response::{RealWorldExampleResponse, RealWorldExamplesListResponse},
};

/// Create a real-world example for a problem
pub async fn create_real_world_example(
    State(state): State<AppState>,
    Json(payload): Json<CreateRealWorldExampleRequest>,
) -> AppResult<(StatusCode, Json<RealWorldExampleResponse>)> {
    payload.validate()?;

    let example = RealWorldExampleService::create_example(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(example)))
}

/// List real-world examples (paginated)
pub async fn list_real_world_examples(
    State(state): State<AppState>,
    Query(query): Query<ListRealWorldExamplesQuery>,
) -> AppResult<Json<RealWorldExamplesListResponse>> {
    let pagination = Pagination::from_query(query.page, query.per_page)?;

    let (real_world_examples, total) =
        RealWorldExampleService::list_examples(state.db(), pagination, query.problem_id.as_ref())
            .await?;

    Ok(Json(RealWorldExamplesListResponse {
        real_world_examples,
        total,
        page: pagination.page,
        per_page: pagination.per_page,
    }))
}

/// Get a specific real-world example
pub async fn get_real_world_example(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RealWorldExampleResponse>> {
    let example = RealWorldExampleService::get_example(state.db(), &id).await?;
    Ok(Json(example))
}

/// Update a real-world example
pub async fn update_real_world_example(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRealWorldExampleRequest>,
) -> AppResult<Json<RealWorldExampleResponse>> {
    payload.validate()?;

    let example = RealWorldExampleService::update_example(state.db(), &id, payload).await?;
    Ok(Json(example))
}

/// Delete a real-world example
pub async fn delete_real_world_example(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    RealWorldExampleService::delete_example(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
