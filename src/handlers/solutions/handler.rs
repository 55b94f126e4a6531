//! Solution handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    services::SolutionService,
    state::AppState,
    utils::Pagination,
};

use super::{
    request::{CreateSolutionRequest, ListSolutionsQuery, UpdateSolutionRequest},
    response::{SolutionChangeResponse, SolutionResponse, SolutionsListResponse},
};

/// Attach a new solution to a problem
pub async fn create_solution(
    State(state): State<AppState>,
    Json(payload): Json<CreateSolutionRequest>,
) -> AppResult<(StatusCode, Json<SolutionChangeResponse>)> {
    payload.validate()?;

    let attached = SolutionService::create_solution(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(attached)))
}

/// List solutions (paginated)
pub async fn list_solutions(
    State(state): State<AppState>,
    Query(query): Query<ListSolutionsQuery>,
) -> AppResult<Json<SolutionsListResponse>> {
    let pagination = Pagination::from_query(query.page, query.per_page)?;

    let (solutions, total) =
        SolutionService::list_solutions(state.db(), pagination, query.problem_id.as_ref()).await?;

    Ok(Json(SolutionsListResponse {
        solutions,
        total,
        page: pagination.page,
        per_page: pagination.per_page,
    }))
}

/// Get a specific solution
pub async fn get_solution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SolutionResponse>> {
    let solution = SolutionService::get_solution(state.db(), &id).await?;
    Ok(Json(solution))
}

/// Update a solution
pub async fn update_solution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSolutionRequest>,
) -> AppResult<Json<SolutionChangeResponse>> {
    payload.validate()?;

    let updated = SolutionService::update_solution(state.db(), &id, payload).await?;
    Ok(Json(updated))
}

/// Delete a solution
pub async fn delete_solution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    SolutionService::delete_solution(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
