//! Problem handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{real_world_examples::RealWorldExampleResponse, solutions::SolutionResponse},
    services::{ProblemService, RealWorldExampleService, SolutionService},
    state::AppState,
    utils::Pagination,
};

use super::{
    request::{CreateProblemRequest, ListProblemsQuery, UpdateProblemRequest},
    response::{ProblemResponse, ProblemsListResponse},
};

/// List all problems (paginated)
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let pagination = Pagination::from_query(query.page, query.per_page)?;

    let (problems, total) = ProblemService::list_problems(
        state.db(),
        pagination,
        query.category_id.as_ref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        problems,
        total,
        page: pagination.page,
        per_page: pagination.per_page,
    }))
}

/// Create a new problem
pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    payload.validate()?;

    let problem = ProblemService::create_problem(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(problem)))
}

/// Get a specific problem with its solutions and real-world examples
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.db(), &id).await?;
    Ok(Json(problem))
}

/// Update a problem
pub async fn update_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    payload.validate()?;

    let problem = ProblemService::update_problem(state.db(), &id, payload).await?;
    Ok(Json(problem))
}

/// Delete a problem
pub async fn delete_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ProblemService::delete_problem(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the solutions attached to a problem
pub async fn list_problem_solutions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<SolutionResponse>>> {
    let solutions = SolutionService::list_for_problem(state.db(), &id).await?;
    Ok(Json(solutions))
}

/// List the real-world examples attached to a problem
pub async fn list_problem_real_world_examples(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<RealWorldExampleResponse>>> {
    let examples = RealWorldExampleService::list_for_problem(state.db(), &id).await?;
    Ok(Json(examples))
}
