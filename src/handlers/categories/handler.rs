//! Category handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    services::CategoryService,
    state::AppState,
    utils::Pagination,
};

use super::{
    request::{CreateCategoryRequest, ListCategoriesQuery, UpdateCategoryRequest},
    response::{CategoriesListResponse, CategoryResponse},
};

/// List categories (paginated, sorted by name)
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListCategoriesQuery>,
) -> AppResult<Json<CategoriesListResponse>> {
    let pagination = Pagination::from_query(query.page, query.per_page)?;

    let (categories, total) = CategoryService::list_categories(state.db(), pagination).await?;

    Ok(Json(CategoriesListResponse {
        categories,
        total,
        page: pagination.page,
        per_page: pagination.per_page,
    }))
}

/// Create a new category
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    payload.validate()?;

    let category = CategoryService::create_category(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a specific category
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CategoryResponse>> {
    let category = CategoryService::get_category(state.db(), &id).await?;
    Ok(Json(category))
}

/// Rename a category
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    payload.validate()?;

    let category = CategoryService::update_category(state.db(), &id, payload).await?;
    Ok(Json(category))
}

/// Delete a category
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    CategoryService::delete_category(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
