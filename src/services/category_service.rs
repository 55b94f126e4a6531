//! Category service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::CategoryRepository,
    error::{AppError, AppResult},
    handlers::categories::{
        request::{CreateCategoryRequest, UpdateCategoryRequest},
        response::CategoryResponse,
    },
    utils::{required_text, Pagination},
};

/// Category service for business logic
pub struct CategoryService;

impl CategoryService {
    /// Create a new category; names are unique
    pub async fn create_category(
        pool: &PgPool,
        payload: CreateCategoryRequest,
    ) -> AppResult<CategoryResponse> {
        let name = required_text("name", &payload.name)?;

        if CategoryRepository::find_by_name(pool, &name).await?.is_some() {
            return Err(AppError::AlreadyExists("Category already exists".to_string()));
        }

        let category = CategoryRepository::create(pool, &name).await?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category created");

        Ok(category.into())
    }

    /// Get category by ID
    pub async fn get_category(pool: &PgPool, id: &Uuid) -> AppResult<CategoryResponse> {
        let category = CategoryRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        Ok(category.into())
    }

    /// Rename a category
    pub async fn update_category(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateCategoryRequest,
    ) -> AppResult<CategoryResponse> {
        let name = required_text("name", &payload.name)?;

        CategoryRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        if let Some(existing) = CategoryRepository::find_by_name(pool, &name).await? {
            if existing.id != *id {
                return Err(AppError::AlreadyExists(format!(
                    "Category with name {} already exists",
                    name
                )));
            }
        }

        let category = CategoryRepository::update(pool, id, &name).await?;
        Ok(category.into())
    }

    /// Delete a category
    pub async fn delete_category(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        CategoryRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        CategoryRepository::delete(pool, id).await
    }

    /// List categories sorted by name
    pub async fn list_categories(
        pool: &PgPool,
        pagination: Pagination,
    ) -> AppResult<(Vec<CategoryResponse>, i64)> {
        let (categories, total) =
            CategoryRepository::list(pool, pagination.offset(), pagination.limit()).await?;

        Ok((categories.into_iter().map(Into::into).collect(), total))
    }
}
