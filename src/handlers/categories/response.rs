//! Category response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Category;

/// Category response
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Category list response, ordered by name
#[derive(Debug, Serialize)]
pub struct CategoriesListResponse {
    pub categories: Vec<CategoryResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
