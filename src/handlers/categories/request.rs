//! Category request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_CATEGORY_NAME_LENGTH;

/// Create category request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: String,
}

/// Rename category request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: String,
}

/// List categories query parameters
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
