//! Solution request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    MAX_COMPLEXITY_LENGTH, MAX_LANGUAGE_LENGTH, MAX_SOLUTION_CODE_LENGTH,
    MAX_SOLUTION_DESCRIPTION_LENGTH, MAX_SOLUTION_NAME_LENGTH,
};

/// Attach a solution to a problem
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSolutionRequest {
    pub problem_id: Uuid,

    #[validate(length(min = 1, max = MAX_SOLUTION_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_SOLUTION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(
        length(min = 1, max = MAX_LANGUAGE_LENGTH),
        custom(function = "crate::utils::validation::validate_language")
    )]
    pub language: String,

    #[validate(length(min = 1, max = MAX_SOLUTION_CODE_LENGTH))]
    pub code: String,

    /// Big-O time complexity, e.g. `O(nlog(n))`
    #[validate(length(min = 1, max = MAX_COMPLEXITY_LENGTH))]
    pub time_complexity: String,

    /// Big-O space complexity, e.g. `O(1)`
    #[validate(length(min = 1, max = MAX_COMPLEXITY_LENGTH))]
    pub space_complexity: String,
}

/// Update solution request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSolutionRequest {
    #[validate(length(min = 1, max = MAX_SOLUTION_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_SOLUTION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(
        length(min = 1, max = MAX_LANGUAGE_LENGTH),
        custom(function = "crate::utils::validation::validate_language")
    )]
    pub language: Option<String>,

    #[validate(length(min = 1, max = MAX_SOLUTION_CODE_LENGTH))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = MAX_COMPLEXITY_LENGTH))]
    pub time_complexity: Option<String>,

    #[validate(length(min = 1, max = MAX_COMPLEXITY_LENGTH))]
    pub space_complexity: Option<String>,
}

/// List solutions query parameters
#[derive(Debug, Deserialize)]
pub struct ListSolutionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub problem_id: Option<Uuid>,
}
