//! Problem request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_PROBLEM_TEXT_LENGTH, MAX_PROBLEM_TITLE_LENGTH};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_PROBLEM_TEXT_LENGTH))]
    pub statement: String,

    #[validate(length(max = MAX_PROBLEM_TEXT_LENGTH))]
    pub constraints: Option<String>,

    /// Worked input/output examples, free text
    #[validate(length(max = MAX_PROBLEM_TEXT_LENGTH))]
    pub examples: Option<String>,

    pub category_id: Option<Uuid>,
}

/// Update problem request
///
/// The best complexity pair is not editable here; it only moves when
/// solutions are attached, edited or removed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_PROBLEM_TEXT_LENGTH))]
    pub statement: Option<String>,

    #[validate(length(max = MAX_PROBLEM_TEXT_LENGTH))]
    pub constraints: Option<String>,

    #[validate(length(max = MAX_PROBLEM_TEXT_LENGTH))]
    pub examples: Option<String>,

    pub category_id: Option<Uuid>,
}

/// List problems query parameters
#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category_id: Option<Uuid>,
    pub search: Option<String>,
}
