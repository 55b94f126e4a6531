//! Real-world example request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_EXAMPLE_TEXT_LENGTH, MAX_INDUSTRY_LENGTH};

/// Create real-world example request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRealWorldExampleRequest {
    pub problem_id: Uuid,

    #[validate(length(min = 1, max = MAX_INDUSTRY_LENGTH))]
    pub industry: String,

    #[validate(length(min = 1, max = MAX_EXAMPLE_TEXT_LENGTH))]
    pub description: String,

    /// e.g. "Improves checkout optimization by 27%"
    #[validate(length(max = MAX_EXAMPLE_TEXT_LENGTH))]
    pub business_impact: Option<String>,

    /// What goes wrong when the problem is solved poorly
    #[validate(length(max = MAX_EXAMPLE_TEXT_LENGTH))]
    pub consequences: Option<String>,
}

/// Update real-world example request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRealWorldExampleRequest {
    #[validate(length(min = 1, max = MAX_INDUSTRY_LENGTH))]
    pub industry: Option<String>,

    #[validate(length(min = 1, max = MAX_EXAMPLE_TEXT_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = MAX_EXAMPLE_TEXT_LENGTH))]
    pub business_impact: Option<String>,

    #[validate(length(max = MAX_EXAMPLE_TEXT_LENGTH))]
    pub consequences: Option<String>,
}

/// List real-world examples query parameters
#[derive(Debug, Deserialize)]
pub struct ListRealWorldExamplesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub problem_id: Option<Uuid>,
}
