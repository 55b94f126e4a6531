//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::{real_world_examples::RealWorldExampleResponse, solutions::SolutionResponse},
    models::Problem,
};

/// Problem response with its attached solutions and real-world examples
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: Uuid,
    pub title: String,
    pub statement: String,
    pub constraints: String,
    pub examples: String,
    pub category_id: Option<Uuid>,
    pub best_time_complexity: String,
    pub best_space_complexity: String,
    pub solutions: Vec<SolutionResponse>,
    pub real_world_examples: Vec<RealWorldExampleResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemSummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Problem summary for list views
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub id: Uuid,
    pub title: String,
    pub category_id: Option<Uuid>,
    pub best_time_complexity: String,
    pub best_space_complexity: String,
    pub created_at: DateTime<Utc>,
}

impl From<Problem> for ProblemSummary {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title,
            category_id: problem.category_id,
            best_time_complexity: problem.best_time_complexity,
            best_space_complexity: problem.best_space_complexity,
            created_at: problem.created_at,
        }
    }
}
