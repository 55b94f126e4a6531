//! Solution response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    complexity::{parse_complexity, BestComplexity, ComplexityClass},
    models::Solution,
};

/// Solution response
#[derive(Debug, Serialize)]
pub struct SolutionResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub name: String,
    pub description: String,
    pub language: String,
    pub code: String,
    pub time_complexity: String,
    pub space_complexity: String,
    /// Growth class of `time_complexity`
    pub time_class: Option<ComplexityClass>,
    /// Growth class of `space_complexity`
    pub space_class: Option<ComplexityClass>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Solution> for SolutionResponse {
    fn from(solution: Solution) -> Self {
        let time_class = parse_complexity(&solution.time_complexity)
            .ok()
            .map(|p| p.class);
        let space_class = parse_complexity(&solution.space_complexity)
            .ok()
            .map(|p| p.class);

        Self {
            id: solution.id,
            problem_id: solution.problem_id,
            name: solution.name,
            description: solution.description,
            language: solution.language,
            code: solution.code,
            time_complexity: solution.time_complexity,
            space_complexity: solution.space_complexity,
            time_class,
            space_class,
            created_at: solution.created_at,
            updated_at: solution.updated_at,
        }
    }
}

/// Result of attaching or editing a solution
#[derive(Debug, Serialize)]
pub struct SolutionChangeResponse {
    pub solution: SolutionResponse,
    /// The owning problem's best pair after the change
    pub best_complexity: BestComplexity,
    /// Whether the change moved the problem's best pair
    pub best_changed: bool,
}

/// Solution list response
#[derive(Debug, Serialize)]
pub struct SolutionsListResponse {
    pub solutions: Vec<SolutionResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
