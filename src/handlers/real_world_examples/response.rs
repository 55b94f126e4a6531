//! Real-world example response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::RealWorldExample;

/// Real-world example response
#[derive(Debug, Serialize)]
pub struct RealWorldExampleResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub industry: String,
    pub description: String,
    pub business_impact: String,
    pub consequences: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RealWorldExample> for RealWorldExampleResponse {
    fn from(example: RealWorldExample) -> Self {
        Self {
            id: example.id,
            problem_id: example.problem_id,
            industry: example.industry,
            description: example.description,
            business_impact: example.business_impact,
            consequences: example.consequences,
            created_at: example.created_at,
            updated_at: example.updated_at,
        }
    }
}

/// Real-world example list response
#[derive(Debug, Serialize)]
pub struct RealWorldExamplesListResponse {
    pub real_world_examples: Vec<RealWorldExampleResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
