//! Solution model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Candidate solution approach attached to a problem
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Solution {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub name: String,
    pub description: String,
    pub language: String,
    pub code: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
