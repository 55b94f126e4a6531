//! Real-world application note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Where a problem shows up in industry and what it is worth there
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RealWorldExample {
    pub id: Uuid,
    pub problem_id: Uuid,
    /// e.g. "E-commerce", "Finance"
    pub industry: String,
    pub description: String,
    pub business_impact: String,
    pub consequences: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
