//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::complexity::{is_sentinel, BestComplexity};

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    pub statement: String,
    pub constraints: String,
    pub examples: String,
    pub category_id: Option<Uuid>,
    /// Best known time complexity, `"NA"` until a solution is attached
    pub best_time_complexity: String,
    /// Best known space complexity, `"NA"` until a solution is attached
    pub best_space_complexity: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Problem {
    /// Currently recorded best time/space pair
    pub fn best_complexity(&self) -> BestComplexity {
        BestComplexity::new(&self.best_time_complexity, &self.best_space_complexity)
    }

    /// Whether any solution has contributed a best complexity yet
    pub fn has_recorded_complexity(&self) -> bool {
        !is_sentinel(&self.best_time_complexity)
    }
}
