//! Real-world example repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::RealWorldExample};

/// Repository for real-world example database operations
pub struct RealWorldExampleRepository;

impl RealWorldExampleRepository {
    /// Create a new real-world example
    pub async fn create(
        pool: &PgPool,
        problem_id: &Uuid,
        industry: &str,
        description: &str,
        business_impact: &str,
        consequences: &str,
    ) -> AppResult<RealWorldExample> {
        let example = sqlx::query_as::<_, RealWorldExample>(
            r#"
            INSERT INTO real_world_examples (
                problem_id, industry, description, business_impact, consequences
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(industry)
        .bind(description)
        .bind(business_impact)
        .bind(consequences)
        .fetch_one(pool)
        .await?;

        Ok(example)
    }

    /// Find real-world example by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<RealWorldExample>> {
        let example = sqlx::query_as::<_, RealWorldExample>(
            r#"SELECT * FROM real_world_examples WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(example)
    }

    /// Update real-world example
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        industry: Option<&str>,
        description: Option<&str>,
        business_impact: Option<&str>,
        consequences: Option<&str>,
    ) -> AppResult<RealWorldExample> {
        let example = sqlx::query_as::<_, RealWorldExample>(
            r#"
            UPDATE real_world_examples
            SET
                industry = COALESCE($2, industry),
                description = COALESCE($3, description),
                business_impact = COALESCE($4, business_impact),
                consequences = COALESCE($5, consequences),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(industry)
        .bind(description)
        .bind(business_impact)
        .bind(consequences)
        .fetch_one(pool)
        .await?;

        Ok(example)
    }

    /// Delete real-world example
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM real_world_examples WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// All real-world examples of a problem
    pub async fn list_by_problem(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<RealWorldExample>> {
        let examples = sqlx::query_as::<_, RealWorldExample>(
            r#"SELECT * FROM real_world_examples WHERE problem_id = $1 ORDER BY created_at ASC"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(examples)
    }

    /// List real-world examples with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        problem_id: Option<&Uuid>,
    ) -> AppResult<(Vec<RealWorldExample>, i64)> {
        let examples = sqlx::query_as::<_, RealWorldExample>(
            r#"
            SELECT * FROM real_world_examples
            WHERE ($1::uuid IS NULL OR problem_id = $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(problem_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM real_world_examples WHERE ($1::uuid IS NULL OR problem_id = $1)"#,
        )
        .bind(problem_id)
        .fetch_one(pool)
        .await?;

        Ok((examples, count))
    }
}
