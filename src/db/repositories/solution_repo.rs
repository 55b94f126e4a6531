//! Solution repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Solution};

/// Repository for solution database operations
pub struct SolutionRepository;

impl SolutionRepository {
    /// Insert a new solution
    pub async fn create(
        conn: &mut PgConnection,
        problem_id: &Uuid,
        name: &str,
        description: &str,
        language: &str,
        code: &str,
        time_complexity: &str,
        space_complexity: &str,
    ) -> AppResult<Solution> {
        let solution = sqlx::query_as::<_, Solution>(
            r#"
            INSERT INTO solutions (
                problem_id, name, description, language, code,
                time_complexity, space_complexity
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(name)
        .bind(description)
        .bind(language)
        .bind(code)
        .bind(time_complexity)
        .bind(space_complexity)
        .fetch_one(conn)
        .await?;

        Ok(solution)
    }

    /// Find solution by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Solution>> {
        let solution = sqlx::query_as::<_, Solution>(r#"SELECT * FROM solutions WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(solution)
    }

    /// Update solution
    pub async fn update(
        conn: &mut PgConnection,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        language: Option<&str>,
        code: Option<&str>,
        time_complexity: Option<&str>,
        space_complexity: Option<&str>,
    ) -> AppResult<Solution> {
        let solution = sqlx::query_as::<_, Solution>(
            r#"
            UPDATE solutions
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                language = COALESCE($4, language),
                code = COALESCE($5, code),
                time_complexity = COALESCE($6, time_complexity),
                space_complexity = COALESCE($7, space_complexity),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(language)
        .bind(code)
        .bind(time_complexity)
        .bind(space_complexity)
        .fetch_one(conn)
        .await?;

        Ok(solution)
    }

    /// Delete solution
    pub async fn delete(conn: &mut PgConnection, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM solutions WHERE id = $1"#)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(())
    }

    /// Time/space complexities of a problem's solutions in attachment order
    pub async fn complexities_for_problem(
        conn: &mut PgConnection,
        problem_id: &Uuid,
    ) -> AppResult<Vec<(String, String)>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT time_complexity, space_complexity FROM solutions
            WHERE problem_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(problem_id)
        .fetch_all(conn)
        .await?;

        Ok(rows)
    }

    /// All solutions of a problem in attachment order
    pub async fn list_by_problem(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<Solution>> {
        let solutions = sqlx::query_as::<_, Solution>(
            r#"SELECT * FROM solutions WHERE problem_id = $1 ORDER BY created_at ASC, id ASC"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(solutions)
    }

    /// List solutions with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        problem_id: Option<&Uuid>,
    ) -> AppResult<(Vec<Solution>, i64)> {
        let solutions = sqlx::query_as::<_, Solution>(
            r#"
            SELECT * FROM solutions
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
            r#"SELECT COUNT(*) FROM solutions WHERE ($1::uuid IS NULL OR problem_id = $1)"#,
        )
        .bind(problem_id)
        .fetch_one(pool)
        .await?;

        Ok((solutions, count))
    }
}
