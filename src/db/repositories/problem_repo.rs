//! Problem repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{complexity::BestComplexity, error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem with no recorded complexity
    pub async fn create(
        pool: &PgPool,
        title: &str,
        statement: &str,
        constraints: &str,
        examples: &str,
        category_id: Option<&Uuid>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (title, statement, constraints, examples, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(statement)
        .bind(constraints)
        .bind(examples)
        .bind(category_id)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by ID and lock the row until the transaction ends
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: &Uuid,
    ) -> AppResult<Option<Problem>> {
        let problem =
            sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1 FOR UPDATE"#)
                .bind(id)
                .fetch_optional(conn)
                .await?;

        Ok(problem)
    }

    /// Check whether a problem exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM problems WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Update problem
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        statement: Option<&str>,
        constraints: Option<&str>,
        examples: Option<&str>,
        category_id: Option<&Uuid>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                statement = COALESCE($3, statement),
                constraints = COALESCE($4, constraints),
                examples = COALESCE($5, examples),
                category_id = COALESCE($6, category_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(statement)
        .bind(constraints)
        .bind(examples)
        .bind(category_id)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Store a new best time/space complexity pair
    pub async fn update_best_complexity(
        conn: &mut PgConnection,
        id: &Uuid,
        best: &BestComplexity,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                best_time_complexity = $2,
                best_space_complexity = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&best.time)
        .bind(&best.space)
        .fetch_one(conn)
        .await?;

        Ok(problem)
    }

    /// Delete problem (solutions and real-world examples cascade)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List problems with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category_id: Option<&Uuid>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let search_pattern = search.map(contains_pattern);

        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::uuid IS NULL OR category_id = $1)
                AND ($2::text IS NULL OR title ILIKE $2 ESCAPE '\')
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(category_id)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::uuid IS NULL OR category_id = $1)
                AND ($2::text IS NULL OR title ILIKE $2 ESCAPE '\')
            "#,
        )
        .bind(category_id)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }
}

/// `ILIKE` pattern matching `search` literally anywhere in the title
fn contains_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("two sum"), "%two sum%");
        assert_eq!(contains_pattern("50%"), r"%50\%%");
        assert_eq!(contains_pattern("snake_case"), r"%snake\_case%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
