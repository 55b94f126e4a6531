//! Category repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Category};

/// Repository for category database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// Create a new category
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    /// Find category by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(category)
    }

    /// Find category by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE name = $1"#)
                .bind(name)
                .fetch_optional(pool)
                .await?;

        Ok(category)
    }

    /// Check whether a category exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Rename a category
    pub async fn update(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    /// Delete category. Problems in it keep existing without a category.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List categories ordered by name
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<(Vec<Category>, i64)> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT * FROM categories
            ORDER BY name ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM categories"#)
            .fetch_one(pool)
            .await?;

        Ok((categories, count))
    }
}
