//! Real-world example service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, RealWorldExampleRepository},
    error::{AppError, AppResult},
    handlers::real_world_examples::{
        request::{CreateRealWorldExampleRequest, UpdateRealWorldExampleRequest},
        response::RealWorldExampleResponse,
    },
    utils::{required_text, sanitize_string, Pagination},
};

/// Real-world example service for business logic
pub struct RealWorldExampleService;

impl RealWorldExampleService {
    /// Record where a problem shows up in industry
    pub async fn create_example(
        pool: &PgPool,
        payload: CreateRealWorldExampleRequest,
    ) -> AppResult<RealWorldExampleResponse> {
        let industry = required_text("industry", &payload.industry)?;
        let description = required_text("description", &payload.description)?;
        let business_impact = payload
            .business_impact
            .as_deref()
            .map(sanitize_string)
            .unwrap_or_default();
        let consequences = payload
            .consequences
            .as_deref()
            .map(sanitize_string)
            .unwrap_or_default();

        if !ProblemRepository::exists(pool, &payload.problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let example = RealWorldExampleRepository::create(
            pool,
            &payload.problem_id,
            &industry,
            &description,
            &business_impact,
            &consequences,
        )
        .await?;

        tracing::info!(
            example_id = %example.id,
            problem_id = %example.problem_id,
            industry = %example.industry,
            "Real-world example created"
        );

        Ok(example.into())
    }

    /// Get real-world example by ID
    pub async fn get_example(pool: &PgPool, id: &Uuid) -> AppResult<RealWorldExampleResponse> {
        let example = RealWorldExampleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Real-world example not found".to_string()))?;

        Ok(example.into())
    }

    /// Update real-world example
    pub async fn update_example(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateRealWorldExampleRequest,
    ) -> AppResult<RealWorldExampleResponse> {
        RealWorldExampleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Real-world example not found".to_string()))?;

        let industry = payload
            .industry
            .as_deref()
            .map(|i| required_text("industry", i))
            .transpose()?;
        let description = payload
            .description
            .as_deref()
            .map(|d| required_text("description", d))
            .transpose()?;
        let business_impact = payload.business_impact.as_deref().map(sanitize_string);
        let consequences = payload.consequences.as_deref().map(sanitize_string);

        let example = RealWorldExampleRepository::update(
            pool,
            id,
            industry.as_deref(),
            description.as_deref(),
            business_impact.as_deref(),
            consequences.as_deref(),
        )
        .await?;

        Ok(example.into())
    }

    /// Delete real-world example
    pub async fn delete_example(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        RealWorldExampleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Real-world example not found".to_string()))?;

        RealWorldExampleRepository::delete(pool, id).await
    }

    /// List real-world examples
    pub async fn list_examples(
        pool: &PgPool,
        pagination: Pagination,
        problem_id: Option<&Uuid>,
    ) -> AppResult<(Vec<RealWorldExampleResponse>, i64)> {
        let (examples, total) = RealWorldExampleRepository::list(
            pool,
            pagination.offset(),
            pagination.limit(),
            problem_id,
        )
        .await?;

        Ok((examples.into_iter().map(Into::into).collect(), total))
    }

    /// All real-world examples of a problem
    pub async fn list_for_problem(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<RealWorldExampleResponse>> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let examples = RealWorldExampleRepository::list_by_problem(pool, problem_id).await?;
        Ok(examples.into_iter().map(Into::into).collect())
    }
}
