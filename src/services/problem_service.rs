//! Problem service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        CategoryRepository, ProblemRepository, RealWorldExampleRepository, SolutionRepository,
    },
    error::{AppError, AppResult},
    handlers::problems::{
        request::{CreateProblemRequest, UpdateProblemRequest},
        response::{ProblemResponse, ProblemSummary},
    },
    models::Problem,
    utils::{required_text, sanitize_string, Pagination},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Create a new problem. Its best complexity starts out unrecorded.
    pub async fn create_problem(
        pool: &PgPool,
        payload: CreateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        let title = required_text("title", &payload.title)?;
        let statement = required_text("statement", &payload.statement)?;

        if let Some(category_id) = payload.category_id.as_ref() {
            Self::ensure_category_exists(pool, category_id).await?;
        }

        let constraints = payload
            .constraints
            .as_deref()
            .map(sanitize_string)
            .unwrap_or_default();
        let examples = payload
            .examples
            .as_deref()
            .map(sanitize_string)
            .unwrap_or_default();

        let problem = ProblemRepository::create(
            pool,
            &title,
            &statement,
            &constraints,
            &examples,
            payload.category_id.as_ref(),
        )
        .await?;

        tracing::info!(problem_id = %problem.id, title = %problem.title, "Problem created");

        Self::to_problem_response(pool, problem).await
    }

    /// Get problem by ID
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<ProblemResponse> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        Self::to_problem_response(pool, problem).await
    }

    /// Update problem
    pub async fn update_problem(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        if let Some(category_id) = payload.category_id.as_ref() {
            Self::ensure_category_exists(pool, category_id).await?;
        }

        let title = payload
            .title
            .as_deref()
            .map(|t| required_text("title", t))
            .transpose()?;
        let statement = payload
            .statement
            .as_deref()
            .map(|s| required_text("statement", s))
            .transpose()?;
        let constraints = payload.constraints.as_deref().map(sanitize_string);
        let examples = payload.examples.as_deref().map(sanitize_string);

        let updated = ProblemRepository::update(
            pool,
            id,
            title.as_deref(),
            statement.as_deref(),
            constraints.as_deref(),
            examples.as_deref(),
            payload.category_id.as_ref(),
        )
        .await?;

        Self::to_problem_response(pool, updated).await
    }

    /// Delete problem together with its solutions and real-world examples
    pub async fn delete_problem(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        ProblemRepository::delete(pool, id).await?;

        tracing::info!(problem_id = %id, "Problem deleted");
        Ok(())
    }

    /// List problems
    pub async fn list_problems(
        pool: &PgPool,
        pagination: Pagination,
        category_id: Option<&Uuid>,
        search: Option<&str>,
    ) -> AppResult<(Vec<ProblemSummary>, i64)> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let (problems, total) = ProblemRepository::list(
            pool,
            pagination.offset(),
            pagination.limit(),
            category_id,
            search,
        )
        .await?;

        Ok((problems.into_iter().map(Into::into).collect(), total))
    }

    // Helper functions
    async fn ensure_category_exists(pool: &PgPool, category_id: &Uuid) -> AppResult<()> {
        if !CategoryRepository::exists(pool, category_id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }
        Ok(())
    }

    async fn to_problem_response(pool: &PgPool, problem: Problem) -> AppResult<ProblemResponse> {
        let (solutions, examples) = futures::try_join!(
            SolutionRepository::list_by_problem(pool, &problem.id),
            RealWorldExampleRepository::list_by_problem(pool, &problem.id),
        )?;

        Ok(ProblemResponse {
            id: problem.id,
            title: problem.title,
            statement: problem.statement,
            constraints: problem.constraints,
            examples: problem.examples,
            category_id: problem.category_id,
            best_time_complexity: problem.best_time_complexity,
            best_space_complexity: problem.best_space_complexity,
            solutions: solutions.into_iter().map(Into::into).collect(),
            real_world_examples: examples.into_iter().map(Into::into).collect(),
            created_at: problem.created_at,
            updated_at: problem.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::{
            categories::request::CreateCategoryRequest,
            solutions::request::CreateSolutionRequest,
        },
        services::{CategoryService, SolutionService},
        test_utils::test_app::create_test_pool,
    };

    fn problem(title: &str, category_id: Option<Uuid>) -> CreateProblemRequest {
        CreateProblemRequest {
            title: title.to_string(),
            statement: "Return the answer.".to_string(),
            constraints: Some("1 <= n <= 10^5".to_string()),
            examples: None,
            category_id,
        }
    }

    async fn new_category(pool: &PgPool) -> Uuid {
        CategoryService::create_category(
            pool,
            CreateCategoryRequest {
                name: format!("Arrays {}", Uuid::new_v4()),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn first_page() -> Pagination {
        Pagination::from_query(None, None).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_unknown_category_is_not_found() {
        let pool = create_test_pool().await;

        let err =
            ProblemService::create_problem(&pool, problem("Jump Game", Some(Uuid::new_v4())))
                .await
                .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_new_problem_starts_unrecorded() {
        let pool = create_test_pool().await;
        let category_id = new_category(&pool).await;

        let created =
            ProblemService::create_problem(&pool, problem("  Jump Game  ", Some(category_id)))
                .await
                .unwrap();
        assert_eq!(created.title, "Jump Game");
        assert_eq!(created.category_id, Some(category_id));
        assert_eq!(created.best_time_complexity, "NA");
        assert_eq!(created.best_space_complexity, "NA");
        assert!(created.solutions.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_list_filters_by_category() {
        let pool = create_test_pool().await;
        let category_id = new_category(&pool).await;

        for title in ["Two Sum", "Three Sum"] {
            ProblemService::create_problem(&pool, problem(title, Some(category_id)))
                .await
                .unwrap();
        }
        ProblemService::create_problem(&pool, problem("Unfiled", None))
            .await
            .unwrap();

        let (problems, total) =
            ProblemService::list_problems(&pool, first_page(), Some(&category_id), None)
                .await
                .unwrap();
        assert_eq!(total, 2);
        assert!(problems.iter().all(|p| p.category_id == Some(category_id)));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_search_matches_title_literally() {
        let pool = create_test_pool().await;
        let token = Uuid::new_v4().simple().to_string();

        let mut ids = Vec::new();
        for title in ["Top 50% split", "Top 50 split", "Top_k", "Topsk"] {
            let created =
                ProblemService::create_problem(&pool, problem(&format!("{title} {token}"), None))
                    .await
                    .unwrap();
            ids.push(created.id);
        }

        let (all, total) = ProblemService::list_problems(&pool, first_page(), None, Some(&token))
            .await
            .unwrap();
        assert_eq!(total, 4);
        assert_eq!(all.len(), 4);

        let search = format!("50% split {token}");
        let (found, total) = ProblemService::list_problems(&pool, first_page(), None, Some(&search))
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(found[0].id, ids[0]);

        let search = format!("p_k {token}");
        let (found, total) = ProblemService::list_problems(&pool, first_page(), None, Some(&search))
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(found[0].id, ids[2]);

        // A blank search is no filter at all
        let (_, blank_total) = ProblemService::list_problems(&pool, first_page(), None, Some("  "))
            .await
            .unwrap();
        assert!(blank_total >= 4);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_delete_removes_solutions() {
        let pool = create_test_pool().await;
        let created = ProblemService::create_problem(&pool, problem("Coin Change", None))
            .await
            .unwrap();

        let attached = SolutionService::create_solution(
            &pool,
            CreateSolutionRequest {
                problem_id: created.id,
                name: "Bottom-up DP".to_string(),
                description: None,
                language: "rust".to_string(),
                code: "fn main() {}".to_string(),
                time_complexity: "O(n^2)".to_string(),
                space_complexity: "O(n)".to_string(),
            },
        )
        .await
        .unwrap();

        ProblemService::delete_problem(&pool, &created.id).await.unwrap();

        assert!(matches!(
            ProblemService::get_problem(&pool, &created.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            SolutionService::get_solution(&pool, &attached.solution.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
