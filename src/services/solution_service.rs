//! Solution service
//!
//! Attaching, editing and removing a solution all run inside one
//! transaction holding a row lock on the owning problem.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    complexity::{compare_approaches, fold_best, parse_complexity, BestComplexity},
    db::repositories::{ProblemRepository, SolutionRepository},
    error::{AppError, AppResult},
    handlers::solutions::{
        request::{CreateSolutionRequest, UpdateSolutionRequest},
        response::{SolutionChangeResponse, SolutionResponse},
    },
    models::Problem,
    utils::{required_text, sanitize_string, Pagination},
};

/// Solution service for business logic
pub struct SolutionService;

impl SolutionService {
    /// Attach a solution to a problem and fold its complexities into the
    /// problem's best pair.
    pub async fn create_solution(
        pool: &PgPool,
        payload: CreateSolutionRequest,
    ) -> AppResult<SolutionChangeResponse> {
        // Reject malformed notations before touching the database
        let time_complexity = Self::checked_notation(&payload.time_complexity)?;
        let space_complexity = Self::checked_notation(&payload.space_complexity)?;

        let name = required_text("name", &payload.name)?;
        let language = required_text("language", &payload.language)?.to_ascii_lowercase();
        let description = payload
            .description
            .as_deref()
            .map(sanitize_string)
            .unwrap_or_default();
        if payload.code.trim().is_empty() {
            return Err(AppError::Validation("code cannot be empty".to_string()));
        }

        let mut tx = pool.begin().await?;

        let problem = Self::lock_problem(&mut *tx, &payload.problem_id).await?;
        let previous = problem.best_complexity();

        let best = compare_approaches(
            &time_complexity,
            &space_complexity,
            &previous.time,
            &previous.space,
        )?;

        let solution = SolutionRepository::create(
            &mut *tx,
            &problem.id,
            &name,
            &description,
            &language,
            &payload.code,
            &time_complexity,
            &space_complexity,
        )
        .await?;

        let best_changed = best != previous;
        if best_changed {
            ProblemRepository::update_best_complexity(&mut *tx, &problem.id, &best).await?;
        }

        tx.commit().await?;

        tracing::info!(
            problem_id = %problem.id,
            solution_id = %solution.id,
            time = %solution.time_complexity,
            space = %solution.space_complexity,
            best_time = %best.time,
            best_space = %best.space,
            best_changed,
            first_solution = !problem.has_recorded_complexity(),
            "Solution attached"
        );

        Ok(SolutionChangeResponse {
            solution: solution.into(),
            best_complexity: best,
            best_changed,
        })
    }

    /// Get solution by ID
    pub async fn get_solution(pool: &PgPool, id: &Uuid) -> AppResult<SolutionResponse> {
        let solution = SolutionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solution not found".to_string()))?;

        Ok(solution.into())
    }

    /// Edit a solution. The problem's best pair is rebuilt from all of its
    /// remaining solutions, since an edit can make the old best obsolete.
    pub async fn update_solution(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateSolutionRequest,
    ) -> AppResult<SolutionChangeResponse> {
        let time_complexity = payload
            .time_complexity
            .as_deref()
            .map(Self::checked_notation)
            .transpose()?;
        let space_complexity = payload
            .space_complexity
            .as_deref()
            .map(Self::checked_notation)
            .transpose()?;

        let name = payload
            .name
            .as_deref()
            .map(|n| required_text("name", n))
            .transpose()?;
        let language = payload
            .language
            .as_deref()
            .map(|l| required_text("language", l).map(|l| l.to_ascii_lowercase()))
            .transpose()?;
        let description = payload.description.as_deref().map(sanitize_string);
        if payload.code.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(AppError::Validation("code cannot be empty".to_string()));
        }

        let existing = SolutionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solution not found".to_string()))?;

        let mut tx = pool.begin().await?;

        let problem = Self::lock_problem(&mut *tx, &existing.problem_id).await?;

        let solution = SolutionRepository::update(
            &mut *tx,
            id,
            name.as_deref(),
            description.as_deref(),
            language.as_deref(),
            payload.code.as_deref(),
            time_complexity.as_deref(),
            space_complexity.as_deref(),
        )
        .await?;

        let (best, best_changed) = Self::recompute_best(&mut *tx, &problem).await?;

        tx.commit().await?;

        tracing::info!(
            problem_id = %problem.id,
            solution_id = %solution.id,
            best_time = %best.time,
            best_space = %best.space,
            best_changed,
            "Solution updated"
        );

        Ok(SolutionChangeResponse {
            solution: solution.into(),
            best_complexity: best,
            best_changed,
        })
    }

    /// Remove a solution and rebuild the problem's best pair
    pub async fn delete_solution(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        let existing = SolutionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solution not found".to_string()))?;

        let mut tx = pool.begin().await?;

        let problem = Self::lock_problem(&mut *tx, &existing.problem_id).await?;
        SolutionRepository::delete(&mut *tx, id).await?;
        let (best, best_changed) = Self::recompute_best(&mut *tx, &problem).await?;

        tx.commit().await?;

        tracing::info!(
            problem_id = %problem.id,
            solution_id = %id,
            best_time = %best.time,
            best_space = %best.space,
            best_changed,
            "Solution deleted"
        );

        Ok(())
    }

    /// List solutions, newest first
    pub async fn list_solutions(
        pool: &PgPool,
        pagination: Pagination,
        problem_id: Option<&Uuid>,
    ) -> AppResult<(Vec<SolutionResponse>, i64)> {
        let (solutions, total) =
            SolutionRepository::list(pool, pagination.offset(), pagination.limit(), problem_id)
                .await?;

        Ok((solutions.into_iter().map(Into::into).collect(), total))
    }

    /// All solutions of a problem in attachment order
    pub async fn list_for_problem(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<SolutionResponse>> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let solutions = SolutionRepository::list_by_problem(pool, problem_id).await?;
        Ok(solutions.into_iter().map(Into::into).collect())
    }

    // Helper functions

    /// Canonical spelling of a notation, rejected unless it names a
    /// supported class. Equal complexities are stored as equal strings.
    fn checked_notation(notation: &str) -> AppResult<String> {
        Ok(parse_complexity(notation)?.notation())
    }

    async fn lock_problem(conn: &mut PgConnection, problem_id: &Uuid) -> AppResult<Problem> {
        ProblemRepository::find_by_id_for_update(conn, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    async fn recompute_best(
        conn: &mut PgConnection,
        problem: &Problem,
    ) -> AppResult<(BestComplexity, bool)> {
        let rows = SolutionRepository::complexities_for_problem(conn, &problem.id).await?;
        let best = fold_best(rows.iter().map(|(t, s)| (t.as_str(), s.as_str())))?;

        let best_changed = best != problem.best_complexity();
        if best_changed {
            ProblemRepository::update_best_complexity(conn, &problem.id, &best).await?;
        }

        Ok((best, best_changed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::problems::request::CreateProblemRequest, services::ProblemService,
        test_utils::test_app::create_test_pool,
    };

    fn attach(problem_id: Uuid, time: &str, space: &str) -> CreateSolutionRequest {
        CreateSolutionRequest {
            problem_id,
            name: format!("{} / {}", time, space),
            description: None,
            language: "Python".to_string(),
            code: "pass".to_string(),
            time_complexity: time.to_string(),
            space_complexity: space.to_string(),
        }
    }

    async fn new_problem(pool: &PgPool, title: &str) -> Uuid {
        let problem = ProblemService::create_problem(
            pool,
            CreateProblemRequest {
                title: title.to_string(),
                statement: "Find two numbers that add up to a target.".to_string(),
                constraints: None,
                examples: None,
                category_id: None,
            },
        )
        .await
        .unwrap();
        problem.id
    }

    #[test]
    fn test_checked_notation_strips_whitespace() {
        assert_eq!(
            SolutionService::checked_notation(" O( n log(n) ) ").unwrap(),
            "O(nlog(n))"
        );
        assert_eq!(SolutionService::checked_notation("O(n^ 3)").unwrap(), "O(n^3)");
    }

    #[test]
    fn test_checked_notation_drops_leading_zeros() {
        assert_eq!(SolutionService::checked_notation("O(n^02)").unwrap(), "O(n^2)");
        assert_eq!(SolutionService::checked_notation("O(n^000)").unwrap(), "O(n^0)");
    }

    #[test]
    fn test_equal_degree_spelled_differently_keeps_best_space() {
        let best_time = SolutionService::checked_notation("O(n^02)").unwrap();
        let new_time = SolutionService::checked_notation("O(n^2)").unwrap();

        let best = compare_approaches(&new_time, "O(n^3)", &best_time, "O(1)").unwrap();
        assert_eq!(best, BestComplexity::new("O(n^2)", "O(1)"));
    }

    #[test]
    fn test_checked_notation_rejects_unsupported() {
        for notation in ["O(m)", "NA", "", "O(n^2"] {
            assert!(matches!(
                SolutionService::checked_notation(notation),
                Err(AppError::UnsupportedComplexity(_))
            ));
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_attachment_sequence_tracks_best() {
        let pool = create_test_pool().await;
        let problem_id = new_problem(&pool, "Two Sum").await;

        let problem = ProblemService::get_problem(&pool, &problem_id).await.unwrap();
        assert_eq!(problem.best_time_complexity, "NA");
        assert_eq!(problem.best_space_complexity, "NA");

        let first = SolutionService::create_solution(&pool, attach(problem_id, "O(n^2)", "O(n)"))
            .await
            .unwrap();
        assert!(first.best_changed);
        assert_eq!(first.best_complexity, BestComplexity::new("O(n^2)", "O(n)"));
        assert_eq!(first.solution.language, "python");

        let second =
            SolutionService::create_solution(&pool, attach(problem_id, "O(n log(n))", "O(1)"))
                .await
                .unwrap();
        assert!(second.best_changed);
        assert_eq!(second.best_complexity, BestComplexity::new("O(nlog(n))", "O(1)"));
        assert_eq!(second.solution.time_complexity, "O(nlog(n))");

        // Slower time loses even with better space
        let third = SolutionService::create_solution(&pool, attach(problem_id, "O(n^3)", "O(1)"))
            .await
            .unwrap();
        assert!(!third.best_changed);

        let problem = ProblemService::get_problem(&pool, &problem_id).await.unwrap();
        assert_eq!(problem.best_time_complexity, "O(nlog(n))");
        assert_eq!(problem.best_space_complexity, "O(1)");
        assert_eq!(problem.solutions.len(), 3);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_zero_padded_degree_is_stored_canonically() {
        let pool = create_test_pool().await;
        let problem_id = new_problem(&pool, "Matrix Chain").await;

        let first = SolutionService::create_solution(&pool, attach(problem_id, "O(n^02)", "O(1)"))
            .await
            .unwrap();
        assert_eq!(first.solution.time_complexity, "O(n^2)");

        let second = SolutionService::create_solution(&pool, attach(problem_id, "O(n^2)", "O(n^3)"))
            .await
            .unwrap();
        assert!(!second.best_changed);
        assert_eq!(second.best_complexity, BestComplexity::new("O(n^2)", "O(1)"));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_malformed_notation_stores_nothing() {
        let pool = create_test_pool().await;
        let problem_id = new_problem(&pool, "Rotate Array").await;

        let err = SolutionService::create_solution(&pool, attach(problem_id, "O(m)", "O(1)"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedComplexity(_)));

        let problem = ProblemService::get_problem(&pool, &problem_id).await.unwrap();
        assert_eq!(problem.best_time_complexity, "NA");
        assert!(problem.solutions.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_unknown_problem_is_not_found() {
        let pool = create_test_pool().await;

        let err = SolutionService::create_solution(&pool, attach(Uuid::new_v4(), "O(n)", "O(1)"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_delete_and_edit_recompute_best() {
        let pool = create_test_pool().await;
        let problem_id = new_problem(&pool, "Merge Intervals").await;

        let slow = SolutionService::create_solution(&pool, attach(problem_id, "O(n^2)", "O(1)"))
            .await
            .unwrap();
        let fast = SolutionService::create_solution(&pool, attach(problem_id, "O(nlog(n))", "O(n)"))
            .await
            .unwrap();
        assert_eq!(fast.best_complexity, BestComplexity::new("O(nlog(n))", "O(n)"));

        SolutionService::delete_solution(&pool, &fast.solution.id)
            .await
            .unwrap();
        let problem = ProblemService::get_problem(&pool, &problem_id).await.unwrap();
        assert_eq!(problem.best_time_complexity, "O(n^2)");
        assert_eq!(problem.best_space_complexity, "O(1)");

        let edited = SolutionService::update_solution(
            &pool,
            &slow.solution.id,
            UpdateSolutionRequest {
                name: None,
                description: None,
                language: None,
                code: None,
                time_complexity: Some("O(n)".to_string()),
                space_complexity: None,
            },
        )
        .await
        .unwrap();
        assert!(edited.best_changed);
        assert_eq!(edited.best_complexity, BestComplexity::new("O(n)", "O(1)"));

        SolutionService::delete_solution(&pool, &slow.solution.id)
            .await
            .unwrap();
        let problem = ProblemService::get_problem(&pool, &problem_id).await.unwrap();
        assert_eq!(problem.best_time_complexity, "NA");
        assert_eq!(problem.best_space_complexity, "NA");
    }
}
