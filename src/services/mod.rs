//! Business logic services

pub mod category_service;
pub mod problem_service;
pub mod real_world_example_service;
pub mod solution_service;

pub use category_service::CategoryService;
pub use problem_service::ProblemService;
pub use real_world_example_service::RealWorldExampleService;
pub use solution_service::SolutionService;
