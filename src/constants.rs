//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default allowed CORS origin (the catalog front-end dev server)
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum accepted request body size in bytes (1 MB)
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 100;

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum length of problem statement, constraints and examples
pub const MAX_PROBLEM_TEXT_LENGTH: u64 = 65535;

/// Maximum solution name length
pub const MAX_SOLUTION_NAME_LENGTH: u64 = 256;

/// Maximum solution description length
pub const MAX_SOLUTION_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum programming language identifier length
pub const MAX_LANGUAGE_LENGTH: u64 = 32;

/// Maximum solution source size in bytes (64 KB)
pub const MAX_SOLUTION_CODE_LENGTH: u64 = 65536;

/// Maximum length of a complexity notation string
pub const MAX_COMPLEXITY_LENGTH: u64 = 64;

/// Maximum industry label length for real-world examples
pub const MAX_INDUSTRY_LENGTH: u64 = 128;

/// Maximum length of real-world example free text fields
pub const MAX_EXAMPLE_TEXT_LENGTH: u64 = 8192;
