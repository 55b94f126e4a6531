//! Input validation utilities

use crate::error::{AppError, AppResult};

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize a required text field, rejecting values that end up empty
pub fn required_text(field: &str, value: &str) -> AppResult<String> {
    let sanitized = sanitize_string(value);
    if sanitized.is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(sanitized)
}

/// Language identifiers are free-form but limited to a short token
/// such as `python`, `c++` or `c#`.
pub fn validate_language(language: &str) -> Result<(), validator::ValidationError> {
    let valid = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_language"))
    }
}
