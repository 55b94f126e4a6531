//! Page/per-page query handling shared by list endpoints

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
};

/// Resolved 1-based page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// Apply defaults and bounds to raw query values.
    ///
    /// `per_page` is capped at [`MAX_PAGE_SIZE`]; zero for either value is rejected.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> AppResult<Self> {
        let page = page.unwrap_or(1);
        let per_page = per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::InvalidInput("page must be at least 1".to_string()));
        }
        if per_page == 0 {
            return Err(AppError::InvalidInput(
                "per_page must be at least 1".to_string(),
            ));
        }

        Ok(Self { page, per_page })
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}
