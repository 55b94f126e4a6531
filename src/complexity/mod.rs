//! Complexity comparison engine
//!
//! Parses big-O notation strings into a comparable `(class, magnitude)` pair
//! and decides which of two notations is asymptotically better. The
//! solution-attachment workflow uses [`compare_approaches`] to keep a
//! problem's best recorded time/space complexity up to date.
//!
//! Everything here is pure and synchronous: no I/O, no shared state.

mod comparator;
mod parser;

pub use comparator::{better_complexity, compare_approaches, fold_best, BestComplexity};
pub use parser::{parse_complexity, ComplexityClass, ParsedComplexity};

/// Sentinel stored on a problem that has no recorded complexity yet
pub const NA_SENTINEL: &str = "NA";

/// Errors produced by the complexity engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplexityError {
    #[error("Unsupported complexity format: {0:?}")]
    UnsupportedFormat(String),
}

/// Whether the notation is the "no complexity recorded" sentinel
pub fn is_sentinel(notation: &str) -> bool {
    normalize(notation) == NA_SENTINEL
}

/// Remove all whitespace; the form notations are compared and stored in
pub fn normalize(notation: &str) -> String {
    notation.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" O( n log (n) )\t"), "O(nlog(n))");
        assert_eq!(normalize("O(1)"), "O(1)");
    }

    #[test]
    fn test_is_sentinel() {
        assert!(is_sentinel("NA"));
        assert!(is_sentinel(" N A "));
        assert!(!is_sentinel("na"));
        assert!(!is_sentinel("O(1)"));
    }
}
