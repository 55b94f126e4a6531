//! Big-O notation parser

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use super::{normalize, ComplexityError};

/// Asymptotic growth class, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linearithmic,
    Linear,
    Polynomial,
    Exponential,
    Factorial,
}

impl ComplexityClass {
    /// Position in the total order; lower is better
    pub fn rank(&self) -> u8 {
        match self {
            Self::Constant => 0,
            Self::Logarithmic => 1,
            Self::Linearithmic => 2,
            Self::Linear => 3,
            Self::Polynomial => 4,
            Self::Exponential => 5,
            Self::Factorial => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Logarithmic => "logarithmic",
            Self::Linearithmic => "linearithmic",
            Self::Linear => "linear",
            Self::Polynomial => "polynomial",
            Self::Exponential => "exponential",
            Self::Factorial => "factorial",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notation reduced to its growth class and same-class tie-breaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedComplexity {
    pub class: ComplexityClass,
    /// Polynomial degree or exponential base. `None` for factorial.
    pub magnitude: Option<u32>,
}

impl ParsedComplexity {
    /// Canonical spelling; equal parses always render the same string
    pub fn notation(&self) -> String {
        match self.class {
            ComplexityClass::Polynomial => {
                format!("O(n^{})", self.magnitude.unwrap_or_default())
            }
            ComplexityClass::Constant => "O(1)".to_string(),
            ComplexityClass::Logarithmic => "O(log(n))".to_string(),
            ComplexityClass::Linearithmic => "O(nlog(n))".to_string(),
            ComplexityClass::Linear => "O(n)".to_string(),
            ComplexityClass::Exponential => "O(2^n)".to_string(),
            ComplexityClass::Factorial => "O(n!)".to_string(),
        }
    }
}

enum Magnitude {
    Fixed(u32),
    /// Taken from the first capture group
    Captured,
    Unused,
}

struct Rule {
    pattern: Regex,
    class: ComplexityClass,
    magnitude: Magnitude,
}

impl Rule {
    fn new(pattern: &str, class: ComplexityClass, magnitude: Magnitude) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("complexity rule pattern must compile"),
            class,
            magnitude,
        }
    }

    fn extract(&self, captures: &Captures<'_>) -> Option<Option<u32>> {
        match self.magnitude {
            Magnitude::Fixed(value) => Some(Some(value)),
            Magnitude::Unused => Some(None),
            Magnitude::Captured => captures
                .get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .map(Some),
        }
    }
}

// Order matters: `O(n)` and `O(1)` must come after the specific forms.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    use ComplexityClass::*;

    vec![
        Rule::new(r"^O\(n\^([0-9]+)\)$", Polynomial, Magnitude::Captured),
        Rule::new(r"^O\(log\(n\)\)$", Logarithmic, Magnitude::Fixed(1)),
        Rule::new(r"^O\(nlog\(n\)\)$", Linearithmic, Magnitude::Fixed(1)),
        Rule::new(r"^O\(n!\)$", Factorial, Magnitude::Unused),
        Rule::new(r"^O\(2\^n\)$", Exponential, Magnitude::Fixed(2)),
        Rule::new(r"^O\(n\)$", Linear, Magnitude::Fixed(1)),
        Rule::new(r"^O\(1\)$", Constant, Magnitude::Fixed(0)),
    ]
});

/// Parse a big-O notation string.
///
/// Whitespace is ignored. The first matching rule wins; anything outside the
/// supported grammar fails with [`ComplexityError::UnsupportedFormat`].
pub fn parse_complexity(notation: &str) -> Result<ParsedComplexity, ComplexityError> {
    let compact = normalize(notation);

    for rule in RULES.iter() {
        let Some(captures) = rule.pattern.captures(&compact) else {
            continue;
        };

        // A degree too large for u32 is rejected rather than clamped.
        let magnitude = rule
            .extract(&captures)
            .ok_or_else(|| ComplexityError::UnsupportedFormat(notation.to_string()))?;

        return Ok(ParsedComplexity {
            class: rule.class,
            magnitude,
        });
    }

    Err(ComplexityError::UnsupportedFormat(notation.to_string()))
}
