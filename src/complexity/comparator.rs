//! Ranking and selection of the better complexity

use std::cmp::Ordering;

use serde::Serialize;

use super::{is_sentinel, parse_complexity, ComplexityError, ParsedComplexity, NA_SENTINEL};

/// Best known time/space complexity pair recorded on a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestComplexity {
    pub time: String,
    pub space: String,
}

impl BestComplexity {
    pub fn new(time: impl Into<String>, space: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            space: space.into(),
        }
    }

    /// The pair a problem starts with before any solution is attached
    pub fn unrecorded() -> Self {
        Self::new(NA_SENTINEL, NA_SENTINEL)
    }
}

/// Parse an operand, mapping the sentinel to `None`
fn parse_operand(notation: &str) -> Result<Option<ParsedComplexity>, ComplexityError> {
    if is_sentinel(notation) {
        Ok(None)
    } else {
        parse_complexity(notation).map(Some)
    }
}

/// Lower rank wins; within a class the smaller magnitude wins.
fn order(left: &ParsedComplexity, right: &ParsedComplexity) -> Ordering {
    left.class
        .rank()
        .cmp(&right.class.rank())
        .then_with(|| left.magnitude.cmp(&right.magnitude))
}

/// Return whichever of `a` and `b` is asymptotically better.
///
/// The sentinel loses to any parseable notation. Exact ties go to `a`.
/// Every non-sentinel operand is parsed, so malformed input always fails
/// even when the other side is the sentinel.
pub fn better_complexity<'a>(a: &'a str, b: &'a str) -> Result<&'a str, ComplexityError> {
    let left = parse_operand(a)?;
    let right = parse_operand(b)?;

    let winner = match (left, right) {
        (None, None) => a,
        (None, Some(_)) => b,
        (Some(_), None) => a,
        (Some(l), Some(r)) => match order(&l, &r) {
            Ordering::Greater => b,
            Ordering::Less | Ordering::Equal => a,
        },
    };

    Ok(winner)
}

/// Decide the problem's best pair after a new solution is attached.
///
/// Time takes priority. When the two time notations are textually equal the
/// space notations are compared on their own; otherwise the space travels
/// with whichever side supplied the winning time.
pub fn compare_approaches(
    new_time: &str,
    new_space: &str,
    best_time: &str,
    best_space: &str,
) -> Result<BestComplexity, ComplexityError> {
    // Space operands are not always compared below but must still be valid.
    parse_operand(new_space)?;
    parse_operand(best_space)?;

    let winner_time = better_complexity(new_time, best_time)?;

    if new_time == best_time {
        let winner_space = better_complexity(new_space, best_space)?;
        return Ok(BestComplexity::new(winner_time, winner_space));
    }

    let winner_space = if winner_time == new_time {
        new_space
    } else {
        best_space
    };

    Ok(BestComplexity::new(winner_time, winner_space))
}

/// Replay [`compare_approaches`] over solutions in attachment order,
/// starting from [`BestComplexity::unrecorded`].
pub fn fold_best<'a, I>(solutions: I) -> Result<BestComplexity, ComplexityError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    solutions
        .into_iter()
        .try_fold(BestComplexity::unrecorded(), |best, (time, space)| {
            compare_approaches(time, space, &best.time, &best.space)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPORTED: &[&str] = &[
        "O(1)",
        "O(log(n))",
        "O(nlog(n))",
        "O(n)",
        "O(n^2)",
        "O(2^n)",
        "O(n!)",
    ];

    #[test]
    fn test_lower_rank_wins_in_either_order() {
        for &a in SUPPORTED {
            for &b in SUPPORTED {
                let pa = parse_complexity(a).unwrap();
                let pb = parse_complexity(b).unwrap();
                if pa.class == pb.class {
                    continue;
                }
                let expected = if pa.class.rank() < pb.class.rank() { a } else { b };
                assert_eq!(better_complexity(a, b).unwrap(), expected, "{a} vs {b}");
                assert_eq!(better_complexity(b, a).unwrap(), expected, "{b} vs {a}");
            }
        }
    }

    #[test]
    fn test_linearithmic_beats_linear() {
        assert_eq!(better_complexity("O(n)", "O(nlog(n))").unwrap(), "O(nlog(n))");
    }

    #[test]
    fn test_magnitude_tie_break() {
        assert_eq!(better_complexity("O(n^2)", "O(n^3)").unwrap(), "O(n^2)");
        assert_eq!(better_complexity("O(n^3)", "O(n^2)").unwrap(), "O(n^2)");
    }

    #[test]
    fn test_equal_magnitude_prefers_first_argument() {
        assert_eq!(better_complexity("O(n^2)", "O( n^2 )").unwrap(), "O(n^2)");
        assert_eq!(better_complexity("O( n^2 )", "O(n^2)").unwrap(), "O( n^2 )");
    }

    #[test]
    fn test_sentinel_dominance() {
        for notation in SUPPORTED {
            assert_eq!(better_complexity("NA", notation).unwrap(), *notation);
            assert_eq!(better_complexity(notation, "NA").unwrap(), *notation);
        }
    }

    #[test]
    fn test_idempotence() {
        for notation in SUPPORTED.iter().chain(&["NA"]) {
            assert_eq!(better_complexity(notation, notation).unwrap(), *notation);
        }
    }

    #[test]
    fn test_malformed_operand_fails_even_against_sentinel() {
        assert_eq!(
            better_complexity("O(m)", "NA"),
            Err(ComplexityError::UnsupportedFormat("O(m)".to_string()))
        );
        assert_eq!(
            better_complexity("O(n)", "fast"),
            Err(ComplexityError::UnsupportedFormat("fast".to_string()))
        );
        assert!(better_complexity("O(m)", "O(m)").is_err());
    }

    #[test]
    fn test_new_time_wins_and_carries_its_space() {
        let best = compare_approaches("O(n)", "O(n^2)", "O(n^2)", "O(1)").unwrap();
        assert_eq!(best, BestComplexity::new("O(n)", "O(n^2)"));
    }

    #[test]
    fn test_recorded_time_wins_and_keeps_its_space() {
        let best = compare_approaches("O(n^2)", "O(1)", "O(n)", "O(n)").unwrap();
        assert_eq!(best, BestComplexity::new("O(n)", "O(n)"));
    }

    #[test]
    fn test_time_tie_breaks_on_space() {
        let best = compare_approaches("O(n)", "O(1)", "O(n)", "O(n^2)").unwrap();
        assert_eq!(best, BestComplexity::new("O(n)", "O(1)"));

        let best = compare_approaches("O(n)", "O(n^2)", "O(n)", "O(1)").unwrap();
        assert_eq!(best, BestComplexity::new("O(n)", "O(1)"));
    }

    #[test]
    fn test_attachment_sequence() {
        let start = BestComplexity::unrecorded();

        let first = compare_approaches("O(n^2)", "O(n)", &start.time, &start.space).unwrap();
        assert_eq!(first, BestComplexity::new("O(n^2)", "O(n)"));

        let second = compare_approaches("O(nlog(n))", "O(1)", &first.time, &first.space).unwrap();
        assert_eq!(second, BestComplexity::new("O(nlog(n))", "O(1)"));
    }

    /// Malformed input must surface as an error, never as a stored "winner".
    #[test]
    fn test_malformed_input_is_not_returned_as_a_winner() {
        let result = compare_approaches("O(m)", "O(1)", "NA", "NA");
        assert_eq!(
            result,
            Err(ComplexityError::UnsupportedFormat("O(m)".to_string()))
        );

        let result = compare_approaches("O(n)", "O(k)", "O(n^2)", "O(1)");
        assert_eq!(
            result,
            Err(ComplexityError::UnsupportedFormat("O(k)".to_string()))
        );
    }

    #[test]
    fn test_fold_best() {
        let best = fold_best([("O(n^2)", "O(n)"), ("O(nlog(n))", "O(1)"), ("O(n!)", "O(1)")])
            .unwrap();
        assert_eq!(best, BestComplexity::new("O(nlog(n))", "O(1)"));

        assert_eq!(
            fold_best(Vec::<(&str, &str)>::new()).unwrap(),
            BestComplexity::unrecorded()
        );
        assert!(fold_best([("O(n)", "O(1)"), ("bogus", "O(1)")]).is_err());
    }
}
