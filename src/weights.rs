//! Weight vector validation and parsing

use crate::error::{GeneratorError, Result};

/// Largest input count that can be enumerated
///
/// Row indices are `u64`, so `2^n` must stay representable.
pub const MAX_INPUTS: usize = 63;

/// The 16-input reference weight vector from the SAC study
pub const REFERENCE_WEIGHTS: [i64; 16] = [10, -1, 3, -5, 8, -2, 5, -1, -3, 0, 2, 4, -10, 1, -3, 5];

/// Check that `weights` describes a function of exactly `n` inputs
///
/// A zero or oversized `n` and an empty weight vector are rejected as
/// [`GeneratorError::InvalidInput`]. A length disagreement is
/// [`GeneratorError::DimensionMismatch`].
pub fn validate_dimensions(weights: &[i64], n: usize) -> Result<()> {
    if n == 0 {
        return Err(GeneratorError::invalid_input(
            "input count must be at least 1",
        ));
    }
    if weights.is_empty() {
        return Err(GeneratorError::invalid_input("weight vector is empty"));
    }
    if n > MAX_INPUTS {
        return Err(GeneratorError::invalid_input(format!(
            "input count {} exceeds the maximum of {}",
            n, MAX_INPUTS
        )));
    }
    if weights.len() != n {
        return Err(GeneratorError::DimensionMismatch {
            expected: n,
            actual: weights.len(),
        });
    }
    Ok(())
}

/// Parse a list of integer weights
///
/// Accepts commas and/or whitespace as separators, and optional surrounding
/// brackets, so `"10,-1,3"`, `"10 -1 3"` and `"[10, -1, 3]"` are equivalent.
pub fn parse_weights(text: &str) -> Result<Vec<i64>> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let weights = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                GeneratorError::invalid_input(format!("'{}' is not an integer weight", token))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if weights.is_empty() {
        return Err(GeneratorError::invalid_input("weight vector is empty"));
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_matching_length() {
        assert!(validate_dimensions(&[1, -2, 3], 3).is_ok());
    }

    #[test]
    fn test_validate_zero_inputs() {
        let err = validate_dimensions(&[1], 0).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidInput { .. }));
    }

    #[test]
    fn test_validate_empty_weights() {
        let err = validate_dimensions(&[], 2).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidInput { .. }));
    }

    #[test]
    fn test_validate_length_mismatch() {
        let err = validate_dimensions(&[1, 2], 3).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_validate_too_many_inputs() {
        let weights = vec![1; MAX_INPUTS + 1];
        let err = validate_dimensions(&weights, MAX_INPUTS + 1).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidInput { .. }));
    }

    #[test]
    fn test_parse_weights_separators() {
        assert_eq!(parse_weights("10,-1,3,-5").unwrap(), vec![10, -1, 3, -5]);
        assert_eq!(parse_weights(" 10 -1\t3 ").unwrap(), vec![10, -1, 3]);
        assert_eq!(parse_weights("[10, -1, 3]").unwrap(), vec![10, -1, 3]);
    }

    #[test]
    fn test_parse_weights_rejects_garbage() {
        let err = parse_weights("1, two, 3").unwrap_err();
        assert!(err.to_string().contains("'two'"));
    }

    #[test]
    fn test_parse_weights_rejects_empty() {
        assert!(parse_weights("  ").is_err());
        assert!(parse_weights("[]").is_err());
    }

    #[test]
    fn test_reference_weights_are_valid() {
        assert!(validate_dimensions(&REFERENCE_WEIGHTS, REFERENCE_WEIGHTS.len()).is_ok());
    }
}
