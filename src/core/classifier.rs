use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Missing numbers parameter")]
    MissingInput,

    #[error("Invalid number format")]
    InvalidFormat,
}

/// Per-class counts for one classified input list.
///
/// Invariant: `positive + negative + zero == total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub positive: usize,
    pub negative: usize,
    pub zero: usize,
    pub total: usize,
}

/// Result of classifying one input string: the parsed list plus its counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub numbers: Vec<f64>,
    pub counts: Counts,
}

/// Parse a comma-separated list of numbers.
///
/// All-or-nothing: any token that fails to parse as a finite `f64` rejects
/// the whole input. Non-finite values (`inf`, `NaN`) are rejected even though
/// `f64::from_str` accepts them, since the JSON wire format cannot carry them.
pub fn parse_numbers(raw: &str) -> Result<Vec<f64>, ClassifyError> {
    if raw.trim().is_empty() {
        return Err(ClassifyError::MissingInput);
    }

    let mut numbers = Vec::new();
    for token in raw.split(',') {
        let value: f64 = token
            .trim()
            .parse()
            .map_err(|_| ClassifyError::InvalidFormat)?;
        if !value.is_finite() {
            return Err(ClassifyError::InvalidFormat);
        }
        numbers.push(value);
    }

    Ok(numbers)
}

/// Classify a comma-separated list of numbers as positive, negative, or zero.
///
/// Exactly zero (including `-0.0`) always counts as zero. Pure function of
/// the input string; no state survives the call.
pub fn classify_numbers(raw: &str) -> Result<Classification, ClassifyError> {
    let numbers = parse_numbers(raw)?;

    let mut counts = Counts {
        positive: 0,
        negative: 0,
        zero: 0,
        total: numbers.len(),
    };

    for &value in &numbers {
        if value > 0.0 {
            counts.positive += 1;
        } else if value < 0.0 {
            counts.negative += 1;
        } else {
            counts.zero += 1;
        }
    }

    Ok(Classification { numbers, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mixed_list() {
        let result = classify_numbers("1,2,-3,0,5,-1,0").unwrap();
        assert_eq!(result.counts.positive, 2);
        assert_eq!(result.counts.negative, 2);
        assert_eq!(result.counts.zero, 2);
        assert_eq!(result.counts.total, 7);
    }

    #[test]
    fn test_classify_decimals() {
        let result = classify_numbers("3.14,-2.5,0,1.5,-0.5").unwrap();
        assert_eq!(result.counts.positive, 2);
        assert_eq!(result.counts.negative, 2);
        assert_eq!(result.counts.zero, 1);
        assert_eq!(result.counts.total, 5);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let inputs = ["1", "0", "-1,2,3", "0,0,0", "1.5, -1.5, 0.0, 42"];
        for input in inputs {
            let result = classify_numbers(input).unwrap();
            let c = &result.counts;
            assert_eq!(c.positive + c.negative + c.zero, c.total);
            assert_eq!(c.total, result.numbers.len());
        }
    }

    #[test]
    fn test_negative_zero_counts_as_zero() {
        let result = classify_numbers("-0.0,0.0,0").unwrap();
        assert_eq!(result.counts.zero, 3);
        assert_eq!(result.counts.positive, 0);
        assert_eq!(result.counts.negative, 0);
    }

    #[test]
    fn test_empty_input_is_missing() {
        assert_eq!(classify_numbers(""), Err(ClassifyError::MissingInput));
        assert_eq!(classify_numbers("   "), Err(ClassifyError::MissingInput));
    }

    #[test]
    fn test_bad_token_rejects_whole_input() {
        assert_eq!(classify_numbers("1,2,x"), Err(ClassifyError::InvalidFormat));
        assert_eq!(classify_numbers("1,,2"), Err(ClassifyError::InvalidFormat));
    }

    #[test]
    fn test_non_finite_tokens_rejected() {
        assert_eq!(classify_numbers("inf"), Err(ClassifyError::InvalidFormat));
        assert_eq!(classify_numbers("1,-inf"), Err(ClassifyError::InvalidFormat));
        assert_eq!(classify_numbers("NaN"), Err(ClassifyError::InvalidFormat));
    }

    #[test]
    fn test_whitespace_around_tokens_tolerated() {
        let result = classify_numbers(" 1 , -2 ,  0 ").unwrap();
        assert_eq!(result.numbers, vec![1.0, -2.0, 0.0]);
    }
}
