use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter some numbers")]
    Empty,

    #[error("Invalid number format. Please use only numbers separated by commas.")]
    Malformed,
}

/// Validate raw input before any network call.
///
/// Mirrors the service's parsing grammar token for token, so input the
/// client accepts is input the service accepts. Intentionally independent of
/// `crate::core`: the client must reject known-bad input with no service-side
/// code in the loop.
pub fn validate_input(raw: &str) -> Result<Vec<f64>, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut numbers = Vec::new();
    for token in raw.split(',') {
        let value: f64 = token
            .trim()
            .parse()
            .map_err(|_| ValidationError::Malformed)?;
        if !value.is_finite() {
            return Err(ValidationError::Malformed);
        }
        numbers.push(value);
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_lists() {
        assert_eq!(validate_input("1,2,3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(validate_input(" -1.5 , 0 ").unwrap(), vec![-1.5, 0.0]);
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(validate_input(""), Err(ValidationError::Empty));
        assert_eq!(validate_input("  "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert_eq!(validate_input("1,2,x"), Err(ValidationError::Malformed));
        assert_eq!(validate_input("1,,2"), Err(ValidationError::Malformed));
        assert_eq!(validate_input("abc"), Err(ValidationError::Malformed));
        assert_eq!(validate_input("inf"), Err(ValidationError::Malformed));
    }

    #[test]
    fn test_parity_with_service_grammar() {
        // The client must accept and reject exactly the strings the service does.
        let inputs = [
            "",
            "   ",
            "1,2,3",
            "1,2,x",
            "1,,2",
            "3.14,-2.5,0,1.5,-0.5",
            "-0.0",
            "inf",
            "NaN",
            " 7 ",
        ];
        for input in inputs {
            let client_side = validate_input(input);
            let service_side = crate::core::parse_numbers(input);
            assert_eq!(
                client_side.is_ok(),
                service_side.is_ok(),
                "validation parity broken for {:?}",
                input
            );
            if let (Ok(a), Ok(b)) = (client_side, service_side) {
                assert_eq!(a, b);
            }
        }
    }
}
