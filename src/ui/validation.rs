// src/ui/validation.rs

/// Validation state of the text currently held by a cell widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ValidationState {
    #[default]
    Empty,
    Valid,
    Invalid,
}

/// Classifies cell text as a sensor reading. Returns the validation state
/// and the parsed value when the text is a finite number.
///
/// Non-finite input ("NaN", "inf") is rejected: the grid invariant is that
/// every cell holds a finite value.
pub(crate) fn validate_numeric_cell(current_cell_string: &str) -> (ValidationState, Option<f64>) {
    let trimmed = current_cell_string.trim();
    if trimmed.is_empty() {
        return (ValidationState::Empty, None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => (ValidationState::Valid, Some(value)),
        _ => (ValidationState::Invalid, None),
    }
}

/// Parses one of the row/column index fields of the interpolate controls.
pub(crate) fn parse_cell_index(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_is_valid() {
        assert_eq!(
            validate_numeric_cell("42"),
            (ValidationState::Valid, Some(42.0))
        );
        assert_eq!(
            validate_numeric_cell("-3.5"),
            (ValidationState::Valid, Some(-3.5))
        );
        assert_eq!(
            validate_numeric_cell(" 7.25 "),
            (ValidationState::Valid, Some(7.25))
        );
    }

    #[test]
    fn test_garbage_text_is_invalid() {
        assert_eq!(validate_numeric_cell("abc").0, ValidationState::Invalid);
        assert_eq!(validate_numeric_cell("12x").0, ValidationState::Invalid);
        assert_eq!(validate_numeric_cell("1.2.3").0, ValidationState::Invalid);
    }

    #[test]
    fn test_non_finite_text_is_invalid() {
        assert_eq!(validate_numeric_cell("NaN").0, ValidationState::Invalid);
        assert_eq!(validate_numeric_cell("inf").0, ValidationState::Invalid);
        assert_eq!(validate_numeric_cell("-inf").0, ValidationState::Invalid);
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert_eq!(validate_numeric_cell(""), (ValidationState::Empty, None));
        assert_eq!(validate_numeric_cell("   "), (ValidationState::Empty, None));
    }

    #[test]
    fn test_parse_cell_index() {
        assert_eq!(parse_cell_index("3"), Some(3));
        assert_eq!(parse_cell_index(" 0 "), Some(0));
        assert_eq!(parse_cell_index("-1"), None);
        assert_eq!(parse_cell_index("two"), None);
        assert_eq!(parse_cell_index(""), None);
    }
}
