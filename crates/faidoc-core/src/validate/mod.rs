//! Field validation against template field definitions.

pub(crate) mod patterns;

use serde::Serialize;

use crate::models::template::{FieldDefinition, FieldType};
use patterns::{CURRENCY_FORMAT, DATE_FORMAT, EMAIL_FORMAT, NUMBER_FORMAT, SSN_FORMAT};

/// Outcome of validating a single value against a field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    /// Whether the value is acceptable.
    pub valid: bool,

    /// Human-readable reason when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldValidation {
    /// An accepting result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A rejecting result with a reason.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Validate a candidate value against a field definition.
///
/// Rules are evaluated in order and the first violation wins: required/empty
/// check, then the type-specific format check, then the field's supplemental
/// pattern (only reached once the type check passes). Total over all string
/// inputs; never panics or errors.
pub fn validate_field(field: &FieldDefinition, value: &str) -> FieldValidation {
    if value.is_empty() {
        if field.required {
            return FieldValidation::invalid(format!("{} is required", field.label));
        }
        // Absent and optional: vacuously valid, nothing more to check.
        return FieldValidation::ok();
    }

    if let Some(error) = check_type(field.field_type, value) {
        return FieldValidation::invalid(error);
    }

    if let Some(pattern) = &field.pattern {
        if !pattern.is_match(value) {
            return FieldValidation::invalid(format!("Invalid {} format", field.label));
        }
    }

    FieldValidation::ok()
}

/// Type-specific format check. Returns the error message on violation.
fn check_type(field_type: FieldType, value: &str) -> Option<&'static str> {
    match field_type {
        FieldType::Ssn => {
            (!SSN_FORMAT.is_match(value)).then_some("Invalid SSN format (XXX-XX-XXXX)")
        }
        FieldType::Gpa => match value.parse::<f64>() {
            Ok(gpa) if gpa.is_finite() && (0.0..=4.0).contains(&gpa) => None,
            _ => Some("GPA must be between 0.00 and 4.00"),
        },
        FieldType::Currency => {
            let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            (!CURRENCY_FORMAT.is_match(&compact)).then_some("Invalid currency format")
        }
        FieldType::Number => (!NUMBER_FORMAT.is_match(value)).then_some("Must be a valid number"),
        FieldType::Date => {
            (!DATE_FORMAT.is_match(value)).then_some("Invalid date format (MM/DD/YYYY)")
        }
        FieldType::Email => (!EMAIL_FORMAT.is_match(value)).then_some("Invalid email format"),
        FieldType::Text => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(field_type: FieldType, required: bool) -> FieldDefinition {
        FieldDefinition::new("f", "Field", field_type, required)
    }

    #[test]
    fn test_required_empty_value() {
        let result = validate_field(&field(FieldType::Text, true), "");
        assert_eq!(result, FieldValidation::invalid("Field is required"));
    }

    #[test]
    fn test_optional_empty_value_is_valid() {
        // Vacuously valid: the type check is not reached.
        let result = validate_field(&field(FieldType::Ssn, false), "");
        assert_eq!(result, FieldValidation::ok());
    }

    #[test]
    fn test_ssn() {
        let f = field(FieldType::Ssn, true);
        assert!(validate_field(&f, "123-45-6789").valid);

        let result = validate_field(&f, "123-456-789");
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid SSN format (XXX-XX-XXXX)")
        );
        assert!(!validate_field(&f, "123456789").valid);
        assert!(!validate_field(&f, "123-45-67890").valid);
    }

    #[test]
    fn test_gpa_boundaries() {
        let f = field(FieldType::Gpa, true);
        assert!(validate_field(&f, "0.00").valid);
        assert!(validate_field(&f, "4.00").valid);
        assert!(validate_field(&f, "3.72").valid);

        assert!(!validate_field(&f, "4.01").valid);
        assert!(!validate_field(&f, "-0.01").valid);
        assert!(!validate_field(&f, "abc").valid);
        assert!(!validate_field(&f, "inf").valid);
        assert_eq!(
            validate_field(&f, "5.0").error.as_deref(),
            Some("GPA must be between 0.00 and 4.00")
        );
    }

    #[test]
    fn test_currency() {
        let f = field(FieldType::Currency, true);
        assert!(validate_field(&f, "$5,000").valid);
        assert!(validate_field(&f, "5000").valid);
        assert!(validate_field(&f, "$1,234.56").valid);
        assert!(validate_field(&f, "100.5").valid);
        // Internal whitespace is stripped before the format check.
        assert!(validate_field(&f, "$ 5,000").valid);

        assert!(!validate_field(&f, "five dollars").valid);
        assert!(!validate_field(&f, "$1.234").valid);
        assert_eq!(
            validate_field(&f, "USD 100").error.as_deref(),
            Some("Invalid currency format")
        );
    }

    #[test]
    fn test_number() {
        let f = field(FieldType::Number, true);
        assert!(validate_field(&f, "4").valid);
        assert!(validate_field(&f, "2023").valid);

        assert!(!validate_field(&f, "-5").valid);
        assert!(!validate_field(&f, "12.5").valid);
        assert!(!validate_field(&f, "1,000").valid);
        assert_eq!(
            validate_field(&f, "four").error.as_deref(),
            Some("Must be a valid number")
        );
    }

    #[test]
    fn test_date_is_format_only() {
        let f = field(FieldType::Date, true);
        assert!(validate_field(&f, "1/5/2024").valid);
        assert!(validate_field(&f, "01/15/2024").valid);
        // No calendar validity check.
        assert!(validate_field(&f, "13/40/2024").valid);

        assert!(!validate_field(&f, "2024-01-15").valid);
        assert!(!validate_field(&f, "1/5/24").valid);
        assert_eq!(
            validate_field(&f, "January 5, 2024").error.as_deref(),
            Some("Invalid date format (MM/DD/YYYY)")
        );
    }

    #[test]
    fn test_email() {
        let f = field(FieldType::Email, true);
        assert!(validate_field(&f, "student@university.edu").valid);

        assert!(!validate_field(&f, "student@university").valid);
        assert!(!validate_field(&f, "not an email").valid);
        assert!(!validate_field(&f, "a@b@c.edu").valid);
    }

    #[test]
    fn test_text_has_no_intrinsic_check() {
        let f = field(FieldType::Text, true);
        assert!(validate_field(&f, "anything at all !@#").valid);
    }

    #[test]
    fn test_pattern_runs_after_type_check() {
        let f = FieldDefinition::new("gpa", "GPA", FieldType::Gpa, true)
            .with_pattern(r"^[0-4]\.[0-9]{2}$");

        // In range but fails the supplemental two-decimals pattern.
        let result = validate_field(&f, "3.5");
        assert_eq!(result.error.as_deref(), Some("Invalid GPA format"));

        // Out of range: the type check fires first, pattern never runs.
        let result = validate_field(&f, "9.99");
        assert_eq!(
            result.error.as_deref(),
            Some("GPA must be between 0.00 and 4.00")
        );

        assert!(validate_field(&f, "3.45").valid);
    }

    #[test]
    fn test_idempotent() {
        let f = field(FieldType::Currency, true);
        assert_eq!(validate_field(&f, "$72,000"), validate_field(&f, "$72,000"));
        assert_eq!(validate_field(&f, "bogus"), validate_field(&f, "bogus"));
    }
}
