//! Static sample values backing the extraction simulator.
//!
//! There is no real document parsing; extraction joins a template's field
//! list against this table. Lookups are scoped by (template id, field name)
//! so a field name reused across templates can carry different values.

/// A canned extraction value with its placeholder confidence score.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SampleValue {
    pub value: &'static str,
    /// Confidence score (0-100), fixed per entry.
    pub confidence: u8,
}

const fn sample(value: &'static str, confidence: u8) -> SampleValue {
    SampleValue { value, confidence }
}

/// (template id, field name) -> sample value. Fields absent from the table
/// are reported as missing (if required) or skipped (if optional).
const SAMPLE_VALUES: &[(&str, &str, SampleValue)] = &[
    // FAFSA
    ("fafsa", "studentName", sample("Jane Doe", 96)),
    ("fafsa", "ssn", sample("987-65-4321", 94)),
    ("fafsa", "expectedFamilyContribution", sample("$4,500", 93)),
    ("fafsa", "filingStatus", sample("Single", 95)),
    // Tax Return
    ("taxReturn", "studentName", sample("Jane Doe", 96)),
    ("taxReturn", "ssn", sample("987-65-4321", 94)),
    ("taxReturn", "filingStatus", sample("Head of Household", 97)),
    ("taxReturn", "totalIncome", sample("$72,000", 94)),
    ("taxReturn", "adjustedGrossIncome", sample("$68,500", 92)),
    // Academic Transcript
    ("transcript", "studentName", sample("Jane Doe", 96)),
    ("transcript", "institution", sample("University of New York", 98)),
    ("transcript", "gpa", sample("3.72", 96)),
];

/// Generic fields reported when no template was detected.
pub(crate) const FALLBACK_FIELDS: &[(&str, SampleValue)] = &[
    ("Student Name", sample("Jane Doe", 96)),
    ("SSN", sample("987-65-4321", 94)),
];

/// Look up the sample value for a template field.
pub(crate) fn sample_value(template_id: &str, field_name: &str) -> Option<SampleValue> {
    SAMPLE_VALUES
        .iter()
        .find(|(id, name, _)| *id == template_id && *name == field_name)
        .map(|(_, _, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateRegistry;
    use crate::validate::validate_field;

    #[test]
    fn test_lookup_is_scoped_by_template() {
        assert!(sample_value("transcript", "gpa").is_some());
        assert!(sample_value("fafsa", "gpa").is_none());
        assert!(sample_value("unknown", "studentName").is_none());
    }

    #[test]
    fn test_every_entry_names_a_registered_field() {
        let registry = TemplateRegistry::builtin();
        for (template_id, field_name, _) in SAMPLE_VALUES {
            let template = registry.get(template_id).expect(template_id);
            assert!(
                template.field(field_name).is_some(),
                "{}.{}",
                template_id,
                field_name
            );
        }
    }

    #[test]
    fn test_sample_values_pass_their_field_validators() {
        // The simulator's only issues for the builtin set should be
        // missing-required findings, never format failures.
        let registry = TemplateRegistry::builtin();
        for (template_id, field_name, value) in SAMPLE_VALUES {
            let field = registry.get(template_id).unwrap().field(field_name).unwrap();
            let result = validate_field(field, value.value);
            assert!(result.valid, "{}.{}: {:?}", template_id, field_name, result.error);
        }
    }
}
