//! Document template and field definition models.

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

/// The kind of value a field is expected to hold.
///
/// Validation rules are keyed off this enum with an exhaustive match, so
/// adding a new kind is a compile-time decision rather than a silently
/// ignored default case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free text, no intrinsic format check.
    Text,
    /// One or more ASCII digits, no sign or separators.
    Number,
    /// Dollar amount with optional `$`, commas, and cents.
    Currency,
    /// Calendar date written as M/D/YYYY or MM/DD/YYYY.
    Date,
    /// Email address.
    Email,
    /// Social Security Number (XXX-XX-XXXX).
    Ssn,
    /// Grade point average on the 0.00-4.00 scale.
    Gpa,
}

impl FieldType {
    /// Short lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Currency => "currency",
            FieldType::Date => "date",
            FieldType::Email => "email",
            FieldType::Ssn => "ssn",
            FieldType::Gpa => "gpa",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one extractable datum within a document template.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDefinition {
    /// Stable identifier, unique within the owning template.
    pub name: String,

    /// Human-readable display name.
    pub label: String,

    /// Field kind governing validation rules.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether the field must be present in an extraction.
    pub required: bool,

    /// Additional pattern checked after the type-specific check.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_pattern"
    )]
    pub pattern: Option<Regex>,

    /// Documentation string, not used in logic.
    pub description: String,
}

impl FieldDefinition {
    /// Create a new field definition with no extra pattern or description.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required,
            pattern: None,
            description: String::new(),
        }
    }

    /// Attach a supplemental regex pattern.
    ///
    /// The pattern supplements the type-specific check, it does not replace
    /// it. Panics on an invalid regex; template patterns are fixed literals.
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(Regex::new(pattern).expect("field pattern must be a valid regex"));
        self
    }

    /// Attach a documentation string.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

fn serialize_pattern<S>(pattern: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match pattern {
        Some(re) => serializer.serialize_str(re.as_str()),
        None => serializer.serialize_none(),
    }
}

/// Describes one recognized document kind.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTemplate {
    /// Unique key across the registry (e.g. `fafsa`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Document type string surfaced to callers as the detected type.
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Display description.
    pub description: String,

    /// Lowercase substrings used for filename detection, in match order.
    pub keywords: Vec<String>,

    /// Expected fields in display order.
    pub fields: Vec<FieldDefinition>,
}

impl DocumentTemplate {
    /// Create an empty template with display metadata only.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        doc_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            doc_type: doc_type.into(),
            description: description.into(),
            keywords: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Set the detection keywords. A template with no keywords can never be
    /// detected, only fetched by id.
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Set the ordered field list.
    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    /// Look up a field definition by its stable name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}
