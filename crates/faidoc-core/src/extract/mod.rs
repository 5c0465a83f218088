//! Simulated field extraction for detected documents.

mod samples;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::detect::detect_with;
use crate::models::config::ExtractionConfig;
use crate::models::document::ExtractedField;
use crate::models::template::DocumentTemplate;
use crate::templates::TemplateRegistry;
use crate::validate::validate_field;

/// Issue reported when the filename matches no registered template.
const UNRECOGNIZED_ISSUE: &str =
    "Document type not recognized. Please verify extracted data manually.";

/// Result of a single extraction run.
///
/// Created fresh per invocation and owned by the caller; nothing is
/// persisted or cached between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Detected document type (display string), or "Unknown Document".
    pub detected_type: String,

    /// Extracted fields in template declaration order.
    pub fields: Vec<ExtractedField>,

    /// Missing-required and format-invalid findings, interleaved in field
    /// iteration order.
    pub issues: Vec<String>,
}

/// Field extraction simulator.
///
/// Joins a template's field list against the static sample-value table and
/// accumulates data-quality issues. Pure and deterministic: identical
/// inputs always produce identical results.
pub struct DocumentParser<'a> {
    registry: &'a TemplateRegistry,
    validate_fields: bool,
    min_confidence: u8,
}

impl DocumentParser<'static> {
    /// Create a parser over the builtin registry with default settings.
    pub fn new() -> Self {
        Self {
            registry: TemplateRegistry::builtin(),
            validate_fields: true,
            min_confidence: 0,
        }
    }

    /// Create a parser over the builtin registry from a configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_validation(config.validate_fields)
            .with_min_confidence(config.min_confidence)
    }
}

impl Default for DocumentParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DocumentParser<'a> {
    /// Create a parser over an injected registry.
    pub fn with_registry(registry: &'a TemplateRegistry) -> DocumentParser<'a> {
        DocumentParser {
            registry,
            validate_fields: true,
            min_confidence: 0,
        }
    }

    /// Set whether extracted values are run through the field validators.
    /// Missing-required findings are reported either way.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_fields = validate;
        self
    }

    /// Set the minimum confidence (0-100) for accepting a sampled value;
    /// values below the threshold are treated as not extracted.
    pub fn with_min_confidence(mut self, min_confidence: u8) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Detect the document type from a filename and extract its fields.
    ///
    /// Falls back to a generic two-field result with a manual-review issue
    /// when no template matches.
    pub fn parse(&self, filename: &str) -> ExtractionResult {
        match detect_with(self.registry, filename) {
            Some(template) => {
                info!("Extracting '{}' as {}", filename, template.doc_type);
                self.extract_fields(template)
            }
            None => {
                info!("'{}' did not match any template", filename);
                unrecognized_result()
            }
        }
    }

    /// Extract fields for an already detected template.
    pub fn extract_fields(&self, template: &DocumentTemplate) -> ExtractionResult {
        let mut fields = Vec::new();
        let mut issues = Vec::new();

        for field in &template.fields {
            let sampled = samples::sample_value(&template.id, &field.name)
                .filter(|s| s.confidence >= self.min_confidence);

            match sampled {
                Some(sample) => {
                    fields.push(ExtractedField {
                        name: field.label.clone(),
                        value: sample.value.to_string(),
                        confidence: sample.confidence,
                    });

                    if self.validate_fields {
                        let validation = validate_field(field, sample.value);
                        if !validation.valid {
                            let reason = validation
                                .error
                                .unwrap_or_else(|| "invalid value".to_string());
                            issues.push(format!("{}: {}", field.label, reason));
                        }
                    }
                }
                None if field.required => {
                    issues.push(format!("Missing required field: {}", field.label));
                }
                // Optional and not sampled: skip silently.
                None => {}
            }
        }

        debug!(
            "Extracted {} fields for {} ({} issues)",
            fields.len(),
            template.id,
            issues.len()
        );

        ExtractionResult {
            detected_type: template.doc_type.clone(),
            fields,
            issues,
        }
    }
}

/// Generic result for documents that matched no template.
fn unrecognized_result() -> ExtractionResult {
    ExtractionResult {
        detected_type: "Unknown Document".to_string(),
        fields: samples::FALLBACK_FIELDS
            .iter()
            .map(|(name, sample)| ExtractedField {
                name: name.to_string(),
                value: sample.value.to_string(),
                confidence: sample.confidence,
            })
            .collect(),
        issues: vec![UNRECOGNIZED_ISSUE.to_string()],
    }
}

/// Extract fields for a template using the default parser.
pub fn extract_fields(template: &DocumentTemplate) -> ExtractionResult {
    DocumentParser::new().extract_fields(template)
}
