//! Processed document models.

use serde::{Deserialize, Serialize};

use crate::extract::ExtractionResult;

/// One extracted field with its mocked value and confidence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedField {
    /// Display label of the field.
    pub name: String,

    /// Extracted value.
    pub value: String,

    /// Confidence score (0-100), a static placeholder rather than a
    /// computed signal.
    pub confidence: u8,
}

/// Processing status of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Extraction finished.
    Completed,
    /// Upload still in flight.
    Processing,
    /// Processing failed.
    Error,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Completed => "completed",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Error => "error",
        }
    }
}

/// A fully processed upload: detected type, extracted fields, and any
/// data-quality issues found along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Original filename of the upload.
    pub filename: String,

    /// Detected document type (display string).
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Processing status.
    pub status: DocumentStatus,

    /// Extracted fields in template order.
    pub fields: Vec<ExtractedField>,

    /// Missing-required and format-invalid findings, in extraction order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl ProcessedDocument {
    /// Build a completed document record from an extraction result.
    pub fn from_extraction(filename: impl Into<String>, result: ExtractionResult) -> Self {
        Self {
            filename: filename.into(),
            doc_type: result.detected_type,
            status: DocumentStatus::Completed,
            fields: result.fields,
            issues: result.issues,
        }
    }

    /// Whether any issues were recorded during extraction.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
