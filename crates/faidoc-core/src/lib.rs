//! Core library for financial aid document intake.
//!
//! This crate provides:
//! - A registry of recognized document templates (FAFSA, Tax Return, Academic Transcript)
//! - Document type detection from filenames via keyword matching
//! - Per-field validation (SSN, GPA, currency, date, email, number, text)
//! - Simulated field extraction with confidence scores and data-quality issues

pub mod error;
pub mod models;
pub mod templates;
pub mod detect;
pub mod validate;
pub mod extract;

pub use error::{FaidocError, Result};
pub use models::config::{ExtractionConfig, FaidocConfig};
pub use models::document::{DocumentStatus, ExtractedField, ProcessedDocument};
pub use models::template::{DocumentTemplate, FieldDefinition, FieldType};
pub use templates::{get_template_by_id, TemplateRegistry};
pub use detect::{detect_document_type, detect_with};
pub use validate::{validate_field, FieldValidation};
pub use extract::{extract_fields, DocumentParser, ExtractionResult};
