//! Data models for templates, processed documents, and configuration.

pub mod config;
pub mod document;
pub mod template;
