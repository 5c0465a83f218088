//! Document type detection from filenames.

use tracing::debug;

use crate::models::template::DocumentTemplate;
use crate::templates::TemplateRegistry;

/// Classify a filename against a registry by keyword substring match.
///
/// The filename is lowercased and templates are scanned in registration
/// order, each template's keywords in declared order; the first keyword
/// contained in the filename wins. There is no scoring or best-match
/// ranking, so a filename matching several templates resolves to the
/// earliest registered one.
pub fn detect_with<'a>(
    registry: &'a TemplateRegistry,
    filename: &str,
) -> Option<&'a DocumentTemplate> {
    let lowered = filename.to_lowercase();

    for template in registry.iter() {
        for keyword in &template.keywords {
            if lowered.contains(keyword.as_str()) {
                debug!(
                    "Detected '{}' as {} (keyword: '{}')",
                    filename, template.id, keyword
                );
                return Some(template);
            }
        }
    }

    debug!("No template matched '{}'", filename);
    None
}

/// Classify a filename against the builtin registry.
pub fn detect_document_type(filename: &str) -> Option<&'static DocumentTemplate> {
    detect_with(TemplateRegistry::builtin(), filename)
}
