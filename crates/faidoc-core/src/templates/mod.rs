//! Template registry: the closed set of recognized document kinds.

mod builtin;

use lazy_static::lazy_static;

use crate::models::template::DocumentTemplate;

pub use builtin::{fafsa_template, tax_return_template, transcript_template};

lazy_static! {
    static ref BUILTIN: TemplateRegistry = TemplateRegistry::new(vec![
        builtin::fafsa_template(),
        builtin::tax_return_template(),
        builtin::transcript_template(),
    ]);
}

/// An immutable, ordered collection of document templates.
///
/// Built once and read-only thereafter. Registration order matters: the
/// detector returns the first template whose keyword matches.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: Vec<DocumentTemplate>,
}

impl TemplateRegistry {
    /// Build a registry from an ordered template list.
    pub fn new(templates: Vec<DocumentTemplate>) -> Self {
        Self { templates }
    }

    /// The process-wide registry seeded with the FAFSA, Tax Return, and
    /// Academic Transcript templates.
    pub fn builtin() -> &'static TemplateRegistry {
        &BUILTIN
    }

    /// Look up a template by id. Returns `None` for unknown ids.
    pub fn get(&self, id: &str) -> Option<&DocumentTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Iterate templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentTemplate> {
        self.templates.iter()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Look up a template in the builtin registry by id.
pub fn get_template_by_id(id: &str) -> Option<&'static DocumentTemplate> {
    TemplateRegistry::builtin().get(id)
}
