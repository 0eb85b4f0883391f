//! Exported-identifier extraction.
//!
//! Filters a module's definitions down to the candidate set: identifiers
//! whose name is exported under the configured convention. No error
//! conditions exist; an empty module yields an empty candidate set.

use crate::model::{Identifier, Module};

/// Convention deciding which definitions count as exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportRule {
    /// A name beginning with an uppercase letter is exported - the
    /// convention of the analyzed ecosystem.
    #[default]
    UppercaseInitial,
    /// Every named definition is exported. For source ecosystems that do
    /// not encode visibility in casing.
    All,
}

impl ExportRule {
    /// Whether a name is exported under this rule.
    pub fn is_exported(&self, name: &str) -> bool {
        match self {
            Self::UppercaseInitial => name.chars().next().is_some_and(|c| c.is_uppercase()),
            Self::All => !name.is_empty(),
        }
    }
}

/// Returns the exported identifiers of a module under the given rule.
///
/// The candidate set is unordered by nature; ordering guarantees are
/// imposed later, at classification time.
pub fn exported_identifiers(module: &Module, rule: ExportRule) -> Vec<Identifier> {
    module
        .definitions
        .iter()
        .filter(|d| rule.is_exported(&d.name))
        .cloned()
        .collect()
}
