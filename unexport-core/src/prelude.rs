//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use unexport_core::prelude::*;
//! ```
//!
//! This provides the most commonly needed types for unused-export
//! analysis without polluting the namespace with rarely-used items.

// Core analysis types
pub use crate::builder::{AnalysisResult, Unexport, UnusedIdentifier};
pub use crate::error::{UnexportError, UnexportResult};

// Program model
pub use crate::model::{
    Identifier, Module, ModuleClass, Position, Program, ProgramBuilder, Reference, Symbol,
    SymbolKind,
};

// Providers
pub use crate::provider::{JsonProvider, LoadRequest, ProgramProvider};

// Candidate extraction
pub use crate::extract::ExportRule;

// Rename synthesis
pub use crate::rename::RenameCommand;
