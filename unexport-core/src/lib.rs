//! unexport-core: whole-program unused-export analysis for resolved module sets.
//!
//! Given a fully resolved program model (every module parsed, type-checked,
//! and cross-referenced by an external front end), this library finds the
//! exported identifiers of one target module that no other module ever
//! references, and synthesizes the rename instructions that would make
//! them non-exported.
//!
//! # Features
//!
//! - **Candidate extraction**: exported identifiers under a configurable
//!   export convention
//! - **Concurrent usage tracking**: one scan task per foreign module,
//!   per-candidate locking, deterministic results
//! - **Position-identity matching**: references join to definitions by
//!   source position, never by name (shadowing-safe)
//! - **Rename synthesis**: module-, receiver-, and struct-qualified old
//!   names with lowercase-initial new names
//! - **Field-owner recovery**: unused struct fields are qualified by
//!   their owning type via an index built once at load time
//! - **JSON model provider**: loads the front end's program export from a
//!   file or directory
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use unexport_core::prelude::*;
//!
//! let provider = JsonProvider::new("/path/to/model");
//! let result = Unexport::new("example.com/target")
//!     .verbose(true)
//!     .analyze_with(&provider)?;
//!
//! println!("{}", result.summary());
//! for command in result.commands() {
//!     println!("{}", command);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`model`]: resolved program model (positions, identifiers, symbols,
//!   references, modules)
//! - [`provider`]: program model providers (JSON export loader)
//! - [`extract`]: exported-identifier extraction
//! - [`ledger`]: concurrent usage ledger
//! - [`scan`]: parallel cross-module reference scan
//! - [`classify`]: used/unused partitioning with stable ordering
//! - [`rename`]: qualified rename derivation
//! - [`report`]: plaintext and JSON output
//! - [`builder`]: fluent builder API for configuration
//! - [`error`]: typed error handling

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod provider;
pub mod rename;
pub mod report;
pub mod scan;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, UnexportError, UnexportResult};

// Builder API
pub use builder::{AnalysisResult, Unexport, UnusedIdentifier};

// Configuration
pub use config::{load_config, OutputConfig, UnexportConfig};

// Program model
pub use model::{
    Identifier, Module, ModuleClass, Position, Program, ProgramBuilder, Reference, Symbol,
    SymbolKind, TypeDef,
};

// Providers
pub use provider::{JsonProvider, LoadRequest, ProgramProvider};

// Candidate extraction
pub use extract::{exported_identifiers, ExportRule};

// Usage tracking
pub use ledger::{UsageLedger, UsageRecord};
pub use scan::scan_foreign_modules;

// Classification
pub use classify::{unused, used};

// Rename synthesis
pub use rename::{qualified_from_name, rename_command, unexported_name, RenameCommand};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_json, print_plain};
