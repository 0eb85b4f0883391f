//! Builder pattern API for unexport analysis.
//!
//! Provides a fluent interface for configuring and running the
//! usage-tracking pipeline:
//!
//! ```rust,ignore
//! use unexport_core::prelude::*;
//!
//! let provider = JsonProvider::new("/path/to/model");
//! let result = Unexport::new("example.com/target")
//!     .include_core(false)
//!     .verbose(true)
//!     .analyze_with(&provider)?;
//!
//! println!("{}", result.summary());
//! for command in result.commands() {
//!     println!("{}", command);
//! }
//! ```

use serde::Serialize;

use crate::classify;
use crate::error::{UnexportError, UnexportResult};
use crate::extract::{exported_identifiers, ExportRule};
use crate::ledger::UsageLedger;
use crate::model::{Identifier, Position, Program, SymbolKind};
use crate::provider::{LoadRequest, ProgramProvider};
use crate::rename::{rename_command, RenameCommand};
use crate::scan::scan_foreign_modules;

/// Builder for configuring an unexport analysis run.
#[derive(Debug, Clone)]
pub struct Unexport {
    /// Path of the module to analyze
    target: String,

    /// Whether to load workspace modules as scan sources
    include_workspace: bool,

    /// Whether to load core/standard modules as scan sources
    include_core: bool,

    /// Export convention for candidate selection
    export_rule: ExportRule,

    /// Candidate names or patterns to skip
    ignored_patterns: Vec<String>,

    /// Per-match diagnostic logging
    verbose: bool,
}

impl Unexport {
    /// Create a new analysis builder for the given target module path.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            include_workspace: true,
            include_core: true,
            export_rule: ExportRule::default(),
            ignored_patterns: Vec::new(),
            verbose: false,
        }
    }

    /// Include or exclude workspace modules as scan sources.
    pub fn include_workspace(mut self, enabled: bool) -> Self {
        self.include_workspace = enabled;
        self
    }

    /// Include or exclude core/standard modules as scan sources.
    pub fn include_core(mut self, enabled: bool) -> Self {
        self.include_core = enabled;
        self
    }

    /// Set the export convention used to pick candidates.
    pub fn export_rule(mut self, rule: ExportRule) -> Self {
        self.export_rule = rule;
        self
    }

    /// Add patterns for candidates to ignore (`Prefix*` / `*Suffix` /
    /// substring).
    pub fn ignore_patterns(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignored_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Enable per-match diagnostic logging.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// The load request this configuration implies.
    pub fn load_request(&self) -> LoadRequest {
        LoadRequest {
            target_path: self.target.clone(),
            include_workspace: self.include_workspace,
            include_core: self.include_core,
        }
    }

    /// Load a program through the provider, then analyze it.
    ///
    /// Load failures are fatal; no partial analysis is attempted.
    pub fn analyze_with(&self, provider: &dyn ProgramProvider) -> UnexportResult<AnalysisResult> {
        let program = provider.load(&self.load_request())?;
        self.analyze_program(&program)
    }

    /// Run the analysis pipeline over an already-loaded program.
    pub fn analyze_program(&self, program: &Program) -> UnexportResult<AnalysisResult> {
        let target_module = program
            .module(&self.target)
            .ok_or_else(|| UnexportError::target_not_found(&self.target))?;

        // 1. Candidate set: exported identifiers, minus ignored patterns.
        let mut candidates = exported_identifiers(target_module, self.export_rule);
        candidates.retain(|c| !self.is_ignored(&c.name));

        // 2. Ledger is fully allocated before any scanning starts.
        let ledger = UsageLedger::new(candidates);

        // 3. Concurrent scan of every foreign module; the parallel join
        //    is the barrier after which the ledger is read-only.
        scan_foreign_modules(program, &self.target, &ledger, self.verbose);

        // 4. Classify and synthesize rename instructions.
        let used = classify::used(&ledger);
        let unused = classify::unused(&ledger)
            .into_iter()
            .map(|ident| {
                let command = rename_command(program, &self.target, &ident);
                UnusedIdentifier {
                    name: ident.name,
                    kind: ident.kind,
                    position: ident.position,
                    command,
                }
            })
            .collect();

        Ok(AnalysisResult {
            target: self.target.clone(),
            total_candidates: ledger.len(),
            used,
            unused,
        })
    }

    /// Check if a candidate name matches any ignored pattern.
    fn is_ignored(&self, name: &str) -> bool {
        for pattern in &self.ignored_patterns {
            if pattern.ends_with('*') {
                let prefix = &pattern[..pattern.len() - 1];
                if name.starts_with(prefix) {
                    return true;
                }
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                if name.ends_with(suffix) {
                    return true;
                }
            } else if name == pattern || name.contains(pattern) {
                return true;
            }
        }
        false
    }
}

/// Result of running an unexport analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Module path that was analyzed
    pub target: String,

    /// Total number of candidates (exported identifiers after ignores)
    pub total_candidates: usize,

    /// Candidates referenced from at least one foreign module, sorted by
    /// name then position
    pub used: Vec<Identifier>,

    /// Candidates with no external reference, sorted by name then
    /// position, each with its rename instruction
    pub unused: Vec<UnusedIdentifier>,
}

impl AnalysisResult {
    /// Number of unused candidates.
    pub fn unused_count(&self) -> usize {
        self.unused.len()
    }

    /// Check if any unused exported identifier was found.
    pub fn has_unused(&self) -> bool {
        !self.unused.is_empty()
    }

    /// The human-readable summary line.
    pub fn summary(&self) -> String {
        format!(
            "unused {} of {} identifiers",
            self.unused.len(),
            self.total_candidates
        )
    }

    /// Iterate over the rename instructions, one per unused identifier.
    pub fn commands(&self) -> impl Iterator<Item = &RenameCommand> {
        self.unused.iter().map(|u| &u.command)
    }
}

/// An unused exported identifier with its synthesized rename instruction.
#[derive(Debug, Clone, Serialize)]
pub struct UnusedIdentifier {
    /// Declared name
    pub name: String,
    /// Kind of the definition
    pub kind: SymbolKind,
    /// Defining position
    pub position: Position,
    /// Instruction that would make it non-exported
    pub command: RenameCommand,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Module, ModuleClass, ProgramBuilder, Reference, Symbol};

    const TARGET: &str = "example.com/target";

    fn func(name: &str, offset: u32) -> Identifier {
        Identifier::new(
            name,
            SymbolKind::Function,
            Position::new("target/lib.x", offset, 1),
        )
    }

    fn program_with_foreign_use(used_name: &str) -> Program {
        let used = func(used_name, 10);
        let unused = func("NeverCalled", 20);
        let internal = func("internal", 30);

        let mut target = Module::new(TARGET, ModuleClass::Workspace);
        target.definitions = vec![used.clone(), unused, internal];

        let mut foreign = Module::new("example.com/other", ModuleClass::Workspace);
        foreign.references.push(Reference {
            position: Position::new("other/main.x", 5, 2),
            symbol: Symbol {
                name: used.name.clone(),
                kind: used.kind,
                module_path: TARGET.to_string(),
                position: used.position.clone(),
                receiver: None,
            },
        });

        ProgramBuilder::new().module(target).module(foreign).build()
    }

    #[test]
    fn test_analyze_basic() {
        let program = program_with_foreign_use("Called");
        let result = Unexport::new(TARGET).analyze_program(&program).unwrap();

        // "internal" is not exported and never becomes a candidate.
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.used.len(), 1);
        assert_eq!(result.used[0].name, "Called");
        assert_eq!(result.unused_count(), 1);
        assert_eq!(result.unused[0].name, "NeverCalled");
        assert_eq!(result.summary(), "unused 1 of 2 identifiers");
    }

    #[test]
    fn test_target_not_found() {
        let program = ProgramBuilder::new()
            .module(Module::new("example.com/other", ModuleClass::Workspace))
            .build();

        let err = Unexport::new("example.com/nope")
            .analyze_program(&program)
            .unwrap_err();
        assert!(matches!(err, UnexportError::TargetNotFound { .. }));
        assert_eq!(err.to_string(), "'example.com/nope' is not a valid package");
    }

    #[test]
    fn test_ignore_patterns() {
        let program = program_with_foreign_use("Called");
        let result = Unexport::new(TARGET)
            .ignore_patterns(["Never*"])
            .analyze_program(&program)
            .unwrap();

        assert_eq!(result.total_candidates, 1);
        assert!(!result.has_unused());
    }

    #[test]
    fn test_export_rule_all_includes_lowercase() {
        let program = program_with_foreign_use("Called");
        let result = Unexport::new(TARGET)
            .export_rule(ExportRule::All)
            .analyze_program(&program)
            .unwrap();

        // "internal" counts as a candidate under ExportRule::All.
        assert_eq!(result.total_candidates, 3);
        let names: Vec<&str> = result.unused.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["NeverCalled", "internal"]);
    }

    #[test]
    fn test_completeness_partition() {
        let program = program_with_foreign_use("Called");
        let result = Unexport::new(TARGET).analyze_program(&program).unwrap();

        assert_eq!(
            result.used.len() + result.unused.len(),
            result.total_candidates
        );
        for u in &result.unused {
            assert!(!result.used.iter().any(|i| i.position == u.position));
        }
    }
}
