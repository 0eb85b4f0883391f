//! Program model providers.
//!
//! The symbol-resolution front end lives outside this crate; what crosses
//! the boundary is its JSON export of the resolved program. A provider
//! turns that export (or any other source of resolved modules) into a
//! [`Program`]. Load failures are fatal to the run - the analysis never
//! works from a partially loaded model.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{UnexportError, UnexportResult};
use crate::model::{Module, ModuleClass, Program};

/// Which modules a load should admit as scan sources.
///
/// The target module is always admitted regardless of its class; the
/// flags only filter the foreign modules that will be scanned.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Path of the module under analysis.
    pub target_path: String,
    /// Admit workspace modules.
    pub include_workspace: bool,
    /// Admit core/standard modules.
    pub include_core: bool,
}

impl LoadRequest {
    /// Create a request admitting every module class.
    pub fn all(target_path: impl Into<String>) -> Self {
        Self {
            target_path: target_path.into(),
            include_workspace: true,
            include_core: true,
        }
    }

    /// Whether a loaded module should be kept.
    pub fn admits(&self, module: &Module) -> bool {
        if module.path == self.target_path {
            return true;
        }
        match module.class {
            ModuleClass::Workspace => self.include_workspace,
            ModuleClass::Core => self.include_core,
        }
    }
}

/// Source of fully resolved programs.
pub trait ProgramProvider {
    /// Load the modules admitted by the request into an immutable program.
    fn load(&self, request: &LoadRequest) -> UnexportResult<Program>;
}

/// Loads a program from the JSON export of the external front end.
///
/// The root path is either a single file holding a JSON array of modules,
/// or a directory of per-module `*.json` exports. Directory loads parse
/// the files in parallel; discovery order is sorted first so assembly is
/// deterministic.
#[derive(Debug, Clone)]
pub struct JsonProvider {
    root: PathBuf,
}

impl JsonProvider {
    /// Create a provider rooted at a program file or export directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load_program_file(path: &Path) -> UnexportResult<Vec<Module>> {
        let content = fs::read_to_string(path).map_err(|e| UnexportError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| UnexportError::model(path, e.to_string()))
    }

    fn load_module_file(path: &Path) -> UnexportResult<Module> {
        let content = fs::read_to_string(path).map_err(|e| UnexportError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| UnexportError::model(path, e.to_string()))
    }

    fn load_dir(&self) -> UnexportResult<Vec<Module>> {
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| {
                UnexportError::load(format!("walk {}: {}", self.root.display(), e))
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path.to_path_buf());
            }
        }
        files.sort();

        files
            .par_iter()
            .map(|path| Self::load_module_file(path))
            .collect()
    }
}

impl ProgramProvider for JsonProvider {
    fn load(&self, request: &LoadRequest) -> UnexportResult<Program> {
        let modules = if self.root.is_dir() {
            self.load_dir()?
        } else {
            Self::load_program_file(&self.root)?
        };

        let admitted: Vec<Module> = modules
            .into_iter()
            .filter(|m| request.admits(m))
            .collect();
        debug!(modules = admitted.len(), root = %self.root.display(), "program model loaded");

        Ok(Program::new(admitted))
    }
}
