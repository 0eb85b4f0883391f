//! Resolved program model consumed by the analysis.
//!
//! The front end that parses, type-checks, and cross-references source is
//! external to this crate; it hands over a fully resolved model in which
//! every reference already knows the symbol it denotes. The analysis joins
//! definitions and references purely by source position, never by name,
//! which keeps it correct under shadowing.
//!
//! All types here are serde-(de)serializable - the JSON form is the wire
//! format the external front end exports (see [`crate::provider`]).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A source location used as a stable identity key.
///
/// Two occurrences denote the same definition iff their positions are
/// equal. The byte offset is the discriminating component; the line is
/// carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Source file the position refers to.
    pub file: String,
    /// Byte offset within the file.
    pub offset: u32,
    /// Line number, 1-indexed.
    pub line: u32,
}

impl Position {
    /// Create a position.
    pub fn new(file: impl Into<String>, offset: u32, line: u32) -> Self {
        Self {
            file: file.into(),
            offset,
            line,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Kind of a defined or referenced symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Type,
    /// Package-level variable.
    Variable,
    /// Package-level constant.
    Constant,
    /// Record/struct field.
    Field,
    /// Function bound to a receiver type.
    Method,
    /// Anything the front end exports that this analysis does not model.
    /// Degrades to the default qualified-name form, never an error.
    Other,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Type => write!(f, "type"),
            Self::Variable => write!(f, "variable"),
            Self::Constant => write!(f, "constant"),
            Self::Field => write!(f, "field"),
            Self::Method => write!(f, "method"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A named definition site in a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Declared name.
    pub name: String,
    /// What the definition introduces.
    pub kind: SymbolKind,
    /// Defining position - the identity key the whole analysis joins on.
    pub position: Position,
    /// Receiver type for methods (may carry a leading `*`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
}

impl Identifier {
    /// Create a plain (receiver-less) identifier.
    pub fn new(name: impl Into<String>, kind: SymbolKind, position: Position) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            receiver: None,
        }
    }

    /// Create a method identifier bound to a receiver type.
    pub fn method(
        name: impl Into<String>,
        position: Position,
        receiver: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Method,
            position,
            receiver: Some(receiver.into()),
        }
    }
}

/// The semantic entity a reference resolves to.
///
/// Carries the owning module path and the defining position so the
/// scanner can match it against candidates without consulting any
/// shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Name at the definition site.
    pub name: String,
    /// Kind of the resolved entity.
    pub kind: SymbolKind,
    /// Path of the module that defines the entity.
    pub module_path: String,
    /// Defining position of the entity.
    pub position: Position,
    /// Receiver type for methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
}

/// An occurrence of an identifier that resolves to a [`Symbol`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Where the use occurs.
    pub position: Position,
    /// What it denotes.
    pub symbol: Symbol,
}

/// Whether a module belongs to the workspace under analysis or to the
/// core/standard set. Controls whether it is loaded as a scan source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleClass {
    #[default]
    Workspace,
    Core,
}

/// A record/struct type with the positions of its declared fields.
///
/// The front end exports these so the program can answer "which type owns
/// this field?" - see [`Program::field_owner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Type name.
    pub name: String,
    /// Defining positions of the type's fields.
    pub fields: Vec<Position>,
}

/// One resolved module of the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module path (the unit whose boundary separates internal from
    /// external usage).
    pub path: String,
    /// Workspace or core classification.
    #[serde(default)]
    pub class: ModuleClass,
    /// All definition sites in the module.
    #[serde(default)]
    pub definitions: Vec<Identifier>,
    /// All resolved references occurring in the module.
    #[serde(default)]
    pub references: Vec<Reference>,
    /// Record types with field lists, for field-owner recovery.
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl Module {
    /// Create an empty module with the given path and class.
    pub fn new(path: impl Into<String>, class: ModuleClass) -> Self {
        Self {
            path: path.into(),
            class,
            definitions: Vec::new(),
            references: Vec::new(),
            types: Vec::new(),
        }
    }
}

/// The fully resolved set of modules, immutable once constructed.
///
/// Construction also builds the field-to-owning-type index by scanning
/// every module's type definitions once, so the rename resolver can
/// qualify unused fields by their struct instead of silently degrading
/// to the module-qualified form.
#[derive(Debug, Clone, Default)]
pub struct Program {
    modules: HashMap<String, Module>,
    field_owners: HashMap<Position, String>,
}

impl Program {
    /// Build a program from resolved modules.
    pub fn new(modules: impl IntoIterator<Item = Module>) -> Self {
        let modules: HashMap<String, Module> = modules
            .into_iter()
            .map(|m| (m.path.clone(), m))
            .collect();

        let mut field_owners = HashMap::new();
        for module in modules.values() {
            for ty in &module.types {
                for field in &ty.fields {
                    field_owners.insert(field.clone(), ty.name.clone());
                }
            }
        }

        Self {
            modules,
            field_owners,
        }
    }

    /// Look up a module by path.
    pub fn module(&self, path: &str) -> Option<&Module> {
        self.modules.get(path)
    }

    /// Iterate over all loaded modules (no ordering guarantee).
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Number of loaded modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True if no modules were loaded.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Resolve a field's defining position to the name of its owning type.
    ///
    /// Returns `None` when the front end did not export a field list
    /// covering this position; the rename resolver then falls back to the
    /// module-qualified form.
    pub fn field_owner(&self, position: &Position) -> Option<&str> {
        self.field_owners.get(position).map(String::as_str)
    }
}

/// Convenience builder for assembling a [`Program`] in memory.
///
/// Used by tests and by embedders that already hold a resolved model and
/// do not go through a [`crate::provider::ProgramProvider`].
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    modules: Vec<Module>,
}

impl ProgramBuilder {
    /// Start an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolved module.
    pub fn module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Finish construction.
    pub fn build(self) -> Program {
        Program::new(self.modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        let pos = Position::new("src/widget.x", 120, 7);
        assert_eq!(pos.to_string(), "src/widget.x:7");
    }

    #[test]
    fn test_position_identity() {
        let a = Position::new("a.x", 10, 2);
        let b = Position::new("a.x", 10, 2);
        let c = Position::new("a.x", 11, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_field_owner_index() {
        let field_pos = Position::new("target/shape.x", 40, 3);
        let mut module = Module::new("example.com/target", ModuleClass::Workspace);
        module.types.push(TypeDef {
            name: "Shape".to_string(),
            fields: vec![field_pos.clone()],
        });

        let program = ProgramBuilder::new().module(module).build();
        assert_eq!(program.field_owner(&field_pos), Some("Shape"));
        assert_eq!(
            program.field_owner(&Position::new("target/shape.x", 99, 9)),
            None
        );
    }

    #[test]
    fn test_module_lookup() {
        let program = ProgramBuilder::new()
            .module(Module::new("a", ModuleClass::Workspace))
            .module(Module::new("b", ModuleClass::Core))
            .build();

        assert_eq!(program.len(), 2);
        assert!(program.module("a").is_some());
        assert!(program.module("missing").is_none());
    }

    #[test]
    fn test_module_json_round_trip() {
        let mut module = Module::new("example.com/target", ModuleClass::Workspace);
        module.definitions.push(Identifier::method(
            "Render",
            Position::new("target/widget.x", 88, 12),
            "*Widget",
        ));

        let json = serde_json::to_string(&module).unwrap();
        let back: Module = serde_json::from_str(&json).unwrap();
        assert_eq!(back, module);
    }

    #[test]
    fn test_symbol_kind_display() {
        assert_eq!(SymbolKind::Function.to_string(), "function");
        assert_eq!(SymbolKind::Method.to_string(), "method");
    }
}
