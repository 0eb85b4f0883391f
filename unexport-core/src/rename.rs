//! Fully-qualified rename derivation for unused candidates.
//!
//! Produces the old-name/new-name pair an external rename tool needs to
//! make a candidate non-exported. The qualification depends on the
//! candidate's kind: methods are receiver-qualified, fields are
//! struct-qualified when the program's field index can resolve the owner,
//! everything else is module-qualified. Unrecognized kinds never fail -
//! they fall through to the module-qualified default.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::model::{Identifier, Program, SymbolKind};

/// A single rename instruction for the external rename tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameCommand {
    /// Module path the candidate is defined in.
    pub module_path: String,
    /// Qualified old name (see [`qualified_from_name`]).
    pub from: String,
    /// New non-exported name (first character lowercased).
    pub to: String,
}

impl fmt::Display for RenameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rename('\"{}\".{}' -> {})",
            self.module_path, self.from, self.to
        )
    }
}

/// Lowercases the first character of a name.
///
/// Non-ASCII initials go through `char::to_lowercase`, which may expand
/// to more than one character; ASCII names behave exactly as the source
/// ecosystem's convention expects.
pub fn unexported_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the qualified "from" name for a candidate.
///
/// - Method: receiver base type with pointer indirection stripped, then
///   the method name (`Widget.Render`) - independent of the module path,
///   matching the rename tool's expected input.
/// - Field: owning type plus field name when the field index resolves it;
///   otherwise the module-qualified fallback.
/// - Everything else (types, functions, variables, constants, unknown
///   kinds): `modulePath.Name`.
pub fn qualified_from_name(program: &Program, module_path: &str, candidate: &Identifier) -> String {
    match candidate.kind {
        SymbolKind::Method => match &candidate.receiver {
            Some(receiver) => {
                format!("{}.{}", receiver.trim_start_matches('*'), candidate.name)
            }
            None => {
                debug!(name = %candidate.name, "method candidate without receiver, using module-qualified name");
                module_qualified(module_path, &candidate.name)
            }
        },
        SymbolKind::Field => match program.field_owner(&candidate.position) {
            Some(owner) => format!("{}.{}", owner, candidate.name),
            None => {
                debug!(name = %candidate.name, "field owner not resolvable, using module-qualified name");
                module_qualified(module_path, &candidate.name)
            }
        },
        SymbolKind::Function
        | SymbolKind::Type
        | SymbolKind::Variable
        | SymbolKind::Constant => module_qualified(module_path, &candidate.name),
        SymbolKind::Other => {
            debug!(name = %candidate.name, "unrecognized symbol kind, using module-qualified name");
            module_qualified(module_path, &candidate.name)
        }
    }
}

fn module_qualified(module_path: &str, name: &str) -> String {
    format!("{}.{}", module_path, name)
}

/// Builds the complete rename instruction for an unused candidate.
pub fn rename_command(program: &Program, module_path: &str, candidate: &Identifier) -> RenameCommand {
    RenameCommand {
        module_path: module_path.to_string(),
        from: qualified_from_name(program, module_path, candidate),
        to: unexported_name(&candidate.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Module, ModuleClass, Position, ProgramBuilder, TypeDef};

    const TARGET: &str = "example.com/target";

    fn empty_program() -> Program {
        ProgramBuilder::new()
            .module(Module::new(TARGET, ModuleClass::Workspace))
            .build()
    }

    #[test]
    fn test_unexported_name() {
        assert_eq!(unexported_name("Exported"), "exported");
        assert_eq!(unexported_name("X"), "x");
        assert_eq!(unexported_name("already"), "already");
        assert_eq!(unexported_name(""), "");
    }

    #[test]
    fn test_unexported_name_non_ascii() {
        assert_eq!(unexported_name("Über"), "über");
    }

    #[test]
    fn test_function_is_module_qualified() {
        let ident = Identifier::new(
            "Compute",
            SymbolKind::Function,
            Position::new("target/lib.x", 10, 1),
        );
        let cmd = rename_command(&empty_program(), TARGET, &ident);
        assert_eq!(cmd.from, "example.com/target.Compute");
        assert_eq!(cmd.to, "compute");
    }

    #[test]
    fn test_method_strips_pointer_receiver() {
        let ident = Identifier::method("Render", Position::new("target/widget.x", 30, 4), "*Widget");
        let cmd = rename_command(&empty_program(), TARGET, &ident);
        assert_eq!(cmd.from, "Widget.Render");
        assert_eq!(cmd.to, "render");
    }

    #[test]
    fn test_method_value_receiver() {
        let ident = Identifier::method("Area", Position::new("target/shape.x", 44, 6), "Shape");
        let cmd = rename_command(&empty_program(), TARGET, &ident);
        assert_eq!(cmd.from, "Shape.Area");
    }

    #[test]
    fn test_field_with_resolvable_owner() {
        let field_pos = Position::new("target/shape.x", 60, 8);
        let mut module = Module::new(TARGET, ModuleClass::Workspace);
        module.types.push(TypeDef {
            name: "Shape".to_string(),
            fields: vec![field_pos.clone()],
        });
        let program = ProgramBuilder::new().module(module).build();

        let ident = Identifier::new("Width", SymbolKind::Field, field_pos);
        let cmd = rename_command(&program, TARGET, &ident);
        assert_eq!(cmd.from, "Shape.Width");
    }

    #[test]
    fn test_field_without_owner_falls_back() {
        let ident = Identifier::new(
            "Orphan",
            SymbolKind::Field,
            Position::new("target/shape.x", 70, 9),
        );
        let cmd = rename_command(&empty_program(), TARGET, &ident);
        assert_eq!(cmd.from, "example.com/target.Orphan");
    }

    #[test]
    fn test_unknown_kind_falls_back_silently() {
        let ident = Identifier::new(
            "Mystery",
            SymbolKind::Other,
            Position::new("target/lib.x", 80, 10),
        );
        let cmd = rename_command(&empty_program(), TARGET, &ident);
        assert_eq!(cmd.from, "example.com/target.Mystery");
    }

    #[test]
    fn test_command_display_format() {
        let cmd = RenameCommand {
            module_path: TARGET.to_string(),
            from: "Widget.Render".to_string(),
            to: "render".to_string(),
        };
        assert_eq!(
            cmd.to_string(),
            "rename('\"example.com/target\".Widget.Render' -> render)"
        );
    }
}
