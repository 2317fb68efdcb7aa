//! Renders declarations as `export interface` blocks.
//!
//! No decisions happen here; names, optionality and types were all settled
//! by the walker.
use std::fmt::Write as _;

use crate::ir::{Declaration, PropertyEntry, TypeRef};

const INDENT: &str = "  ";

#[derive(Default)]
pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self { Self::default() }

    /// Append one block per declaration, in order, separated by a blank line.
    pub fn emit(&mut self, declarations: &[Declaration]) {
        for decl in declarations {
            if !self.out.is_empty() {
                self.out.push_str("\n\n");
            }
            self.emit_declaration(decl);
        }
    }

    fn emit_declaration(&mut self, decl: &Declaration) {
        let _ = writeln!(self.out, "export interface {} {{", decl.name);
        for prop in &decl.properties {
            self.emit_property(prop);
        }
        self.out.push('}');
    }

    fn emit_property(&mut self, prop: &PropertyEntry) {
        let marker = if prop.optional { "?" } else { "" };
        let _ = writeln!(self.out, "{INDENT}{}{marker}: {};", prop.name, type_ref(&prop.ty));
    }

    pub fn into_string(self) -> String { self.out }
}

pub fn type_ref(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive { primitive } => primitive.as_str().to_string(),
        TypeRef::Dynamic => "any".to_string(),
        TypeRef::Named { name } => name.clone(),
        TypeRef::Array { element, depth } => {
            format!("{}{}", type_ref(element), "[]".repeat(*depth))
        }
    }
}

pub fn render(declarations: &[Declaration]) -> String {
    let mut cg = Codegen::new();
    cg.emit(declarations);
    cg.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PrimitiveKind;
    use pretty_assertions::assert_eq;

    fn prop(key: &str, ty: TypeRef, optional: bool) -> PropertyEntry {
        PropertyEntry { name: key.to_string(), key: key.to_string(), ty, optional }
    }

    #[test]
    fn type_refs() {
        assert_eq!(type_ref(&TypeRef::primitive(PrimitiveKind::Boolean)), "boolean");
        assert_eq!(type_ref(&TypeRef::Dynamic), "any");
        assert_eq!(type_ref(&TypeRef::named("Geo")), "Geo");
        assert_eq!(type_ref(&TypeRef::array(TypeRef::Dynamic, 1)), "any[]");
        assert_eq!(
            type_ref(&TypeRef::array(TypeRef::primitive(PrimitiveKind::String), 3)),
            "string[][][]"
        );
    }

    #[test]
    fn blocks_are_separated_by_one_blank_line() {
        let root = Declaration {
            name: "Root".into(),
            properties: vec![
                prop("id", TypeRef::primitive(PrimitiveKind::Number), false),
                prop("geo", TypeRef::named("Geo"), false),
                prop("note", TypeRef::Dynamic, true),
            ],
        };
        let geo = Declaration::new("Geo");
        let expected = "export interface Root {\n  id: number;\n  geo: Geo;\n  note?: any;\n}\n\nexport interface Geo {\n}";
        assert_eq!(render(&[root, geo]), expected);
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert_eq!(render(&[]), "");
    }
}
