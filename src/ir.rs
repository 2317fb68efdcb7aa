// Strongly-typed output model of inference. No serde_json::Value here.
use serde::Serialize;

use crate::classify::PrimitiveKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    Primitive { primitive: PrimitiveKind },
    Dynamic,                 // null/absent, shape unknown
    Named { name: String },  // points at a Declaration in the same output
    Array {
        element: Box<TypeRef>,   // never itself an Array
        depth: usize,            // >= 1
    },
}

impl TypeRef {
    pub fn primitive(primitive: PrimitiveKind) -> Self {
        TypeRef::Primitive { primitive }
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named { name: name.into() }
    }

    pub fn array(element: TypeRef, depth: usize) -> Self {
        TypeRef::Array { element: Box::new(element), depth }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    /// Identifier as emitted: camelCased, or the quoted key when not a bare identifier.
    pub name: String,
    /// Key as it appeared in the source object.
    pub key: String,
    pub ty: TypeRef,
    pub optional: bool,      // sampled value was null/absent
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub properties: Vec<PropertyEntry>,  // source key order
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), properties: Vec::new() }
    }

    pub fn property(&self, key: &str) -> Option<&PropertyEntry> {
        self.properties.iter().find(|p| p.key == key)
    }
}
