//! Value classifier: which of {primitive, null, array, object} a JSON value is.
//!
//! Composite variants borrow their contents so callers can descend without a
//! second, unchecked downcast.
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind<'a> {
    Primitive(PrimitiveKind),
    Null,
    Array(&'a [Value]),
    Object(&'a Map<String, Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Number,
    String,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
        }
    }
}

impl Kind<'_> {
    /// Human-readable name, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Kind::Primitive(p) => p.as_str(),
            Kind::Null => "null",
            Kind::Array(_) => "array",
            Kind::Object(_) => "object",
        }
    }
}

/// Total over `Value`. `None` stands for an absent value (missing key, or the
/// first element of an empty array).
pub fn classify(v: Option<&Value>) -> Kind<'_> {
    match v {
        None | Some(Value::Null) => Kind::Null,
        Some(Value::Array(xs)) => Kind::Array(xs),
        Some(Value::Object(m)) => Kind::Object(m),
        Some(Value::Bool(_)) => Kind::Primitive(PrimitiveKind::Boolean),
        Some(Value::Number(_)) => Kind::Primitive(PrimitiveKind::Number),
        Some(Value::String(_)) => Kind::Primitive(PrimitiveKind::String),
    }
}

/// Scalar kind of a primitive value; `None` for null and composites.
pub fn primitive_kind(v: &Value) -> Option<PrimitiveKind> {
    match classify(Some(v)) {
        Kind::Primitive(p) => Some(p),
        Kind::Null | Kind::Array(_) | Kind::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_primitive() {
        assert_eq!(classify(Some(&json!(true))), Kind::Primitive(PrimitiveKind::Boolean));
        assert_eq!(classify(Some(&json!(1.5))), Kind::Primitive(PrimitiveKind::Number));
        assert_eq!(classify(Some(&json!(-3))), Kind::Primitive(PrimitiveKind::Number));
        assert_eq!(classify(Some(&json!("x"))), Kind::Primitive(PrimitiveKind::String));
        assert_eq!(primitive_kind(&json!("x")), Some(PrimitiveKind::String));
    }

    #[test]
    fn null_and_absent_are_null() {
        assert_eq!(classify(Some(&Value::Null)), Kind::Null);
        assert_eq!(classify(None), Kind::Null);
        assert_eq!(primitive_kind(&Value::Null), None);
    }

    #[test]
    fn composites_borrow_their_contents() {
        let arr = json!([{"a": 1}]);
        assert!(matches!(classify(Some(&arr)), Kind::Array(xs) if xs.len() == 1));
        assert!(matches!(classify(Some(&json!([]))), Kind::Array(xs) if xs.is_empty()));

        let obj = json!({"a": 1, "b": 2});
        assert!(matches!(classify(Some(&obj)), Kind::Object(m) if m.len() == 2));
        assert_eq!(primitive_kind(&obj), None);
        assert_eq!(classify(Some(&arr)).describe(), "array");
    }
}
