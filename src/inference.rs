//! Shape classification for a single JSON value.
//!
//! Every value falls into exactly one [`Kind`]. Classification is total over
//! `serde_json::Value`, never fails and never looks past the first element of
//! an array: that element is the *representative* of the whole array.
pub mod arr;

use serde_json::{Map, Value};

pub use arr::classify_array;

// ------------------------------ Kinds ------------------------------------ //

#[derive(Debug, Clone, PartialEq)]
pub enum Kind<'a> {
    Null,
    String,
    Number,
    Boolean,
    /// A nested record; gets its own named declaration.
    Object(&'a Map<String, Value>),
    /// Non-empty array whose first element is not an object.
    /// The inner kind is the classification of that first element.
    ArrayOfPrimitive(Box<Kind<'a>>),
    /// Non-empty array whose first element is an object. Only that element
    /// is carried: later elements with a different shape are ignored.
    ArrayOfObject(&'a Map<String, Value>),
    EmptyArray,
}

impl Kind<'_> {
    /// Short human label, used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Object(_) => "object",
            Kind::ArrayOfPrimitive(_) => "array",
            Kind::ArrayOfObject(_) => "array of objects",
            Kind::EmptyArray => "empty array",
        }
    }
}

// ---------------------------- Classify ----------------------------------- //

pub fn classify(value: &Value) -> Kind<'_> {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(xs) => classify_array(xs),
        Value::Object(map) => Kind::Object(map),
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_map_to_their_kinds() {
        assert_eq!(classify(&json!(null)), Kind::Null);
        assert_eq!(classify(&json!("x")), Kind::String);
        assert_eq!(classify(&json!(4.5)), Kind::Number);
        assert_eq!(classify(&json!(-3)), Kind::Number);
        assert_eq!(classify(&json!(false)), Kind::Boolean);
    }

    #[test]
    fn objects_borrow_their_map() {
        let v = json!({"a": 1});
        match classify(&v) {
            Kind::Object(map) => assert!(map.contains_key("a")),
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(classify(&json!([])).label(), "empty array");
        assert_eq!(classify(&json!([1])).label(), "array");
        assert_eq!(classify(&json!([{}])).label(), "array of objects");
        assert_eq!(classify(&json!({})).label(), "object");
    }
}
