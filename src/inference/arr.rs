use serde_json::Value;
use super::{classify, Kind};

/// Arrays are judged by their first element alone.
///
/// - `[]` → `EmptyArray`
/// - `[{..}, ..]` → `ArrayOfObject` (the first object is the representative)
/// - anything else → `ArrayOfPrimitive` of the first element's kind, which
///   recurses for arrays of arrays.
pub fn classify_array(xs: &[Value]) -> Kind<'_> {
    match xs.first() {
        None => Kind::EmptyArray,
        Some(Value::Object(first)) => Kind::ArrayOfObject(first),
        Some(first) => Kind::ArrayOfPrimitive(Box::new(classify(first))),
    }
}
