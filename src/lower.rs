use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{UntypedPolicy, DEFAULT_MAX_DEPTH};
use crate::error::{Error, Result};
use crate::inference::{classify, Kind};
use crate::ir::{Decl, Field, TyRef};

#[derive(Debug, Clone, Copy)]
pub struct LowerOptions {
    pub max_depth: usize,
    pub untyped: UntypedPolicy,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, untyped: UntypedPolicy::default() }
    }
}

/// Build the declaration tree for `value`, naming the root `root_name`.
///
/// Nested objects become `{parent}{Field}` declarations and arrays of objects
/// become `{parent}{Field}Item` declarations. Item shapes come from the first
/// array element only; fields that appear only in later elements are silently
/// left out.
pub fn lower_to_ir(value: &Value, root_name: &str, opts: &LowerOptions) -> Result<Decl> {
    let Kind::Object(map) = classify(value) else {
        return Err(Error::RootNotObject { found: classify(value).label() });
    };
    let walker = Walker { opts };
    walker.object(map, root_name, "", 0)
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn nested_name(parent: &str, field: &str) -> String {
    format!("{parent}{}", capitalize(field))
}

pub fn item_name(parent: &str, field: &str) -> String {
    format!("{parent}{}Item", capitalize(field))
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL
// ————————————————————————————————————————————————————————————————————————————

struct Walker<'o> {
    opts: &'o LowerOptions,
}

impl Walker<'_> {
    fn object(&self, map: &Map<String, Value>, name: &str, path: &str, depth: usize) -> Result<Decl> {
        if depth > self.opts.max_depth {
            return Err(Error::DepthExceeded {
                max_depth: self.opts.max_depth,
                path: display_path(path),
            });
        }

        let mut decl = Decl::new(name);
        for (key, value) in map {
            let field_path = format!("{path}/{}", escape_pointer(key));
            let ty = match classify(value) {
                Kind::Object(child) => {
                    let child_name = nested_name(name, key);
                    decl.children.push(self.object(child, &child_name, &field_path, depth + 1)?);
                    TyRef::Named(child_name)
                }
                Kind::ArrayOfObject(first) => {
                    let child_name = item_name(name, key);
                    let item_path = format!("{field_path}/0");
                    decl.children.push(self.object(first, &child_name, &item_path, depth + 1)?);
                    TyRef::Array(Box::new(TyRef::Named(child_name)))
                }
                other => self.anonymous(&other, &field_path)?,
            };
            decl.fields.push(Field { name: key.clone(), ty });
        }

        debug!(name, fields = decl.fields.len(), "lowered declaration");
        Ok(decl)
    }

    /// Type reference for a position that never gets its own declaration.
    fn anonymous(&self, kind: &Kind<'_>, path: &str) -> Result<TyRef> {
        Ok(match kind {
            Kind::Null => TyRef::Null,
            Kind::String => TyRef::String,
            Kind::Number => TyRef::Number,
            Kind::Boolean => TyRef::Boolean,
            Kind::EmptyArray => TyRef::Array(Box::new(self.untyped(path)?)),
            Kind::ArrayOfPrimitive(elem) => {
                TyRef::Array(Box::new(self.anonymous(elem, &format!("{path}/0"))?))
            }
            // element of a primitive array, e.g. the inner `[{..}]` of `[[{..}]]`
            Kind::ArrayOfObject(_) => TyRef::Array(Box::new(TyRef::Object)),
            // unreachable in practice: `object` names direct children and an
            // array whose first element is an object is `ArrayOfObject`
            Kind::Object(_) => TyRef::Object,
        })
    }

    fn untyped(&self, path: &str) -> Result<TyRef> {
        match self.opts.untyped {
            UntypedPolicy::Reject => Err(Error::Untyped { path: display_path(path) }),
            UntypedPolicy::Any | UntypedPolicy::Unknown => Ok(TyRef::Untyped),
        }
    }
}

fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn display_path(path: &str) -> String {
    if path.is_empty() { "/".to_string() } else { path.to_string() }
}

// ------------------------------- Tests ------------------------------------ //
