use crate::config::UntypedPolicy;
use crate::ir::{Decl, TyRef};
use super::{untyped_token, Backend};

/// One `@typedef` comment per declaration, for consumers that rely on
/// documentation tooling instead of static types. Exported declarations are
/// followed by a `module.exports = {};` placeholder.
#[derive(Debug, Clone, Copy)]
pub struct JsDoc {
    pub export: bool,
    pub untyped: UntypedPolicy,
}

impl JsDoc {
    pub fn ty(&self, ty: &TyRef) -> String {
        match ty {
            TyRef::Null => "null".to_string(),
            TyRef::String => "string".to_string(),
            TyRef::Number => "number".to_string(),
            TyRef::Boolean => "boolean".to_string(),
            TyRef::Untyped => untyped_token(self.untyped).to_string(),
            TyRef::Object => "Object".to_string(),
            TyRef::Named(name) => name.clone(),
            // bare `Array` already means "array of anything"
            TyRef::Array(item) if **item == TyRef::Untyped && self.untyped == UntypedPolicy::Any => {
                "Array".to_string()
            }
            TyRef::Array(item) => format!("Array<{}>", self.ty(item)),
        }
    }
}

impl Backend for JsDoc {
    fn render_decl(&self, decl: &Decl, out: &mut String) {
        out.push_str("/**\n * @typedef {Object} ");
        out.push_str(&decl.name);
        out.push('\n');
        for field in &decl.fields {
            out.push_str(" * @property {");
            out.push_str(&self.ty(&field.ty));
            out.push_str("} ");
            out.push_str(&field.name);
            out.push('\n');
        }
        out.push_str(" */\n\n");
        if self.export {
            out.push_str("module.exports = {};\n");
        }
    }

    fn separator(&self) -> &'static str {
        "\n"
    }
}
