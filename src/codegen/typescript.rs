use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::UntypedPolicy;
use crate::ir::{Decl, TyRef};
use super::{untyped_token, Backend};

static IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("static identifier regex")
});

/// `export interface Name { field: Type; }` blocks separated by a blank line.
#[derive(Debug, Clone, Copy)]
pub struct TypeScript {
    pub export: bool,
    pub untyped: UntypedPolicy,
}

impl TypeScript {
    pub fn ty(&self, ty: &TyRef) -> String {
        match ty {
            TyRef::Null => "null".to_string(),
            TyRef::String => "string".to_string(),
            TyRef::Number => "number".to_string(),
            TyRef::Boolean => "boolean".to_string(),
            TyRef::Untyped => untyped_token(self.untyped).to_string(),
            TyRef::Object => "object".to_string(),
            TyRef::Named(name) => name.clone(),
            TyRef::Array(item) => format!("{}[]", self.ty(item)),
        }
    }
}

impl Backend for TypeScript {
    fn render_decl(&self, decl: &Decl, out: &mut String) {
        if self.export {
            out.push_str("export ");
        }
        out.push_str("interface ");
        out.push_str(&decl.name);
        out.push_str(" {\n");
        for field in &decl.fields {
            out.push_str("  ");
            out.push_str(&property_key(&field.name));
            out.push_str(": ");
            out.push_str(&self.ty(&field.ty));
            out.push_str(";\n");
        }
        out.push('}');
    }

    fn separator(&self) -> &'static str {
        "\n\n"
    }
}

/// Keys that are not identifiers are written as string literals.
fn property_key(name: &str) -> String {
    if IDENT.is_match(name) {
        name.to_string()
    } else {
        serde_json::Value::String(name.to_string()).to_string()
    }
}
