//! Render a declaration tree as source text.
//!
//! One tree, two surface syntaxes: TypeScript `interface` blocks and JSDoc
//! `@typedef` blocks. Both walk [`Decl::flatten`], so field order and
//! declaration order are identical across languages.
pub mod jsdoc;
pub mod typescript;

use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Language, UntypedPolicy, DEFAULT_MAX_DEPTH};
use crate::error::Result;
use crate::ir::Decl;
use crate::lower::{lower_to_ir, LowerOptions};

pub use jsdoc::JsDoc;
pub use typescript::TypeScript;

/// A surface syntax for declarations.
pub trait Backend {
    fn render_decl(&self, decl: &Decl, out: &mut String);

    /// Text placed between two consecutive declaration blocks.
    fn separator(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub language: Language,
    pub export: bool,
    pub untyped: UntypedPolicy,
    pub max_depth: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            export: true,
            untyped: UntypedPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

pub struct Codegen {
    language: Language,
    export: bool,
    untyped: UntypedPolicy,
    out: String,
    blocks: usize,
}

impl Codegen {
    pub fn new(language: Language) -> Self {
        Self { language, export: true, untyped: UntypedPolicy::default(), out: String::new(), blocks: 0 }
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    pub fn with_untyped(mut self, untyped: UntypedPolicy) -> Self {
        self.untyped = untyped;
        self
    }

    /// Append every declaration of `root`, nested ones first.
    pub fn emit(&mut self, root: &Decl) {
        match self.language {
            Language::TypeScript => {
                let backend = TypeScript { export: self.export, untyped: self.untyped };
                self.emit_with(&backend, root);
            }
            Language::JavaScript => {
                let backend = JsDoc { export: self.export, untyped: self.untyped };
                self.emit_with(&backend, root);
            }
        }
    }

    fn emit_with(&mut self, backend: &dyn Backend, root: &Decl) {
        for decl in root.flatten() {
            if self.blocks > 0 {
                self.out.push_str(backend.separator());
            }
            backend.render_decl(decl, &mut self.out);
            self.blocks += 1;
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

/// Infer declarations for `value` and render them in one document.
///
/// Fails when the root is not an object, when nesting exceeds
/// `max_depth`, or when the `reject` policy meets an empty array. Arrays of
/// objects are typed from their first element only.
pub fn generate(value: &Value, root_name: &str, opts: &GenerateOptions) -> Result<String> {
    let lower_opts = LowerOptions { max_depth: opts.max_depth, untyped: opts.untyped };
    let root = lower_to_ir(value, root_name, &lower_opts)?;
    warn_on_duplicate_names(&root);

    let mut cg = Codegen::new(opts.language)
        .with_export(opts.export)
        .with_untyped(opts.untyped);
    cg.emit(&root);
    debug!(root = root_name, declarations = root.count(), language = ?opts.language, "generated declarations");
    Ok(cg.into_string())
}

/// Naming is positional only, so two paths can still produce one name.
fn warn_on_duplicate_names(root: &Decl) {
    let mut seen = IndexSet::new();
    for decl in root.flatten() {
        if !seen.insert(decl.name.as_str()) {
            warn!(name = %decl.name, "duplicate declaration name in generated output");
        }
    }
}

pub(crate) fn untyped_token(policy: UntypedPolicy) -> &'static str {
    match policy {
        UntypedPolicy::Any => "any",
        UntypedPolicy::Unknown | UntypedPolicy::Reject => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ts(v: Value, name: &str) -> String {
        generate(&v, name, &GenerateOptions::default()).unwrap()
    }

    #[test]
    fn output_is_deterministic() {
        let v = json!({"a": {"b": [{"c": 1}]}, "d": [1, 2], "e": null});
        assert_eq!(ts(v.clone(), "Root"), ts(v, "Root"));
    }

    #[test]
    fn nesting_order_is_bottom_up() {
        let out = ts(json!({"a": {"b": {"c": 1}}}), "Root");
        let ab = out.find("interface RootAB ").unwrap();
        let a = out.find("interface RootA ").unwrap();
        let root = out.find("interface Root ").unwrap();
        assert!(ab < a && a < root, "{out}");
    }

    #[test]
    fn renderers_share_declaration_order() {
        let v = json!({"x": {"y": 1}, "z": [{"w": true}]});
        let ts_out = ts(v.clone(), "T");
        let js_out = generate(&v, "T", &GenerateOptions {
            language: Language::JavaScript,
            ..GenerateOptions::default()
        }).unwrap();

        let position = |out: &str, needle: &str| out.find(needle).unwrap();
        let ts_pos = [
            position(&ts_out, "interface TZItem {"),
            position(&ts_out, "interface TX {"),
            position(&ts_out, "interface T {"),
        ];
        let js_pos = [
            position(&js_out, "@typedef {Object} TZItem\n"),
            position(&js_out, "@typedef {Object} TX\n"),
            position(&js_out, "@typedef {Object} T\n"),
        ];
        assert!(ts_pos.windows(2).all(|w| w[0] < w[1]), "{ts_out}");
        assert!(js_pos.windows(2).all(|w| w[0] < w[1]), "{js_out}");
    }

    #[test]
    fn emit_appends_across_calls() {
        let mut cg = Codegen::new(Language::TypeScript).with_export(false);
        cg.emit(&Decl::new("A"));
        cg.emit(&Decl::new("B"));
        assert_eq!(cg.into_string(), "interface A {\n}\n\ninterface B {\n}");
    }

    #[test]
    fn duplicate_names_still_render() {
        // `a.b` and `aB` both map to `RootAB`
        let out = ts(json!({"a": {"b": {}}, "aB": {}}), "Root");
        assert_eq!(out.matches("interface RootAB ").count(), 2);
    }
}
