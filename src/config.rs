//! Options for parsing, stringifying and model generation.
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mirrors serde_json's own parser recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// `interface` declarations (.ts)
    #[default]
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    /// JSDoc `@typedef` blocks (.js)
    #[value(name = "javascript", alias = "js")]
    JavaScript,
}

impl Language {
    pub fn extension(self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }
}

/// What to do with positions whose type cannot be inferred (empty arrays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UntypedPolicy {
    #[default]
    Any,
    Unknown,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ForgeOptions {
    pub generate_models: bool,
    pub models_path: PathBuf,
    pub language: Language,
    pub prettify: bool,
    pub interface_name: String,
    pub export_models: bool,
    pub untyped: UntypedPolicy,
    pub max_depth: usize,
}

impl Default for ForgeOptions {
    fn default() -> Self {
        Self {
            generate_models: false,
            models_path: PathBuf::from("./models"),
            language: Language::TypeScript,
            prettify: true,
            interface_name: "GeneratedModel".to_string(),
            export_models: true,
            untyped: UntypedPolicy::Any,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Partial update for [`ForgeOptions`]; unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForgeOptionsPatch {
    pub generate_models: Option<bool>,
    pub models_path: Option<PathBuf>,
    pub language: Option<Language>,
    pub prettify: Option<bool>,
    pub interface_name: Option<String>,
    pub export_models: Option<bool>,
    pub untyped: Option<UntypedPolicy>,
    pub max_depth: Option<usize>,
}

impl ForgeOptions {
    /// Load options from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        crate::path_de::from_str_with_path(&source).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn apply(&mut self, patch: ForgeOptionsPatch) {
        let ForgeOptionsPatch {
            generate_models,
            models_path,
            language,
            prettify,
            interface_name,
            export_models,
            untyped,
            max_depth,
        } = patch;
        if let Some(x) = generate_models { self.generate_models = x; }
        if let Some(x) = models_path { self.models_path = x; }
        if let Some(x) = language { self.language = x; }
        if let Some(x) = prettify { self.prettify = x; }
        if let Some(x) = interface_name { self.interface_name = x; }
        if let Some(x) = export_models { self.export_models = x; }
        if let Some(x) = untyped { self.untyped = x; }
        if let Some(x) = max_depth { self.max_depth = x; }
    }

    pub fn with(mut self, patch: ForgeOptionsPatch) -> Self {
        self.apply(patch);
        self
    }

    pub fn generate_options(&self) -> crate::codegen::GenerateOptions {
        crate::codegen::GenerateOptions {
            language: self.language,
            export: self.export_models,
            untyped: self.untyped,
            max_depth: self.max_depth,
        }
    }
}
