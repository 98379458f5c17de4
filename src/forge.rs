//! `JsonForge`: parse and stringify JSON, optionally generating model files
//! for every document that passes through.
use std::path::PathBuf;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::codec;
use crate::codegen;
use crate::config::{ForgeOptions, ForgeOptionsPatch, Language};
use crate::error::Result;
use crate::writer;

/// A successful operation: its data plus the model files it wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub data: T,
    pub model_files: Vec<PathBuf>,
}

/// Rendered declarations for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub language: Language,
    pub source: String,
}

/// Flat `{ success, data, modelFiles, error }` view of an outcome, for
/// callers that want a serialisable status instead of a `Result`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub model_files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<Result<Parsed<T>>> for Report<T> {
    fn from(result: Result<Parsed<T>>) -> Self {
        match result {
            Ok(Parsed { data, model_files }) => Self {
                success: true,
                data: Some(data),
                model_files,
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: None,
                model_files: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonForge {
    options: ForgeOptions,
}

impl JsonForge {
    pub fn new(options: ForgeOptions) -> Self {
        Self { options }
    }

    /// Decode `src`. With `generate_models` on, also writes a model file for
    /// the decoded document (whose root must then be an object).
    pub fn parse_to_object(&self, src: &str) -> Result<Parsed<Value>> {
        let data = codec::parse_value(src)?;
        let model_files = self.maybe_write_model(&data)?;
        Ok(Parsed { data, model_files })
    }

    /// Encode `value`, prettified unless `prettify` is off.
    pub fn parse_to_string(&self, value: &Value) -> Result<Parsed<String>> {
        let data = codec::stringify(value, self.options.prettify)?;
        let model_files = self.maybe_write_model(value)?;
        Ok(Parsed { data, model_files })
    }

    /// Render declarations for `value` under the configured interface name.
    pub fn generate(&self, value: &Value) -> Result<Model> {
        let name = self.options.interface_name.clone();
        let source = codegen::generate(value, &name, &self.options.generate_options())?;
        Ok(Model { name, language: self.options.language, source })
    }

    /// Render and persist declarations for `value`, returning the file path.
    pub fn generate_model(&self, value: &Value) -> Result<PathBuf> {
        let model = self.generate(value)?;
        let path = writer::model_path(&self.options.models_path, &model.name, model.language);
        writer::write_model_file(&path, &model.source)?;
        Ok(path)
    }

    pub fn configure(&mut self, patch: ForgeOptionsPatch) {
        self.options.apply(patch);
        debug!(options = ?self.options, "reconfigured");
    }

    pub fn config(&self) -> &ForgeOptions {
        &self.options
    }

    fn maybe_write_model(&self, value: &Value) -> Result<Vec<PathBuf>> {
        if !self.options.generate_models {
            return Ok(Vec::new());
        }
        Ok(vec![self.generate_model(value)?])
    }
}

/// One-shot [`JsonForge::parse_to_object`].
pub fn parse_json(src: &str, options: ForgeOptions) -> Result<Parsed<Value>> {
    JsonForge::new(options).parse_to_object(src)
}

/// One-shot [`JsonForge::parse_to_string`].
pub fn stringify_json(value: &Value, options: ForgeOptions) -> Result<Parsed<String>> {
    JsonForge::new(options).parse_to_string(value)
}
