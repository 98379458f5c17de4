//! Infer type declarations from JSON documents.
//!
//! A decoded [`serde_json::Value`] is classified field by field
//! ([`inference`]), lowered into a language-agnostic declaration tree
//! ([`lower`], [`ir`]) and rendered as TypeScript interfaces or JSDoc
//! typedefs ([`codegen`]). [`JsonForge`] wraps this behind a small
//! parse/stringify API with descriptive decoding errors ([`codec`]).
//!
//! ```
//! use json_forge::codegen::{generate, GenerateOptions};
//!
//! let value = serde_json::json!({"name": "John", "age": 30, "active": true});
//! let ts = generate(&value, "User", &GenerateOptions::default()).unwrap();
//! assert_eq!(ts, "export interface User {\n  name: string;\n  age: number;\n  active: boolean;\n}");
//! ```
pub mod codec;
pub mod codegen;
pub mod config;
pub mod error;
pub mod forge;
pub mod inference;
pub mod ir;
pub mod jq_exec;
pub mod lower;
pub mod path_de;
pub mod writer;

pub use config::{ForgeOptions, ForgeOptionsPatch, Language, UntypedPolicy};
pub use error::{Error, ParseError, Result};
pub use forge::{parse_json, stringify_json, JsonForge, Model, Parsed, Report};
