//! Error types shared by the library surface.
use std::path::PathBuf;
use thiserror::Error;

pub use crate::codec::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON text (carries its own human-readable hints).
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Declarations can only be generated for an object at the root.
    #[error("cannot generate declarations: root value must be an object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("nesting deeper than {max_depth} levels at {path}")]
    DepthExceeded { max_depth: usize, path: String },

    #[error("untyped value at {path} (empty array) rejected by the untyped policy")]
    Untyped { path: String },

    #[error("failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
