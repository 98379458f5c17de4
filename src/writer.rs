//! Model file persistence.
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Language;
use crate::error::{Error, Result};

/// `<models_path>/<name>.ts` or `<models_path>/<name>.js`.
pub fn model_path(models_path: &Path, name: &str, language: Language) -> PathBuf {
    models_path.join(format!("{name}.{}", language.extension()))
}

/// Write `content` to `path`, creating parent directories and overwriting
/// any existing file.
pub fn write_model_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote model file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_uses_language_extension() {
        let dir = Path::new("./models");
        assert_eq!(model_path(dir, "User", Language::TypeScript), PathBuf::from("./models/User.ts"));
        assert_eq!(model_path(dir, "User", Language::JavaScript), PathBuf::from("./models/User.js"));
    }

    #[test]
    fn creates_missing_directories_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a/b/Model.ts");
        write_model_file(&path, "first").unwrap();
        write_model_file(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
