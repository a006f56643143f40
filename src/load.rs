use crate::fs::FileSystem;
use crate::model::NamedRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read an import graph: a JSON array of `{name, size, imports}` records.
pub fn load_records(fs: &dyn FileSystem, path: &Path) -> Result<Vec<NamedRecord>, LoadError> {
    let content = fs.read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<NamedRecord> =
        serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), records = records.len(), "loaded import graph");
    Ok(records)
}
