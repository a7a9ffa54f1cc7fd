//! Serialization and atomic file writes for backup documents.
//!
//! Invariants:
//! - Output bytes depend only on the document value (object keys are sorted).
//! - The target file is replaced by rename; a failed write leaves it untouched.

use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;

use super::BackupError;

/// Serialize a backup document, compact unless `pretty`.
pub(crate) fn serialize_document(document: &Value, pretty: bool) -> Result<Vec<u8>, BackupError> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(document)?
    } else {
        serde_json::to_vec(document)?
    };
    if pretty {
        bytes.push(b'\n');
    }
    Ok(bytes)
}

/// Write `bytes` to `path` via a temp file in the same directory and a rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), BackupError> {
    let write_err = |source| BackupError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp_file.write_all(bytes).map_err(write_err)?;
    temp_file.flush().map_err(write_err)?;
    temp_file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
