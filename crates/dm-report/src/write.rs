//! Atomic file output.
//!
//! Every write goes to a temporary file in the target directory which is then
//! renamed over the target, so readers see either the old file or the whole
//! new one.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use crate::error::ReportError;

/// Write a rendered report to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the directory cannot be created or the file
/// cannot be written or moved into place.
pub fn write_report(path: &Path, contents: &str) -> Result<PathBuf, ReportError> {
    write_atomic(path, contents.as_bytes())?;
    Ok(path.to_path_buf())
}

/// Write `value` to `path` as JSON indented by 4 spaces, non-ASCII verbatim.
///
/// # Errors
///
/// Returns [`ReportError::Serialize`] if `value` cannot be serialized, and
/// otherwise the same errors as [`write_report`].
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf, ReportError> {
    write_atomic(path, &to_pretty_json(value)?)?;
    Ok(path.to_path_buf())
}

/// Serialize `value` with a 4-space indent.
///
/// # Errors
///
/// Returns the serializer error if `value` cannot be represented as JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ReportError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| ReportError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| ReportError::io(path, e))?;
    tmp.persist(path).map_err(|e| ReportError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}
