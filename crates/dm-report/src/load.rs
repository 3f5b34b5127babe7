//! Reading research JSON documents.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ReportError;

/// Read `path` and parse it as `T`.
///
/// # Errors
///
/// - [`ReportError::FileNotFound`] if `path` does not exist
/// - [`ReportError::InvalidJson`] if the contents are not JSON of shape `T`
/// - [`ReportError::Io`] for any other read failure
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::io(path, e),
    })?;
    serde_json::from_str(&text).map_err(|source| ReportError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_core::enums::FailureKind;
    use dm_core::entities::MarketStatisticsDocument;

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document::<MarketStatisticsDocument>(&dir.path().join("absent.json"))
            .unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
        assert_eq!(err.kind(), FailureKind::FileNotFound);
    }

    #[test]
    fn syntax_error_is_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"last_updated\": ").unwrap();
        let err = load_document::<MarketStatisticsDocument>(&path).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidJson);
    }

    #[test]
    fn wrong_shape_is_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let err = load_document::<MarketStatisticsDocument>(&path).unwrap_err();
        assert!(matches!(err, ReportError::InvalidJson { .. }));
    }

    #[test]
    fn directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document::<MarketStatisticsDocument>(dir.path()).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Io);
    }
}
