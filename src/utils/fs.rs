use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::AuditError;

/// Read and parse a JSON report. Any failure is reported against `path`.
pub fn read_json_report(path: &Path) -> Result<Value, AuditError> {
    let content = std::fs::read_to_string(path).map_err(|source| AuditError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let report = serde_json::from_str(&content).map_err(|source| AuditError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded report");
    Ok(report)
}

/// Atomic file write: write to a sibling temp file, then rename over `path`.
pub fn atomic_write(path: &Path, content: &str) -> Result<(), AuditError> {
    let tmp = temp_sibling(path);
    let write_err = |source: std::io::Error| AuditError::Write {
        path: path.to_path_buf(),
        source,
    };

    let result = std::fs::write(&tmp, content).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_valid_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, r#"{"fails": [1]}"#).unwrap();

        let report = read_json_report(&path).unwrap();
        assert_eq!(report["fails"][0], 1);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_json_report(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AuditError::Read { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"fails\": [").unwrap();

        let err = read_json_report(&path).unwrap_err();
        assert!(matches!(err, AuditError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to read or parse '"));
    }

    #[test]
    fn test_atomic_write_replaces_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        std::fs::write(&path, "old").unwrap();

        atomic_write(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("summary.json.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        std::fs::create_dir(&path).unwrap();

        let err = atomic_write(&path, "{}").unwrap_err();
        assert!(matches!(err, AuditError::Write { .. }));
        assert!(!dir.path().join("summary.json.tmp").exists());
    }

    #[test]
    fn test_atomic_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("summary.json");
        let err = atomic_write(&path, "{}").unwrap_err();
        assert!(matches!(err, AuditError::Write { .. }));
    }
}
