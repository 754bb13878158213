//! # File I/O Module
//!
//! Reading and writing [`BeamModel`] files:
//! - **Atomic saves**: Write to a `.tmp` sibling, sync, rename
//! - **Version validation**: Refuse files written by an incompatible schema
//!
//! Model files are plain pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_model, save_model};
//! use beam_core::model::BeamModel;
//! use std::path::Path;
//!
//! let path = Path::new("two_spans.json");
//! save_model(&BeamModel::example(), path)?;
//!
//! let model = load_model(path)?;
//! let beam = model.build()?;
//! println!("R = {:?}", beam.reactions());
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{CalcError, CalcResult};
use crate::model::{BeamModel, SCHEMA_VERSION};

/// Temp file used while saving `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save a model with atomic write semantics
///
/// The save process:
/// 1. Serialize the model to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync to disk
/// 4. Rename over `path`
///
/// An interrupted save leaves the previous file untouched.
pub fn save_model(model: &BeamModel, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(model).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a model from a file
///
/// # Returns
///
/// * `Ok(BeamModel)` - Successfully loaded model (not yet solved)
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_model(path: &Path) -> CalcResult<BeamModel> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let model: BeamModel = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&model.meta.version)?;

    Ok(model)
}

/// Check that a file version is readable by the current schema
///
/// Major versions must match. While the schema is 0.x, a file with a newer
/// minor version is rejected too.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([0, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::supported_nodes;
    use std::env::temp_dir;

    fn temp_model_path(name: &str) -> PathBuf {
        temp_dir().join(format!("spanline_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_tmp_path() {
        assert_eq!(tmp_path_for(Path::new("/a/b/beam.json")), Path::new("/a/b/beam.json.tmp"));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_model_path("roundtrip");

        let model = BeamModel::example();
        save_model(&model, &path).unwrap();

        let loaded = load_model(&path).unwrap();
        assert_eq!(loaded.meta.label, model.meta.label);
        assert_eq!(loaded.nodes, model.nodes);
        assert_eq!(loaded.distributed_loads, model.distributed_loads);
        assert_eq!(loaded.build().unwrap().reactions(), model.build().unwrap().reactions());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_model_path("atomic");

        save_model(&BeamModel::new("B", supported_nodes(&[0.0, 1.0])), &path).unwrap();
        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_model(&temp_model_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_model_path("newer");
        let mut model = BeamModel::example();
        model.meta.version = "0.9.0".to_string();
        save_model(&model, &path).unwrap();

        let err = load_model(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_model_path("garbage");
        fs::write(&path, "{ not json").unwrap();

        let err = load_model(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("banana").is_err());
        assert!(validate_version("").is_err());
    }
}
