use crate::error::CatalogError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses every whitespace run (including non-breaking spaces) to a single space and trims
///
/// # Arguments
/// * `text` - The text to clean up
///
/// # Returns
/// The collapsed text, possibly empty
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Ensures a directory exists, creating it if necessary
///
/// # Arguments
/// * `dir_path` - Path to the directory
///
/// # Returns
/// Result indicating success or detailed error
pub fn ensure_dir(dir_path: &Path) -> Result<(), CatalogError> {
    if !dir_path.exists() {
        fs::create_dir_all(dir_path).map_err(|source| CatalogError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

/// Reads a JSON document from a file
///
/// # Arguments
/// * `path` - The file to read
///
/// # Returns
/// The deserialized value or the I/O or JSON error encountered
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Writes a value as pretty-printed JSON, creating parent directories as needed
///
/// # Arguments
/// * `path` - The file to write
/// * `value` - The value to serialize
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let io_error = |source: io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  CSE\u{00A0}214 \n\t or  CSE 215 "), "CSE 214 or CSE 215");
        assert_eq!(collapse_whitespace(" \u{00A0} "), "");
    }

    #[test]
    fn test_ensure_dir() {
        let test_dir = std::env::temp_dir().join("catalog_test_dir");
        let result = ensure_dir(&test_dir);
        assert!(result.is_ok());
        assert!(test_dir.is_dir());

        // Clean up
        let _ = fs::remove_dir(&test_dir);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let path = std::env::temp_dir()
            .join("catalog_test_json")
            .join("values.json");

        write_json(&path, &vec!["CSE 214", "CSE 215"]).unwrap();
        let values: Vec<String> = read_json(&path).unwrap();
        assert_eq!(values, vec!["CSE 214", "CSE 215"]);

        // Clean up
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_json_missing_file() {
        let path = std::env::temp_dir().join("catalog_missing.json");
        let result: Result<Vec<String>, _> = read_json(&path);
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
