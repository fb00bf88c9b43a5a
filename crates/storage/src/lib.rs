//! Storage layer: flat JSON documents inside a data directory.
//!
//! Holds the data-directory handle and the raw load/save helpers. Shape
//! checks on what a document contains belong to the caller.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What was found on disk for one document.
#[derive(Debug)]
pub enum Document {
    Missing,
    /// The file exists but does not hold valid JSON. The next save replaces
    /// it, so whatever it contained is lost.
    Malformed(serde_json::Error),
    Parsed(Value),
}

#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn load(&self, file_name: &str) -> Result<Document, StoreError> {
        let path = self.path_of(file_name);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet", path.display());
                return Ok(Document::Missing);
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(v) => Ok(Document::Parsed(v)),
            Err(e) => Ok(Document::Malformed(e)),
        }
    }

    /// Overwrites `file_name` with `items` as a two-space indented JSON array.
    /// There is no temp file or backup: a failed write can truncate the file.
    pub fn save(&self, file_name: &str, items: &[Value]) -> Result<PathBuf, StoreError> {
        let path = self.path_of(file_name);
        let body = serde_json::to_string_pretty(items).map_err(|source| StoreError::Encode {
            path: path.clone(),
            source,
        })?;
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Write {
            path: self.root.clone(),
            source,
        })?;
        fs::write(&path, body).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} item(s) to {}", items.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_file_is_reported_as_missing() {
        let temp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(temp.path());
        assert!(matches!(dir.load("links.json").unwrap(), Document::Missing));
    }

    #[test]
    fn garbage_is_reported_as_malformed() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("links.json"), "[{\"title\": ").unwrap();
        fs::write(temp.path().join("bytes.json"), [0xff, 0xfe, 0x00]).unwrap();
        let dir = DataDir::open(temp.path());
        assert!(matches!(
            dir.load("links.json").unwrap(),
            Document::Malformed(_)
        ));
        assert!(matches!(
            dir.load("bytes.json").unwrap(),
            Document::Malformed(_)
        ));
    }

    #[test]
    fn parsed_value_is_returned_as_is() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("library.json"), r#"{"books": []}"#).unwrap();
        let dir = DataDir::open(temp.path());
        match dir.load("library.json").unwrap() {
            Document::Parsed(v) => assert_eq!(v, json!({"books": []})),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn save_creates_directory_and_indents_two_spaces() {
        let temp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(temp.path().join("assets").join("data"));
        let path = dir
            .save("links.json", &[json!({"title": "a", "url": "b"})])
            .unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[\n  {\n    \"title\": \"a\",\n    \"url\": \"b\"\n  }\n]");
    }

    #[test]
    fn save_keeps_object_key_order() {
        let temp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(temp.path());
        let raw = r#"[{"zeta": 1, "alpha": 2}]"#;
        fs::write(temp.path().join("articles.json"), raw).unwrap();
        let items = match dir.load("articles.json").unwrap() {
            Document::Parsed(Value::Array(items)) => items,
            other => panic!("unexpected {:?}", other),
        };
        dir.save("articles.json", &items).unwrap();
        let text = fs::read_to_string(temp.path().join("articles.json")).unwrap();
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
    }

    #[test]
    fn write_failure_is_reported_with_the_target_path() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("links.json")).unwrap();
        let dir = DataDir::open(temp.path());
        let err = dir.save("links.json", &[json!({"title": "a"})]).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        let shown = err.to_string();
        assert!(shown.starts_with("failed to write "));
        assert!(shown.ends_with("links.json"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(temp.path().join("links.json").is_dir());
    }

    #[test]
    fn unreadable_path_is_an_error_not_missing() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("data");
        fs::write(&blocker, "plain file").unwrap();
        let dir = DataDir::open(&blocker);
        let err = dir.load("links.json").unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(dir.save("links.json", &[]).is_err());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "plain file");
    }
}
