//! Load, shape-check, append and rewrite one category's collection.

use crate::models::{Category, Record};
use serde_json::Value;
use std::path::PathBuf;
use storage::{DataDir, Document, StoreError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("{file} holds a JSON {found}, expected an array; refusing to overwrite it")]
    NotAnArray {
        file: &'static str,
        found: &'static str,
    },
    #[error("failed to encode {0} record: {1}")]
    Encode(Category, #[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What to do when a file parses but its top level is not an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Drop the old value and start a fresh array.
    DiscardNonArray,
    Reject,
}

/// The library file predates the array layout, so a non-array there is
/// treated as an old shape and replaced. Other files have no older shape.
pub fn shape_policy(category: Category) -> ShapePolicy {
    match category {
        Category::Book => ShapePolicy::DiscardNonArray,
        Category::Project | Category::Article | Category::Link => ShapePolicy::Reject,
    }
}

#[derive(Debug, Clone)]
pub struct Appended {
    pub file_name: &'static str,
    pub path: PathBuf,
    pub len: usize,
}

/// Reads the collection for `category`. A missing or unparsable file yields
/// an empty collection; the unparsable content is lost on the next save.
pub fn load(dir: &DataDir, category: Category) -> Result<Vec<Value>, CollectionError> {
    let file = category.file_name();
    let value = match dir.load(file)? {
        Document::Missing => return Ok(Vec::new()),
        Document::Malformed(e) => {
            warn!("{} is not valid JSON ({}); starting an empty collection", file, e);
            return Ok(Vec::new());
        }
        Document::Parsed(v) => v,
    };
    match (value, shape_policy(category)) {
        (Value::Array(items), _) => Ok(items),
        (other, ShapePolicy::DiscardNonArray) => {
            warn!(
                "{} holds a JSON {} instead of an array; discarding it",
                file,
                json_kind(&other)
            );
            Ok(Vec::new())
        }
        (other, ShapePolicy::Reject) => Err(CollectionError::NotAnArray {
            file,
            found: json_kind(&other),
        }),
    }
}

/// Appends `record` to the tail of its collection and rewrites the whole file.
pub fn append<R: Record>(dir: &DataDir, record: &R) -> Result<Appended, CollectionError> {
    let category = R::CATEGORY;
    let entry =
        serde_json::to_value(record).map_err(|e| CollectionError::Encode(category, e))?;
    let mut items = load(dir, category)?;
    items.push(entry);
    let path = dir.save(category.file_name(), &items)?;
    info!(
        "appended {} record; {} now holds {}",
        category,
        category.file_name(),
        items.len()
    );
    Ok(Appended {
        file_name: category.file_name(),
        path,
        len: items.len(),
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
