use crate::models::CleanedJob;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Fields every cleaned record must carry, and whether each is a list of strings.
const REQUIRED_CLEANED_FIELDS: [(&str, bool); 4] = [
    ("title", false),
    ("description", false),
    ("location", false),
    ("skills", true),
];

/// Read a JSON array from `path`. A missing file is not an error: it yields
/// `None` so the caller can report that there is nothing to process.
fn read_array(path: &Path) -> Result<Option<Vec<Value>>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "input file not found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str(&content)? {
        Value::Array(values) => {
            info!(path = %path.display(), records = values.len(), "loaded records");
            Ok(Some(values))
        }
        _ => Err(Error::NotAnArray(path.to_path_buf())),
    }
}

/// Load records of any shape; a missing file loads as empty.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let Some(values) = read_array(path)? else {
        return Ok(Vec::new());
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| Error::InvalidRecord { index, source })
        })
        .collect()
}

/// Load cleaned records for annotation, rejecting the whole batch on the
/// first record that lacks a required field.
pub fn load_cleaned(path: &Path) -> Result<Vec<CleanedJob>> {
    match read_array(path)? {
        Some(values) => cleaned_from_values(values),
        None => Ok(Vec::new()),
    }
}

pub fn cleaned_from_values(values: Vec<Value>) -> Result<Vec<CleanedJob>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            validate_cleaned(index, &value)?;
            serde_json::from_value(value).map_err(|source| Error::InvalidRecord { index, source })
        })
        .collect()
}

fn validate_cleaned(index: usize, value: &Value) -> Result<()> {
    let record = value.as_object().ok_or(Error::NotAnObject { index })?;

    for (field, is_list) in REQUIRED_CLEANED_FIELDS {
        let malformed = |reason| Error::MalformedRecord {
            index,
            field,
            reason,
        };

        let Some(value) = record.get(field) else {
            return Err(malformed("is missing"));
        };

        let well_typed = if is_list {
            value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string))
        } else {
            value.is_string()
        };

        if !well_typed {
            return Err(malformed(if is_list {
                "must be a list of strings"
            } else {
                "must be a string"
            }));
        }
    }

    Ok(())
}
