use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::core::error::{AuditError, Result};

/// How keys are read out of a localization file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyMode {
    /// Only the keys of the top-level object count.
    #[default]
    TopLevel,
    /// Nested objects are flattened into dot-separated key paths.
    Nested,
}

/// A parsed localization file.
///
/// `name` is the file name as listed (e.g. `tr.json`) and is what the report
/// is keyed by. Entries keep the order they appear in the file.
#[derive(Debug, Clone)]
pub struct LocalizationFile {
    pub name: String,
    pub path: PathBuf,
    pub entries: Map<String, Value>,
}

impl LocalizationFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            entries: Map::new(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read and parse every listed file from `dir`, in order.
///
/// Stops at the first file that cannot be loaded.
pub fn load_files<S: AsRef<str>>(
    dir: &Path,
    names: &[S],
    mode: KeyMode,
) -> Result<Vec<LocalizationFile>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            parse_json_file(&dir.join(name), name, mode)
        })
        .collect()
}

pub fn parse_json_file(path: &Path, name: &str, mode: KeyMode) -> Result<LocalizationFile> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AuditError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AuditError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let content = String::from_utf8(bytes).map_err(|source| AuditError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let json: Value = serde_json::from_str(&content).map_err(|source| AuditError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let map = match json {
        Value::Object(map) => map,
        other => {
            return Err(AuditError::NotAnObject {
                path: path.to_path_buf(),
                found: json_type_name(&other),
            });
        }
    };

    let mut file = LocalizationFile::new(name, path);
    match mode {
        KeyMode::TopLevel => file.entries = map,
        KeyMode::Nested => {
            for (key, value) in map {
                flatten_json(value, key, &mut file.entries);
            }
        }
    }
    Ok(file)
}

fn flatten_json(value: Value, prefix: String, result: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            // An empty object has no leaves and contributes no keys.
            for (key, val) in map {
                flatten_json(val, format!("{}.{}", prefix, key), result);
            }
        }
        leaf => {
            result.insert(prefix, leaf);
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
