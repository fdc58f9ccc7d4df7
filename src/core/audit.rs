//! Missing key computation.
//!
//! The key universe is the union of every key seen in any loaded file. A file
//! is missing exactly the keys of the universe it does not define itself.

use std::{
    collections::BTreeSet,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Serialize, Serializer, ser::SerializeMap};

use super::error::Result;
use super::parsers::json::{KeyMode, LocalizationFile, load_files};

/// Union of all keys across the loaded files.
///
/// `BTreeSet<String>` orders by bytes, which for UTF-8 is code-point order.
pub type KeyUniverse = BTreeSet<String>;

/// Missing keys for one file, sorted ascending without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMissingKeys {
    pub file: String,
    pub missing: Vec<String>,
}

/// Mapping from file name to its missing keys.
///
/// Files keep the order in which they were listed. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingKeysReport {
    pub files: Vec<FileMissingKeys>,
}

impl MissingKeysReport {
    pub fn get(&self, file: &str) -> Option<&[String]> {
        self.files
            .iter()
            .find(|f| f.file == file)
            .map(|f| f.missing.as_slice())
    }

    pub fn is_complete(&self) -> bool {
        self.files.iter().all(|f| f.missing.is_empty())
    }

    /// Number of files with at least one missing key.
    pub fn incomplete_count(&self) -> usize {
        self.files.iter().filter(|f| !f.missing.is_empty()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.files.iter().map(|f| f.missing.len()).sum()
    }
}

impl Serialize for MissingKeysReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for entry in &self.files {
            map.serialize_entry(&entry.file, &entry.missing)?;
        }
        map.end()
    }
}

pub fn compute_universe(files: &[LocalizationFile]) -> KeyUniverse {
    files
        .iter()
        .flat_map(|file| file.keys().map(str::to_string))
        .collect()
}

pub fn compute_missing(universe: &KeyUniverse, files: &[LocalizationFile]) -> MissingKeysReport {
    let files = files
        .iter()
        .map(|file| FileMissingKeys {
            file: file.name.clone(),
            missing: universe
                .iter()
                .filter(|key| !file.contains_key(key))
                .cloned()
                .collect(),
        })
        .collect();

    MissingKeysReport { files }
}

/// Render the report as pretty JSON with two-space indentation.
///
/// Non-ASCII characters are written as-is.
pub fn render(report: &MissingKeysReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write the rendered report followed by a newline.
pub fn write_report<W: Write>(report: &MissingKeysReport, writer: &mut W) -> anyhow::Result<()> {
    let rendered = render(report)?;
    writeln!(writer, "{}", rendered)?;
    Ok(())
}

/// Loads a fixed list of localization files from one directory and audits them.
#[derive(Debug, Clone)]
pub struct TranslationKeyAuditor {
    dir: PathBuf,
    files: Vec<String>,
    mode: KeyMode,
}

/// Everything produced by one audit run.
#[derive(Debug)]
pub struct Audit {
    pub files: Vec<LocalizationFile>,
    pub universe: KeyUniverse,
    pub report: MissingKeysReport,
}

impl TranslationKeyAuditor {
    pub fn new(dir: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            files,
            mode: KeyMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: KeyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(&self) -> Result<Vec<LocalizationFile>> {
        load_files(&self.dir, &self.files, self.mode)
    }

    pub fn run(&self) -> Result<Audit> {
        let files = self.load()?;
        let universe = compute_universe(&files);
        let report = compute_missing(&universe, &files);
        Ok(Audit {
            files,
            universe,
            report,
        })
    }
}
