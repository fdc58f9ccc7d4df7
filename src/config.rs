use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keyauditrc.json";

pub const DEFAULT_TRANSLATIONS_DIR: &str = "assets/translations";

pub const DEFAULT_FILES: &[&str] = &["en.json", "tr.json", "fr.json", "de.json", "ru.json"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_dir", alias = "dir")]
    pub translations_dir: String,
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    #[serde(default)]
    pub nested: bool,
}

fn default_translations_dir() -> String {
    DEFAULT_TRANSLATIONS_DIR.to_string()
}

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|f| f.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_dir: default_translations_dir(),
            files: default_files(),
            nested: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the file list is empty or holds an entry that is not
    /// a plain, unique `*.json` file name.
    pub fn validate(&self) -> Result<()> {
        validate_files(&self.files)
    }
}

/// Check a list of translation file names.
///
/// The report is keyed by file name, so names must be unique and must not
/// point outside the translations directory.
pub fn validate_files(files: &[String]) -> Result<()> {
    if files.is_empty() {
        bail!("'files' must list at least one translation file");
    }

    let mut seen = HashSet::new();
    for file in files {
        if file.contains('/') || file.contains('\\') {
            bail!(
                "Invalid translation file name \"{}\": expected a plain file name inside the translations directory",
                file
            );
        }
        if !file.ends_with(".json") || file == ".json" {
            bail!(
                "Invalid translation file name \"{}\": expected a .json file",
                file
            );
        }
        if !seen.insert(file.as_str()) {
            bail!("Translation file \"{}\" is listed more than once", file);
        }
    }

    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` if using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir<'a>(&'a self, start_dir: &'a Path) -> &'a Path {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(start_dir)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
