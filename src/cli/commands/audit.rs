use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::{
    args::AuditArgs,
    exit_status::ExitStatus,
    report::{count_noun, print, print_verbose},
};
use crate::{
    config::{ConfigLoadResult, load_config, validate_files},
    core::{KeyMode, TranslationKeyAuditor},
};

/// Settings for one audit run after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    pub dir: PathBuf,
    pub files: Vec<String>,
    pub mode: KeyMode,
}

impl AuditSettings {
    /// Command-line values win over the config file.
    ///
    /// A relative directory from the command line is taken relative to `cwd`;
    /// one from the config file is taken relative to the config file.
    pub fn resolve(args: &AuditArgs, loaded: &ConfigLoadResult, cwd: &Path) -> Result<Self> {
        let dir = match &args.dir {
            Some(dir) => cwd.join(dir),
            None => loaded
                .base_dir(cwd)
                .join(&loaded.config.translations_dir),
        };

        let files = if args.files.is_empty() {
            loaded.config.files.clone()
        } else {
            validate_files(&args.files)?;
            args.files.clone()
        };

        let mode = if args.nested || loaded.config.nested {
            KeyMode::Nested
        } else {
            KeyMode::TopLevel
        };

        Ok(Self { dir, files, mode })
    }
}

pub fn audit(args: &AuditArgs) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    let settings = AuditSettings::resolve(args, &loaded, &cwd)?;
    let file_count = settings.files.len();

    let auditor = TranslationKeyAuditor::new(settings.dir, settings.files).with_mode(settings.mode);

    if args.verbose {
        match &loaded.path {
            Some(path) => print_verbose(format!("using config {}", path.display())),
            None => print_verbose("no config file found, using defaults"),
        }
        print_verbose(format!(
            "auditing {} in {}",
            count_noun(file_count, "file", "files"),
            auditor.dir().display()
        ));
    }

    let audit = auditor.run()?;

    if args.verbose {
        for file in &audit.files {
            print_verbose(format!(
                "loaded {} ({})",
                file.name,
                count_noun(file.len(), "key", "keys")
            ));
        }
        print_verbose(format!(
            "{} across all files",
            count_noun(audit.universe.len(), "distinct key", "distinct keys")
        ));
    }

    print(&audit.report, args.format)?;

    Ok(ExitStatus::for_audit(&audit.report, args.strict))
}
