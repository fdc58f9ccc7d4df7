//! CLI argument definitions using clap.
//!
//! Running `keyaudit` with no subcommand audits the translation files. Every
//! option falls back to `.keyauditrc.json` and then to the built-in defaults.
//!
//! ## Commands
//!
//! - (none): Report keys missing from each translation file
//! - `init`: Initialize keyaudit configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub audit: AuditArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON mapping each file to its missing keys
    #[default]
    Json,
    /// Human-readable listing
    Text,
}

#[derive(Debug, Clone, Default, Args)]
pub struct AuditArgs {
    /// Translations directory (overrides config file)
    #[arg(short, long, env = "KEYAUDIT_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Translation file to compare (overrides config file)
    /// Can be specified multiple times: -f en.json -f tr.json
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<String>,

    /// Flatten nested objects into dot-separated keys
    #[arg(long)]
    pub nested: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Exit with status 1 when any file is missing keys
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .keyauditrc.json configuration file
    Init,
}
