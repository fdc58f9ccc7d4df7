//! Core audit engine.
//!
//! Loading is handled by `parsers`, the set arithmetic and rendering by
//! `audit`. Nothing here prints; output belongs to the CLI layer.

pub mod audit;
pub mod error;
pub mod parsers;

pub use audit::{
    Audit, FileMissingKeys, KeyUniverse, MissingKeysReport, TranslationKeyAuditor,
    compute_missing, compute_universe, render, write_report,
};
pub use error::AuditError;
pub use parsers::json::{KeyMode, LocalizationFile, load_files, parse_json_file};
