//! Keyaudit - missing key finder for localization JSON files
//!
//! Keyaudit loads a set of translation files (one JSON object per locale),
//! computes the union of their keys and reports, per file, the keys that the
//! other files define but this one does not.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Loading, key universe and missing key computation

pub mod cli;
pub mod config;
pub mod core;
