//! Localization file parsers.
//!
//! - `json`: JSON translation files, flat or nested

pub mod json;
