//! Report formatting and printing utilities.
//!
//! The JSON rendering lives in `core::audit` so library users get the same
//! output. This module adds the human-readable format and the stderr
//! diagnostics. Separate from core logic to allow keyaudit to be used as a
//! library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::args::OutputFormat;
use crate::core::{MissingKeysReport, write_report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the report to stdout in the requested format.
pub fn print(report: &MissingKeysReport, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => write_report(report, &mut stdout),
        OutputFormat::Text => {
            report_text_to(report, &mut stdout);
            Ok(())
        }
    }
}

/// Print the report in human-readable form to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_text_to<W: Write>(report: &MissingKeysReport, writer: &mut W) {
    let name_width = report
        .files
        .iter()
        .map(|f| f.file.width())
        .max()
        .unwrap_or(0);

    for entry in &report.files {
        if entry.missing.is_empty() {
            let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), entry.file);
            continue;
        }

        let padding = " ".repeat(name_width - entry.file.width());
        let _ = writeln!(
            writer,
            "{} {}{}  {}",
            FAILURE_MARK.red(),
            entry.file.bold(),
            padding,
            format!("{} missing", entry.missing.len()).yellow()
        );
        for key in &entry.missing {
            let _ = writeln!(writer, "    {}", key);
        }
    }

    print_summary(report, writer);
}

fn print_summary<W: Write>(report: &MissingKeysReport, writer: &mut W) {
    let total = report.files.len();
    let files = count_noun(total, "translation file", "translation files");

    let _ = writeln!(writer);
    if report.is_complete() {
        let _ = writeln!(
            writer,
            "{}",
            format!("Checked {} - no missing keys", files).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{}",
            format!(
                "{} of {} missing {}",
                report.incomplete_count(),
                files,
                count_noun(report.missing_count(), "key", "keys")
            )
            .bold()
        );
    }
}

/// Format a count with the matching singular or plural noun.
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Print a verbose progress line to stderr.
pub fn print_verbose(message: impl AsRef<str>) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "info:".dimmed(), message.as_ref());
}
