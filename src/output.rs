//! CLI output formatting for both pipeline stages.
//!
//! Each stage has a `format_*` function that returns lines (pure, easy to
//! test) and a `print_*` wrapper that writes them to stdout.
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 New Beginnings
//!     Source: 2015-05-28-hi-folks/index.md
//!     Date: 2015-05-28
//! 002 /404/
//!     Source: 404.md
//!     Excluded: 404 page
//!
//! Config
//!     config.toml
//! ```
//!
//! Pages are shown in display order, so the numbering of listed pages
//! matches their position on the index.
//!
//! ## Generate
//!
//! ```text
//! 001 New Beginnings → /blog/2015-05-28-hi-folks/
//! 002 Hello World → /blog/2015-05-01-hello-world/
//!
//! Generated index.html: 2 listed, 1 excluded
//! ```

use crate::config::CONFIG_FILE;
use crate::generate::GenerateReport;
use crate::index::{display_order, exclusion};
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output: every page in display order with its source,
/// date and, for pages that will not be listed, the reason.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    if manifest.pages.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, page) in display_order(&manifest.pages).into_iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.label()));
        if !page.source.is_empty() {
            lines.push(format!("    Source: {}", page.source));
        }
        if let Some(date) = page.date {
            lines.push(format!("    Date: {}", date.format("%Y-%m-%d")));
        }
        if let Some(reason) = exclusion(page) {
            lines.push(format!("    Excluded: {}", reason));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join(CONFIG_FILE).exists() {
        lines.push(format!("    {}", CONFIG_FILE));
    } else {
        lines.push("    (defaults)".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: the links as they appear on the index.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{} {} → {}", format_index(i + 1), e.label, e.target))
        .collect();

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let file_name = report
        .index_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.index_path.display().to_string());
    lines.push(format!(
        "Generated {}: {} listed, {} excluded",
        file_name,
        report.entries.len(),
        report.excluded
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
