//! CLI output formatting.
//!
//! Format functions are pure (no I/O, no side effects) and return strings;
//! `print_*` wrappers write them to stdout. JSON output is handled by the
//! binary serializing the reports directly, so everything here is the
//! human-readable rendering.
//!
//! ```text
//! photos/a.png 200x200 → 100x100 out/a.png
//! photos/b.jpg 640x480 → 320x240 out/b.jpg
//! Processed 2 images
//! ```

use crate::batch::TransformReport;

/// One line per file: input, size before and after, output.
pub fn format_report(report: &TransformReport) -> String {
    format!(
        "{} {}x{} → {}x{} {}",
        report.input.display(),
        report.original.0,
        report.original.1,
        report.result.0,
        report.result.1,
        report.output.display(),
    )
}

/// Closing count line. Singular for one image, plural otherwise.
pub fn format_summary(reports: &[TransformReport]) -> String {
    match reports.len() {
        1 => "Processed 1 image".to_string(),
        n => format!("Processed {n} images"),
    }
}

/// All report lines plus the summary.
pub fn format_reports(reports: &[TransformReport]) -> Vec<String> {
    let mut lines: Vec<String> = reports.iter().map(format_report).collect();
    lines.push(format_summary(reports));
    lines
}

/// Write the human-readable rendering to stdout.
pub fn print_reports(reports: &[TransformReport]) {
    for line in format_reports(reports) {
        println!("{line}");
    }
}
