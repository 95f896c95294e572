//! Plain-text rendering of diagnostics.
//!
//! ```text
//! error[E2001]: left side cannot be scalar in division
//!   --> 3:13
//!    |
//!  3 |     int y = 5 / x;
//!    |             ^^^^^ `int` / `int<meter>`
//!   = note: ...
//! ```

use std::fmt::Write;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// Render one diagnostic against its source text.
///
/// The primary label provides the `-->` position and the quoted source
/// line; secondary labels are listed with their own positions.
pub fn render_plain(diag: &Diagnostic, source: &str, table: &LineOffsetTable) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_diagnostic(&mut out, diag, source, table);
    out
}

/// Render several diagnostics, separated by blank lines.
pub fn render_all<'d>(
    diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
    source: &str,
) -> String {
    let table = LineOffsetTable::build(source);
    diagnostics
        .into_iter()
        .map(|diag| render_plain(diag, source, &table))
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_diagnostic(
    out: &mut String,
    diag: &Diagnostic,
    source: &str,
    table: &LineOffsetTable,
) -> std::fmt::Result {
    writeln!(out, "{}[{}]: {}", diag.severity, diag.code, diag.message)?;

    if let Some(primary) = diag.primary_label() {
        let (line, col) = table.span_start(source, primary.span);
        writeln!(out, "  --> {line}:{col}")?;

        if let Some(text) = table.line_text(source, line) {
            let gutter = line.to_string().len();
            let pad = " ".repeat(gutter);
            let width = table
                .offset_to_line_col(source, primary.span.end)
                .1
                .saturating_sub(col)
                .max(1) as usize;
            writeln!(out, " {pad} |")?;
            writeln!(out, " {line} | {text}")?;
            write!(
                out,
                " {pad} | {}{}",
                " ".repeat(col.saturating_sub(1) as usize),
                "^".repeat(width)
            )?;
            if primary.message.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, " {}", primary.message)?;
            }
        }
    }

    for label in diag.secondary_labels() {
        let (line, col) = table.span_start(source, label.span);
        writeln!(out, "  ::: {line}:{col}: {}", label.message)?;
    }

    for note in &diag.notes {
        writeln!(out, "  = note: {note}")?;
    }

    for suggestion in &diag.suggestions {
        writeln!(out, "  = help: {suggestion}")?;
    }

    Ok(())
}
