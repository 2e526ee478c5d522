//! Diagnostic presentation for the CLI.
//!
//! Two renderings are offered: a compact text block with a caret under the
//! offending token, and a graphical one produced by `miette`.

use miette::{GraphicalReportHandler, GraphicalTheme};
use unicode_width::UnicodeWidthStr;

use crate::diagnostics::{CompileError, SourcedDiagnostic};

// === Constants ===

/// Indentation of the context line under each compact diagnostic.
const CONTEXT_INDENT: &str = "    ";
const CONTEXT_LABEL: &str = "context: ";

// === Compact ===

/// Renders one error as its summary line followed by the context snippet and a
/// caret pointing at the offending token.
pub fn format_compact(error: &CompileError, source: &str) -> String {
    let mut out = error.format();
    if error.context.is_empty() {
        return out;
    }

    // Terminal columns between the start of the snippet and the token.
    let lead: String = source
        .chars()
        .skip(error.context_start)
        .take(error.offset.saturating_sub(error.context_start))
        .collect();
    let lead_width = lead.replace('\n', "\\n").width();

    out.push('\n');
    out.push_str(CONTEXT_INDENT);
    out.push_str(CONTEXT_LABEL);
    out.push_str(&error.context);
    out.push('\n');
    out.push_str(CONTEXT_INDENT);
    out.push_str(&" ".repeat(CONTEXT_LABEL.len() + lead_width));
    out.push('^');
    out
}

/// Renders the whole diagnostic list under a `DIAGNOSTICS` heading.
pub fn format_block(errors: &[CompileError], source: &str) -> String {
    if errors.is_empty() {
        return "No diagnostics.".to_string();
    }
    let mut out = format!("DIAGNOSTICS ({})", errors.len());
    for error in errors {
        out.push('\n');
        out.push_str(&format_compact(error, source));
    }
    out
}

// === Graphical ===

/// Renders one error with `miette`'s graphical report handler.
pub fn format_fancy(error: &CompileError, name: &str, source: &str, color: bool) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let diagnostic = SourcedDiagnostic::new(error, name, source);
    let mut out = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .render_report(&mut out, &diagnostic)
        .is_err()
    {
        // Rendering into a String only fails on a formatter error; fall back.
        return error.format();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::translate;

    #[test]
    fn test_caret_sits_under_token() {
        let source = "ab?";
        let result = translate(source);
        let error = result.errors.iter().find(|e| e.token_text == "?").unwrap();
        let rendered = format_compact(error, source);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[LEX001] line 1, col 3 (idx 2): Illegal character '?'");
        assert_eq!(lines[1], "    context: ab?");
        let caret = lines[2].find('^').unwrap();
        let token = lines[1].find('?').unwrap();
        assert_eq!(caret, token);
    }

    #[test]
    fn test_caret_ignores_zero_width_marks() {
        // ka + suku: the sign has no width of its own
        let source = "\u{A98F}\u{A9B8}?";
        let result = translate(source);
        let rendered = format_compact(&result.errors[0], source);
        let caret_line = rendered.lines().nth(2).unwrap();
        let lead = caret_line.len() - 1 - CONTEXT_INDENT.len() - CONTEXT_LABEL.len();
        assert_eq!(lead, "\u{A98F}\u{A9B8}".width());
    }

    #[test]
    fn test_block_heading_counts_errors() {
        let result = translate("x");
        let block = format_block(&result.errors, "x");
        assert!(block.starts_with("DIAGNOSTICS (2)"));
        assert_eq!(format_block(&[], ""), "No diagnostics.");
    }

    #[test]
    fn test_fancy_names_the_code() {
        let result = translate("x");
        let rendered = format_fancy(&result.errors[0], "<input>", "x", false);
        assert!(rendered.contains("LEX001"));
        assert!(rendered.contains("<input>"));
    }
}
