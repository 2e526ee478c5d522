//! Handles all user-facing output for the CLI.
//!
//! Pretty-printing, colorizing and JSON generation live here so every command
//! presents results the same way.

use std::io::{IsTerminal, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::diagnostics::{format_block, format_compact, format_fancy};
use crate::diagnostics::{AksaraError, CompileError};
use crate::engine::Translation;
use crate::syntax::{SyntaxNode, Token};
use crate::trace::TraceSink;

/// How results should be presented.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputStyle {
    pub json: bool,
    pub fancy: bool,
}

// ============================================================================
// TRACE SINK
// ============================================================================

/// StderrSink: writes trace lines to stderr, highlighting phase banners.
pub struct StderrSink {
    stream: StandardStream,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            stream: StandardStream::stderr(color_choice(std::io::stderr().is_terminal())),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for StderrSink {
    fn emit(&mut self, text: &str) {
        let mut spec = ColorSpec::new();
        if text.starts_with("===") {
            spec.set_fg(Some(Color::Yellow)).set_bold(true);
        } else {
            spec.set_dimmed(true);
        }
        let _ = self.stream.set_color(&spec);
        let _ = writeln!(self.stream, "{}", text);
        let _ = self.stream.reset();
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints the Latin text followed by its diagnostics.
pub fn print_translation(translation: &Translation<'_>, style: OutputStyle) -> Result<(), AksaraError> {
    if style.json {
        return print_json(translation);
    }
    println!("{}", translation.latin);
    if translation.has_errors() {
        println!();
        print_diagnostics(&translation.errors, translation.source, style.fancy);
    }
    Ok(())
}

/// Prints the token stream as a table.
pub fn print_tokens(tokens: &[Token<'_>], style: OutputStyle) -> Result<(), AksaraError> {
    if style.json {
        return print_json(&tokens);
    }
    let mut stdout = StandardStream::stdout(color_choice(std::io::stdout().is_terminal()));
    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    let _ = writeln!(stdout, "{:<20} {:<10} {:<6} POSITION", "KIND", "RAW", "LATIN");
    let _ = stdout.reset();
    for token in tokens {
        let _ = writeln!(stdout, "{}", token.table_row());
    }
    Ok(())
}

/// Prints the syntax tree with box-drawing connectors.
pub fn print_tree(tree: &SyntaxNode, style: OutputStyle) -> Result<(), AksaraError> {
    if style.json {
        return print_json(tree);
    }
    print!("{}", tree.render_tree());
    Ok(())
}

/// Prints every diagnostic, graphically when `fancy` is set.
pub fn print_diagnostics(errors: &[CompileError], source: &str, fancy: bool) {
    let color = std::io::stdout().is_terminal();
    if fancy {
        for error in errors {
            println!("{}", format_fancy(error, "<input>", source, color));
        }
        return;
    }

    let mut stdout = StandardStream::stdout(color_choice(color));
    if errors.is_empty() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
        let _ = writeln!(stdout, "{}", format_block(errors, source));
        let _ = stdout.reset();
        return;
    }

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(stdout, "DIAGNOSTICS ({})", errors.len());
    for error in errors {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
        let rendered = format_compact(error, source);
        let mut lines = rendered.lines();
        if let Some(summary) = lines.next() {
            let _ = writeln!(stdout, "{}", summary);
        }
        let _ = stdout.reset();
        for line in lines {
            let _ = writeln!(stdout, "{}", line);
        }
    }
}

/// Reports a fatal error on stderr.
pub fn print_fatal(error: &AksaraError) {
    let mut stderr = StandardStream::stderr(color_choice(std::io::stderr().is_terminal()));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "Error: ");
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", error);
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AksaraError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
