//! The Aksara Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::Read;
use std::process;

use clap::Parser;

use crate::cli::args::{AksaraArgs, Command, InputArgs};
use crate::cli::output::{OutputStyle, StderrSink};
use crate::diagnostics::AksaraError;
use crate::engine::{read_source, TranslateOptions, Translation, Translator};
use crate::repl;

pub mod args;
pub mod diagnostics;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = AksaraArgs::parse();

    match dispatch(args) {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            output::print_fatal(&e);
            process::exit(1);
        }
    }
}

/// Runs one subcommand and returns the process exit status.
fn dispatch(args: AksaraArgs) -> Result<i32, AksaraError> {
    let options = build_options(&args)?;
    let style = OutputStyle {
        json: args.json,
        fancy: args.fancy,
    };

    match args.command {
        Command::Translate { input } => {
            let source = read_input(&input)?;
            let translation = run_translation(options, &source);
            output::print_translation(&translation, style)?;
        }

        Command::Tokens { input } => {
            let source = read_input(&input)?;
            let options = TranslateOptions {
                include_tokens: true,
                ..options
            };
            let translation = run_translation(options, &source);
            output::print_tokens(translation.tokens.as_deref().unwrap_or_default(), style)?;
        }

        Command::Ast { input } => {
            let source = read_input(&input)?;
            let translation = run_translation(options, &source);
            output::print_tree(&translation.tree, style)?;
        }

        Command::Check { input } => {
            let source = read_input(&input)?;
            let translation = run_translation(options, &source);
            if style.json {
                output::print_json(&translation.errors)?;
            } else {
                output::print_diagnostics(&translation.errors, &source, style.fancy);
            }
            if translation.has_errors() {
                return Ok(1);
            }
        }

        Command::Repl => repl::run_repl(options),
    }

    Ok(0)
}

/// Layers command-line flags over the optional config file.
fn build_options(args: &AksaraArgs) -> Result<TranslateOptions, AksaraError> {
    let mut options = match &args.config {
        Some(path) => TranslateOptions::load(path)?,
        None => TranslateOptions::default(),
    };
    if let Some(window) = args.context_window {
        options.context_window = window;
    }
    if args.debug {
        options.trace = true;
    }
    Ok(options)
}

fn run_translation(options: TranslateOptions, source: &str) -> Translation<'_> {
    let translator = Translator::new(options);
    let mut sink = StderrSink::new();
    translator.translate_with(source, &mut sink)
}

/// Reads the text argument, the `--file` contents, or stdin, in that order.
fn read_input(input: &InputArgs) -> Result<String, AksaraError> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    let source = match &input.file {
        Some(path) => read_source(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| AksaraError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            buffer
        }
    };

    Ok(strip_line_ending(source))
}

/// Drops one trailing `\n` or `\r\n`. Further line endings are content.
fn strip_line_ending(mut source: String) -> String {
    if source.ends_with('\n') {
        source.pop();
        if source.ends_with('\r') {
            source.pop();
        }
    }
    source
}
