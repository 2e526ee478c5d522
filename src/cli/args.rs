//! Defines the command-line arguments and subcommands for the Aksara CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "aksara",
    version,
    about = "Transliterates Javanese script (Aksara Jawa) to Latin, with position-tracked diagnostics."
)]
pub struct AksaraArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Render diagnostics graphically with source labels.
    #[arg(long, global = true)]
    pub fancy: bool,

    /// Trace every phase to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Radius, in characters, of the context stored with each diagnostic.
    #[arg(long, global = true, value_name = "CHARS")]
    pub context_window: Option<usize>,

    /// JSON file with translation options. Flags override its values.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Where the text to translate comes from. Reads stdin when neither is given.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// The Javanese text to translate.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transliterate text and report diagnostics.
    Translate {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the token stream.
    Tokens {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the syntax tree.
    Ast {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Report diagnostics only. Exits with status 1 when there are any.
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Start an interactive session.
    Repl,
}
