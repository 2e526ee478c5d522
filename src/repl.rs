//! Aksara REPL (Read-Eval-Print Loop)
//!
//! Provides an interactive shell that transliterates one line at a time.

use std::io::{self, Write};

use crate::cli::output::{print_diagnostics, StderrSink};
use crate::engine::{TranslateOptions, Translator};

/// REPL state that persists across lines
pub struct ReplState {
    options: TranslateOptions,
    line_number: usize,
}

impl ReplState {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            options,
            line_number: 1,
        }
    }

    pub fn debug(&self) -> bool {
        self.options.trace
    }

    pub fn set_debug(&mut self, on: bool) {
        self.options.trace = on;
    }

    /// Translates one line and prints the result and its diagnostics.
    pub fn eval_line(&mut self, input: &str) {
        let translator = Translator::new(self.options.clone());
        let mut sink = StderrSink::new();
        let translation = translator.translate_with(input, &mut sink);

        println!("{}", translation.latin);
        if translation.has_errors() {
            print_diagnostics(&translation.errors, input, false);
        }
        self.line_number += 1;
    }
}

/// Main REPL entry point
pub fn run_repl(options: TranslateOptions) {
    println!("Aksara REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut repl_state = ReplState::new(options);

    loop {
        print!("aksara[{}]> ", repl_state.line_number);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {
                let line = line.trim_end_matches(['\n', '\r']);

                if line.trim_start().starts_with(':') {
                    match handle_repl_command(line.trim(), &mut repl_state) {
                        ReplCommand::Continue => continue,
                        ReplCommand::Quit => break,
                    }
                }

                if line.trim().is_empty() {
                    continue;
                }
                repl_state.eval_line(line);
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

/// REPL command results
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Continue,
    Quit,
}

/// Handle special REPL commands that start with ':'
fn handle_repl_command(command: &str, state: &mut ReplState) -> ReplCommand {
    let words: Vec<_> = command.split_whitespace().collect();
    match words.as_slice() {
        [":help"] | [":h"] => {
            println!("Aksara REPL Commands:");
            println!("  :help, :h         Show this help");
            println!("  :quit, :q         Exit the REPL");
            println!("  :debug on|off     Trace every phase to stderr");
            println!();
            println!("Any other line is transliterated.");
            ReplCommand::Continue
        }
        [":quit"] | [":q"] => {
            println!("Goodbye!");
            ReplCommand::Quit
        }
        [":debug", "on"] => {
            state.set_debug(true);
            println!("Debug mode ON");
            ReplCommand::Continue
        }
        [":debug", "off"] => {
            state.set_debug(false);
            println!("Debug mode OFF");
            ReplCommand::Continue
        }
        [":debug"] => {
            println!("Debug mode is {}", if state.debug() { "ON" } else { "OFF" });
            ReplCommand::Continue
        }
        _ => {
            println!(
                "Unknown command: {}. Type :help for available commands.",
                command
            );
            ReplCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_toggles() {
        let mut state = ReplState::new(TranslateOptions::default());
        assert!(!state.debug());
        assert_eq!(handle_repl_command(":debug on", &mut state), ReplCommand::Continue);
        assert!(state.debug());
        assert_eq!(handle_repl_command(":debug   off", &mut state), ReplCommand::Continue);
        assert!(!state.debug());
    }

    #[test]
    fn test_quit_and_unknown_commands() {
        let mut state = ReplState::new(TranslateOptions::default());
        assert_eq!(handle_repl_command(":q", &mut state), ReplCommand::Quit);
        assert_eq!(handle_repl_command(":quit", &mut state), ReplCommand::Quit);
        assert_eq!(handle_repl_command(":frobnicate", &mut state), ReplCommand::Continue);
    }

    #[test]
    fn test_eval_line_advances_line_number() {
        let mut state = ReplState::new(TranslateOptions::default());
        state.eval_line("\u{A98F}");
        state.eval_line("x");
        assert_eq!(state.line_number, 3);
    }
}
