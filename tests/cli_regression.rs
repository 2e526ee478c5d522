// Regression tests for the `aksara` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

mod common;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use common::*;

fn aksara() -> Command {
    Command::cargo_bin("aksara").unwrap()
}

#[test]
fn cli_translates_positional_text() {
    aksara()
        .arg("translate")
        .arg(sample_sentence())
        .assert()
        .success()
        .stdout(contains("haku mangan sega"))
        .stdout(contains("DIAGNOSTICS").not());
}

#[test]
fn cli_translates_stdin() {
    aksara()
        .arg("translate")
        .write_stdin(format!("{}\n", sample_sentence()))
        .assert()
        .success()
        .stdout("haku mangan sega\n");
}

#[test]
fn cli_keeps_blank_lines_after_the_first() {
    aksara()
        .arg("translate")
        .write_stdin(format!("{KA}\n\n"))
        .assert()
        .success()
        .stdout("ka \n");

    aksara()
        .arg("translate")
        .write_stdin(format!("{KA}\r\n"))
        .assert()
        .success()
        .stdout("ka\n");
}

#[test]
fn cli_check_fails_on_diagnostics() {
    let source = [SUKU, KA].concat();
    aksara()
        .args(["check", source.as_str()])
        .assert()
        .code(1)
        .stdout(contains("DIAGNOSTICS (2)"))
        .stdout(contains("[ORT001] line 1, col 1 (idx 0)"))
        .stdout(contains("[SYN002]"));
}

#[test]
fn cli_check_passes_clean_text() {
    let source = sample_sentence();
    aksara()
        .args(["check", source.as_str()])
        .assert()
        .success()
        .stdout(contains("No diagnostics."));
}

#[test]
fn cli_emits_json() {
    let source = [KA, SUKU].concat();
    let output = aksara()
        .args(["--json", "translate", source.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["latin"], "ku");
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn cli_prints_tree() {
    let source = [KA, SUKU, " ", I].concat();
    aksara()
        .args(["ast", source.as_str()])
        .assert()
        .success()
        .stdout(contains("└── PROGRAM ('ku i')"))
        .stdout(contains("├── WORD ('ku')"))
        .stdout(contains("SPACE (' ')"));
}

#[test]
fn cli_prints_tokens() {
    let source = [KA, PANGKON, TA].concat();
    aksara()
        .args(["tokens", source.as_str()])
        .assert()
        .success()
        .stdout(contains("KIND"))
        .stdout(contains("SUBJOINED_CONSONANT"));
}

#[test]
fn cli_debug_traces_to_stderr() {
    aksara()
        .args(["--debug", "translate", KA])
        .assert()
        .success()
        .stdout(contains("ka"))
        .stderr(contains("=== TOKENS ===").and(contains("=== PARSE ===")));
}

#[test]
fn cli_context_window_flag() {
    let source = format!("{}?", KA.repeat(10));
    aksara()
        .args(["--context-window", "2", "check", source.as_str()])
        .assert()
        .code(1)
        .stdout(contains(format!("context: {KA}{KA}?")));
}

#[test]
fn cli_reports_missing_file() {
    aksara()
        .args(["translate", "--file", "tests/does-not-exist.jv"])
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("does-not-exist.jv")));
}

#[test]
fn cli_reports_bad_config() {
    let config = std::env::temp_dir().join("aksara-bad-config.json");
    std::fs::write(&config, "{ not json").unwrap();

    aksara()
        .args(["--config", config.to_str().unwrap(), "translate", KA])
        .assert()
        .failure()
        .stderr(contains("invalid configuration"));

    let _ = std::fs::remove_file(config);
}

#[test]
fn cli_repl_session() {
    aksara()
        .arg("repl")
        .write_stdin(format!(":debug on\n{KA}{SUKU}\n:quit\n"))
        .assert()
        .success()
        .stdout(contains("Debug mode ON").and(contains("ku")).and(contains("Goodbye!")))
        .stderr(contains("=== RESULT ==="));
}
