use showdown_cli::run;
use std::io::Write;
use std::process::Command;

#[test]
fn help_lists_commands() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["showdown", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);
    let s = String::from_utf8_lossy(&out);
    for cmd in ["best", "classify", "rank", "deal", "cfg"] {
        assert!(s.contains(cmd), "help should mention {}", cmd);
    }
}

#[test]
fn unknown_command_prints_usage() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["showdown", "shuffle"], &mut out, &mut err);
    assert_eq!(code, 2);
    let e = String::from_utf8_lossy(&err);
    assert!(e.contains("Commands:"));
    assert!(e.contains("showdown --help"));
}

#[test]
fn missing_input_file_is_an_error() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        [
            "showdown",
            "best",
            "--duplicates",
            "allow",
            "--input",
            "/nonexistent/hands.txt",
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("cannot read"));
}

fn showdown_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_showdown"));
    for var in [
        "SHOWDOWN_CONFIG",
        "SHOWDOWN_DUPLICATES",
        "SHOWDOWN_DECKS",
        "SHOWDOWN_SEED",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn binary_exits_with_run_code() {
    let output = showdown_bin()
        .args(["best", "A♤ A♡ A♧ K♢ K♤", "9♤ 9♡"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid hand length"), "{}", stderr);
}

#[test]
fn env_duplicates_policy_applies_without_flag() {
    let output = showdown_bin()
        .env("SHOWDOWN_DUPLICATES", "reject")
        .args(["best", "8♤ 8♡ 8♧ 8♢ 8♤", "2♤ 3♡ 4♧ 5♢ 7♤"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate card"));

    let output = showdown_bin()
        .env("SHOWDOWN_DUPLICATES", "reject")
        .args([
            "best",
            "--duplicates",
            "allow",
            "8♤ 8♡ 8♧ 8♢ 8♤",
            "2♤ 3♡ 4♧ 5♢ 7♤",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "8♤ 8♡ 8♧ 8♢ 8♤\n");
}

#[test]
fn config_file_supplies_deal_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "decks = 3\nseed = 11").unwrap();

    let output = showdown_bin()
        .env("SHOWDOWN_CONFIG", file.path())
        .args(["deal", "--hands", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Seed: 11\nDecks: 3\n"), "{}", stdout);
}

#[test]
fn cfg_reports_sources() {
    let output = showdown_bin()
        .env("SHOWDOWN_DECKS", "4")
        .arg("cfg")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["decks"]["value"], 4);
    assert_eq!(v["decks"]["source"], "env");
    assert_eq!(v["duplicates"]["source"], "default");
}

#[test]
fn invalid_env_config_is_reported() {
    let output = showdown_bin()
        .env("SHOWDOWN_DECKS", "12")
        .arg("cfg")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("decks must be between 1 and 8"));
}
