//! End-to-end tests for the shellquote binary.

use assert_cmd::Command;

fn shellquote() -> Command {
    Command::cargo_bin("shellquote").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_help_works() {
    shellquote().arg("--help").assert().success();
}

#[test]
fn test_quote_words() {
    shellquote()
        .args(["quote", "--", "-a", "file name.txt", "$HOME", "it's $HOME"])
        .assert()
        .success()
        .stdout("-a \"file name.txt\" '$HOME' \"it's \\$HOME\"\n");
}

#[test]
fn test_quote_no_words() {
    shellquote().arg("quote").assert().success().stdout("\n");
}

#[test]
fn test_json_input_flag() {
    shellquote()
        .args(["json", "--input", r#"[["-a", "-b"], "file name.txt"]"#])
        .assert()
        .success()
        .stdout("-a -b \"file name.txt\"\n");
}

#[test]
fn test_json_from_stdin() {
    shellquote()
        .arg("json")
        .write_stdin(r#"["foo", ["bar baz"]]"#)
        .assert()
        .success()
        .stdout("foo \"bar baz\"\n");
}

#[test]
fn test_json_report() {
    let out = stdout_of(shellquote().args(["json", "--input", r#"["$x"]"#, "--format", "json"]));

    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["result"], "'$x'");
    assert_eq!(report["words"][0]["style"], "single");
}

#[test]
fn test_json_strict_rejects_number() {
    let raw = shellquote()
        .args(["json", "--input", r#"["a", 1]"#])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8_lossy(&raw);
    assert!(stderr.contains("invalid arguments"));
    assert!(stderr.contains("$[1]"));
}

#[test]
fn test_json_coerce_accepts_number() {
    shellquote()
        .args(["json", "--input", r#"["-n", 1]"#, "--coerce"])
        .assert()
        .success()
        .stdout("-n 1\n");
}

#[test]
fn test_json_malformed() {
    shellquote()
        .args(["json", "--input", "[1,"])
        .assert()
        .failure()
        .stdout("");
}

/// Words read back by `sh` must match the words that went in.
#[cfg(unix)]
#[test]
fn test_sh_reads_back_words() {
    let words = [
        "plain",
        "",
        "with space",
        "it's",
        "$HOME",
        "`id`",
        "a\"b\\c",
        "it's $HOME",
        "don't \"quote\" `me` \\here",
        "multi\nline",
        "tab\tand*glob?",
        "café",
    ];

    let script = format!("printf '[%s]' {}", shellquote::join_words(words));
    let output = std::process::Command::new("sh")
        .arg("-c")
        .arg(&script)
        .output()
        .unwrap();

    assert!(output.status.success(), "sh failed on: {}", script);
    let expected: String = words.iter().map(|w| format!("[{}]", w)).collect();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}
