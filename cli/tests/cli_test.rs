use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn countryplist(input: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_countryplist"))
        .arg(input)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_exit_success() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("countrytocode.txt");
    fs::write(&input, "United States, US\nCanada & Co, CA\n").unwrap();

    let output = countryplist(&input);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<key>US</key>\n<string>United States</string>\n<key>CA</key>\n<string>Canada &amp; Co</string>\n"
    );
}

#[test]
fn test_exit_malformed_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("countrytocode.txt");
    fs::write(&input, "Chad, TD\nJustAName\n").unwrap();

    let output = countryplist(&input);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<key>TD</key>\n<string>Chad</string>\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
    assert!(stderr.contains("JustAName"), "stderr: {}", stderr);
}

#[test]
fn test_exit_missing_file() {
    let dir = tempdir().unwrap();
    let output = countryplist(&dir.path().join("missing.txt"));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot open"), "stderr: {}", stderr);
}

#[test]
fn test_exit_invalid_utf8_names_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("countrytocode.txt");
    fs::write(&input, b"Chad, TD\n\xffBad, XX\n").unwrap();

    let output = countryplist(&input);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}
