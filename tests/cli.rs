use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const TOC: &str = r#"<ol class="chapter"><li class="chapter-item "><a href="a.html">A</a></li><li class="chapter-item "><a href="b.html">B</a></li><li class="chapter-item "><a href="guide/c.html">C</a></li></ol>"#;

fn write_toc(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("toc.html");
    fs::write(&path, TOC).expect("write toc");
    path
}

fn scrollbox(args: &[&str]) -> Output {
    Command::cargo_bin("scrollbox")
        .expect("scrollbox binary")
        .env_remove("SCROLLBOX_LOG")
        .args(args)
        .output()
        .expect("run scrollbox")
}

fn summary(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.lines().last().unwrap_or_default().to_string()
}

#[test]
fn renders_active_page() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let toc = write_toc(&tmp);
    let output = scrollbox(&[
        toc.to_string_lossy().as_ref(),
        "https://docs.example/book/b.html",
    ]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"<a href="b.html" class="active">B</a>"#), "{stdout}");
    assert_eq!(
        summary(&output),
        "location=https://docs.example/book/b.html active=b.html scroll=0 restore=into-view"
    );
}

#[test]
fn click_carries_scroll_offset_to_next_page() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let toc = write_toc(&tmp);
    let output = scrollbox(&[
        toc.to_string_lossy().as_ref(),
        "https://docs.example/book/a.html",
        "--scroll",
        "42",
        "--click",
        "guide/c.html",
    ]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"<a href="../a.html">A</a>"#), "{stdout}");
    assert_eq!(
        summary(&output),
        "location=https://docs.example/book/guide/c.html active=../guide/c.html scroll=42 restore=restored"
    );
}

#[test]
fn unknown_page_is_left_untouched() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let toc = write_toc(&tmp);
    let output = scrollbox(&[
        toc.to_string_lossy().as_ref(),
        "https://docs.example/book/missing.html",
    ]);

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        summary(&output),
        "location=https://docs.example/book/missing.html active=- scroll=0 restore=untouched"
    );
}

#[test]
fn missing_arguments_exit_with_usage() {
    let output = scrollbox(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
}

#[test]
fn missing_toc_file_is_a_runtime_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("nope.html");
    let output = scrollbox(&[
        missing.to_string_lossy().as_ref(),
        "https://docs.example/book/a.html",
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn clicking_an_unknown_link_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let toc = write_toc(&tmp);
    let output = scrollbox(&[
        toc.to_string_lossy().as_ref(),
        "https://docs.example/book/a.html",
        "--click",
        "nowhere.html",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no sidebar link"));
}

#[test]
fn log_level_comes_from_the_environment() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let toc = write_toc(&tmp);
    let args = [
        toc.to_string_lossy().into_owned(),
        "https://docs.example/book/b.html".to_string(),
    ];

    let quiet = scrollbox(&[args[0].as_str(), args[1].as_str()]);
    assert!(quiet.status.success(), "{quiet:?}");
    assert!(quiet.stderr.is_empty(), "{}", String::from_utf8_lossy(&quiet.stderr));

    let verbose = Command::cargo_bin("scrollbox")
        .expect("scrollbox binary")
        .env("SCROLLBOX_LOG", "sidebar=debug")
        .args(&args)
        .output()
        .expect("run scrollbox");
    assert!(verbose.status.success(), "{verbose:?}");
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("DEBUG"), "{stderr}");
    assert!(stderr.contains("active entry"), "{stderr}");
    // Diagnostics never leak into the rendered output.
    assert!(!String::from_utf8_lossy(&verbose.stdout).contains("active entry"));
}
