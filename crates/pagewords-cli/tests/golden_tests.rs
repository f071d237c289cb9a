use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use similar::{ChangeTag, TextDiff};

const REPORTS: [&str; 4] = ["items.txt", "words.txt", "length.txt", "frequency.txt"];

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_wiki() -> PathBuf {
    project_root().join("fixtures").join("wiki")
}

fn golden_dir() -> PathBuf {
    project_root().join("golden")
}

fn update_golden() -> bool {
    std::env::var("UPDATE_GOLDEN").is_ok()
}

fn fresh_out_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create output directory");
    dir
}

fn run_pagewords(wiki: &Path, out_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagewords"))
        .arg(wiki)
        .arg("--out-dir")
        .arg(out_dir)
        .output()
        .expect("Failed to execute pagewords")
}

fn diff_strings(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    out
}

#[test]
fn golden_reports() {
    let out_dir = fresh_out_dir("golden-reports");
    let golden = golden_dir();

    let output = run_pagewords(&fixture_wiki(), &out_dir);
    assert!(
        output.status.success(),
        "pagewords failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for report in REPORTS {
        let actual = fs::read_to_string(out_dir.join(report))
            .unwrap_or_else(|e| panic!("Report {report} was not written: {e}"));
        let golden_path = golden.join(report);

        if update_golden() {
            fs::create_dir_all(&golden).ok();
            fs::write(&golden_path, &actual)
                .unwrap_or_else(|e| panic!("Failed to write golden file {golden_path:?}: {e}"));
            eprintln!("Updated golden file: {golden_path:?}");
            continue;
        }

        let expected = fs::read_to_string(&golden_path).unwrap_or_else(|e| {
            panic!(
                "Golden file {golden_path:?} not found: {e}\n\
                 Hint: Run with UPDATE_GOLDEN=1 to generate golden files"
            )
        });

        if actual != expected {
            let diff = diff_strings(&expected, &actual);
            panic!(
                "Golden test mismatch for {report}:\n\n\
                 {diff}\n\n\
                 Run with UPDATE_GOLDEN=1 to refresh snapshots"
            );
        }
    }
}

#[test]
fn console_summary() {
    let out_dir = fresh_out_dir("console-summary");
    let output = run_pagewords(&fixture_wiki(), &out_dir);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Output is not valid UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "unexpected stdout: {stdout}");
    assert!(lines[0].ends_with("pages"), "first line should be the pages path: {}", lines[0]);
    assert_eq!(lines[1], "Number of different item types:\t6");
    assert_eq!(lines[2], "Number of different words:\t21");
}

#[test]
fn broken_page_is_logged_not_fatal() {
    let out_dir = fresh_out_dir("broken-page");
    let output = run_pagewords(&fixture_wiki(), &out_dir);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Problem with page") && stderr.contains("broken"),
        "expected a warning about the broken page, got: {stderr}"
    );
}

#[test]
fn long_token_is_logged_with_page_and_item() {
    let out_dir = fresh_out_dir("long-token");
    let output = run_pagewords(&fixture_wiki(), &out_dir);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let warning = stderr
        .lines()
        .find(|line| line.contains("Suspiciously long token"))
        .unwrap_or_else(|| panic!("expected a long token warning, got: {stderr}"));
    assert!(warning.contains("Long Words"), "missing page title: {warning}");
    assert!(warning.contains("l1"), "missing item id: {warning}");
    assert!(
        warning.contains("pneumonoultramicroscopicsilicovolcanoconiosisextraordinary"),
        "missing token: {warning}"
    );

    let frequency = fs::read_to_string(out_dir.join("frequency.txt")).unwrap();
    assert!(frequency.contains("1\tpneumonoultramicroscopicsilicovolcanoconiosisextraordinary\n"));
}

#[test]
fn missing_pages_directory_fails() {
    let out_dir = fresh_out_dir("missing-pages");
    let output = run_pagewords(&out_dir.join("no-such-wiki"), &out_dir);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "unexpected stderr: {stderr}");
    assert!(!out_dir.join("items.txt").exists());
}
