use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn page(fields: &[(&str, &str)]) -> String {
    let markers: String = fields
        .iter()
        .map(|(name, value)| {
            format!(
                r#"<div class="debug-data-item" data-name="{}" data-value="{}"></div>"#,
                name, value
            )
        })
        .collect();
    format!(
        r#"<html><body><h1>Page</h1><div class="" style="display: none;">{}</div></body></html>"#,
        markers
    )
}

fn full_page(content_type: &str) -> String {
    page(&[
        ("node_id", "12345"),
        ("node_url", "http://x/a"),
        ("content_type", content_type),
        ("template", "page.tpl.php"),
        ("uri", "/a"),
        ("absolute_uri", "http://x/a"),
    ])
}

fn setup_run(root: &Path) -> PathBuf {
    let pages = root.join("20160525").join("112610").join("pages");
    fs::create_dir_all(&pages).unwrap();
    pages
}

fn harvest(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("debugharvest").unwrap();
    cmd.current_dir(root)
        .args(["20160525", "112610", "--output-format", "plain"]);
    cmd
}

fn output_csv(root: &Path) -> String {
    fs::read_to_string(root.join("20160525").join("112610").join("nodes.csv")).unwrap()
}

#[test]
fn test_single_page_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(pages.join("a.html"), full_page("article")).unwrap();

    harvest(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing:"))
        .stdout(predicate::str::contains(format!("{:<50}: 1", "article")))
        .stdout(predicate::str::contains(format!("{:<50}: 1", "Total pages")))
        .stdout(predicate::str::contains("See output CSV in"));

    assert_eq!(
        output_csv(temp_dir.path()),
        "12345,http://x/a,article,page.tpl.php,/a,http://x/a\n"
    );
}

#[test]
fn test_two_content_types_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(pages.join("one.html"), full_page("page")).unwrap();
    fs::write(pages.join("two.html"), full_page("article")).unwrap();

    let output = harvest(temp_dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let article = stdout.find(&format!("{:<50}: 1", "article")).unwrap();
    let page = stdout.find(&format!("{:<50}: 1", "page")).unwrap();
    assert!(article < page);
    assert!(stdout.contains(&format!("{:<50}: 2", "Total pages")));

    assert_eq!(output_csv(temp_dir.path()).lines().count(), 2);
}

#[test]
fn test_rerun_resets_output() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(pages.join("a.html"), full_page("article")).unwrap();
    fs::write(pages.join("b.html"), "<html><body>no markers</body></html>").unwrap();

    harvest(temp_dir.path()).assert().success();
    let first = output_csv(temp_dir.path());

    harvest(temp_dir.path()).assert().success();
    let second = output_csv(temp_dir.path());

    assert_eq!(first, second);
    assert_eq!(second.lines().count(), 2);
    assert!(second.contains(",,,,,\n"));
}

#[test]
fn test_missing_pages_directory() {
    let temp_dir = TempDir::new().unwrap();

    harvest(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("20160525"));

    assert!(!temp_dir
        .path()
        .join("20160525")
        .join("112610")
        .join("nodes.csv")
        .exists());
}

#[test]
fn test_missing_debug_data_warning() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(pages.join("bare.html"), "<html><body>nothing</body></html>").unwrap();

    harvest(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("missing debug data"))
        .stdout(predicate::str::contains(format!("{:<50}: 1", "(none)")));
}

#[test]
fn test_root_option_and_quiet_mode() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(pages.join("a.html"), full_page("article")).unwrap();

    let mut cmd = Command::cargo_bin("debugharvest").unwrap();
    cmd.args(["20160525", "112610", "--output-format", "plain", "--quiet", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing:").not())
        .stdout(predicate::str::contains(format!("{:<50}: 1", "article")));
}

#[test]
fn test_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(pages.join("a.html"), full_page("article")).unwrap();

    let output = Command::cargo_bin("debugharvest")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["20160525", "112610", "--output-format", "json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_pages"], 1);
    assert_eq!(summary["groups"][0]["content_type"], "article");
    assert_eq!(summary["groups"][0]["count"], 1);
}

#[test]
fn test_config_file_changes_markers() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(
        pages.join("a.html"),
        r#"<span class="dbg" data-name="content_type" data-value="blog"></span>"#,
    )
    .unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[markers]\nclass = \"dbg\"\n").unwrap();

    harvest(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{:<50}: 1", "blog")));
}

#[test]
fn test_invalid_stamp_rejected() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("debugharvest")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["../etc", "112610"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn test_flagged_content_types_shown_when_quiet() {
    let temp_dir = TempDir::new().unwrap();
    let pages = setup_run(temp_dir.path());
    fs::write(pages.join("odd.html"), full_page("UNKNOWN")).unwrap();

    Command::cargo_bin("debugharvest")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["20160525", "112610", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'UNKNOWN' content type:"))
        .stdout(predicate::str::contains("(http://x/a)"))
        .stdout(predicate::str::contains(format!("{:<50}: 1", "UNKNOWN")));
}

#[test]
fn test_config_error_uses_requested_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[report]\nlabel_width = 0\n").unwrap();

    Command::cargo_bin("debugharvest")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["20160525", "112610", "--output-format", "json", "--config"])
        .arg(&config_path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""level":"error""#))
        .stderr(predicate::str::contains("label_width"))
        .stderr(predicate::str::contains("✗").not());
}
