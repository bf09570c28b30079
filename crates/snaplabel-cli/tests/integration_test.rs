//! Integration tests for the snaplabel binary

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Workspace with a label file and no config file
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(labels: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("labels.txt"), labels).unwrap();
        Self { dir }
    }

    fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_snaplabel"));
        command
            .current_dir(self.dir.path())
            .env_remove("SNAPLABEL_LABELS")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path("absent.yaml"))
            .arg("--labels")
            .arg(self.path("labels.txt"));
        command
    }
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "snaplabel failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_format_from_file() {
    let fixture = Fixture::new("cat\ndog\nbird\n");
    let input = fixture.write(
        "results.json",
        r#"[{"categories": [{"index": 2, "score": 0.8765}]}]"#,
    );

    let output = fixture
        .command()
        .args(["format", "--input", arg(&input)])
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "bird: 87.65%\n");
}

#[test]
fn test_format_multiple_groups_in_order() {
    let fixture = Fixture::new("a\nb\n");
    let input = fixture.write(
        "results.json",
        r#"[
            {"head_index": 0, "categories": [{"index": 0, "score": 0.1}]},
            {"head_index": 1, "categories": [{"index": 1, "score": 0.9}]}
        ]"#,
    );

    let output = fixture
        .command()
        .args(["format", "-i", arg(&input)])
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "a: 10.00%\nb: 90.00%\n");
}

#[test]
fn test_format_empty_prints_sentinel_line() {
    let fixture = Fixture::new("cat\n");
    let input = fixture.write("results.json", "[]");

    let output = fixture
        .command()
        .args(["format", "--input", arg(&input)])
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "No classification results\n");
}

#[test]
fn test_format_from_stdin() {
    let fixture = Fixture::new("cat\ndog\n");

    let mut child = fixture
        .command()
        .arg("format")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"categories": [{"index": 5, "label": "fox", "score": 0.5}]}]"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(stdout(&output), "Unknown (fox): 50.00%\n");
}

#[test]
fn test_format_rejects_malformed_json() {
    let fixture = Fixture::new("cat\n");
    let input = fixture.write("results.json", "[{");

    let output = fixture
        .command()
        .args(["format", "--input", arg(&input)])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_labels_listing() {
    let fixture = Fixture::new("cat\ndog\n");

    let output = fixture.command().arg("labels").output().unwrap();

    assert_eq!(stdout(&output), "2 labels\n    0  cat\n    1  dog\n");
}

#[test]
fn test_classify_with_recordings() {
    let fixture = Fixture::new("cat\ndog\n");
    let image = fixture.write("photo.jpg", [0xFFu8, 0xD8, 0xFF]);
    let recordings = fixture.write("recordings.json", r#"{"photo.jpg": [[0.1, 0.9]]}"#);

    let output = fixture
        .command()
        .args(["classify", arg(&image), "--recordings", arg(&recordings)])
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "dog: 90.00%\n");
}

#[test]
fn test_classify_without_recordings_reports_not_initialized() {
    let fixture = Fixture::new("cat\n");
    let image = fixture.write("photo.jpg", [0xFFu8, 0xD8, 0xFF]);

    let output = fixture
        .command()
        .args(["classify", arg(&image)])
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "Object detector not initialized\n");
}

#[test]
fn test_metrics_go_to_stderr() {
    let fixture = Fixture::new("cat\n");
    let image = fixture.write("photo.jpg", [0xFFu8, 0xD8, 0xFF]);

    let output = fixture
        .command()
        .args(["--metrics", "classify", arg(&image)])
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "Object detector not initialized\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("snaplabel_detections_total"));
    assert!(stderr.contains("not_initialized"));
}
