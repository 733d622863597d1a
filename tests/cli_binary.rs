// tests/cli_binary.rs
#![cfg(unix)]

use std::process::Command;

use tempfile::TempDir;

fn test_env() -> Command {
    Command::new(env!("CARGO_BIN_EXE_test-env"))
}

#[test]
fn binary_exits_with_child_status() {
    let root = TempDir::new().unwrap();
    let status = test_env()
        .arg("--source-root")
        .arg(root.path())
        .args(["sh", "-c", "exit 7"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(7));
}

#[test]
fn binary_passes_flag_like_arguments_through() {
    let output = test_env()
        .args(["sh", "-c", "echo \"$1\"", "sh", "--not-for-test-env"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "--not-for-test-env\n");
}

#[test]
fn binary_reports_launch_failure_once() {
    let output = test_env()
        .args(["/nonexistent/test-env/does_not_exist"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("failed to start process").count(), 1);
    assert!(stderr.contains("does_not_exist"));
}

#[test]
fn dry_run_prints_invocation_without_running() {
    let root = TempDir::new().unwrap();
    let output = test_env()
        .arg("--dry-run")
        .arg("--source-root")
        .arg(root.path())
        .args(["--interpreter", "/usr/bin/python3", "tools/run.py", "-v"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("program: /usr/bin/python3"));
    assert!(stdout.contains(r#"args: ["tools/run.py", "-v"]"#));
    assert!(stdout.contains("LANGUAGE=en_US.UTF-8"));
    assert!(stdout.contains(&format!("CR_SOURCE_ROOT={}", root.path().display())));
}

#[test]
fn dry_run_uses_default_python_interpreter() {
    let root = TempDir::new().unwrap();
    let output = test_env()
        .arg("--dry-run")
        .arg("--source-root")
        .arg(root.path())
        .args(["tools/run.py"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("program: python3\n"));
    assert!(stdout.contains(r#"args: ["tools/run.py"]"#));
}

#[test]
fn missing_source_root_is_rejected_before_running() {
    let output = test_env()
        .args(["--source-root", "/nonexistent/test-env/src", "sh", "-c", "exit 7"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("does not exist"));
}
