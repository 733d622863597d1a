// tests/launcher_end_to_end.rs
#![cfg(unix)]

mod common;
use crate::common::builders::{shell_script_launcher, write_script, LauncherSectionBuilder};
use crate::common::{cmd, init_tracing, path_only_env};

use std::error::Error;

use tempfile::TempDir;
use test_env::exec::{Launcher, LOCALE_VALUE, LOCALE_VAR, SOURCE_ROOT_VAR};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn exit_status_is_propagated() -> TestResult {
    init_tracing();

    let mut launcher = shell_script_launcher("/src");
    let code = launcher.run(cmd(&["sh", "-c", "exit 7"]), path_only_env())?;

    assert_eq!(code, 7);
    Ok(())
}

#[test]
fn non_executable_script_runs_under_interpreter() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let script = write_script(dir.path(), "job.sh", "exit 7\n")?;

    let section = LauncherSectionBuilder::new()
        .source_root(dir.path())
        .script_suffix(".sh")
        .interpreter("sh")
        .build();
    assert_eq!(section.interpreter, "sh");

    let mut launcher = Launcher::from_config(&section)?;
    let code = launcher.run(cmd(&[script.to_str().unwrap()]), path_only_env())?;

    assert_eq!(code, 7);
    Ok(())
}

#[test]
fn child_sees_fixed_variables() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let body = format!(
        "[ \"${LOCALE_VAR}\" = \"{LOCALE_VALUE}\" ] || exit 3\n\
         [ \"${SOURCE_ROOT_VAR}\" = \"/checkout/src\" ] || exit 4\n\
         exit 0\n"
    );
    let script = write_script(dir.path(), "check_env.sh", &body)?;

    let mut env = path_only_env();
    env.set(LOCALE_VAR, "ja_JP.UTF-8");

    let mut launcher = shell_script_launcher("/checkout/src");
    let code = launcher.run(cmd(&[script.to_str().unwrap()]), env)?;

    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn child_does_not_inherit_unlisted_variables() -> TestResult {
    init_tracing();

    // Cargo exports CARGO_MANIFEST_DIR to test processes; the child only gets
    // the explicit mapping.
    let mut launcher = shell_script_launcher("/src");
    let code = launcher.run(
        cmd(&["sh", "-c", "[ -z \"$CARGO_MANIFEST_DIR\" ] || exit 5"]),
        path_only_env(),
    )?;

    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn arguments_reach_the_child_in_order() -> TestResult {
    init_tracing();

    let mut launcher = shell_script_launcher("/src");
    let code = launcher.run(
        cmd(&["sh", "-c", "[ \"$1-$2\" = \"a-b\" ] || exit 9", "sh", "a", "b"]),
        path_only_env(),
    )?;

    assert_eq!(code, 0);
    Ok(())
}
