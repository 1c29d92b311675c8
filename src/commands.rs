use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs `program` with `args` inside `working_dir`, streaming its output to
/// the terminal.
///
/// # Returns
/// * `Err(Error::CommandFailed)` - If the process exits with a non-zero status
/// * `Err(Error::IoError)` - If the process could not be started
pub fn run_command<P: AsRef<Path>>(program: &str, args: &[&str], working_dir: P) -> Result<()> {
    let command = std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
    log::debug!("Running '{}' in '{}'", command, working_dir.as_ref().display());

    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir.as_ref())
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        return Err(Error::CommandFailed { command, status });
    }
    Ok(())
}

/// Tidies the dependencies of a freshly generated application.
pub fn post_generate<P: AsRef<Path>>(output_root: P) -> Result<()> {
    println!("Running post generation tasks...");
    run_command("go", &["mod", "tidy"], output_root)
}

/// Tidies dependencies, then runs the generated application.
pub fn run_app<P: AsRef<Path>>(output_root: P) -> Result<()> {
    let output_root = output_root.as_ref();
    run_command("go", &["mod", "tidy"], output_root)?;
    run_command("go", &["run", "cmd/main.go"], output_root)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn successful_command() {
        let tmp = TempDir::new().unwrap();
        run_command("sh", &["-c", "touch marker"], tmp.path()).unwrap();
        assert!(tmp.path().join("marker").exists());
    }

    #[test]
    fn failing_command_reports_status() {
        let tmp = TempDir::new().unwrap();
        let err = run_command("sh", &["-c", "exit 3"], tmp.path()).unwrap_err();
        match err {
            Error::CommandFailed { command, status } => {
                assert_eq!(command, "sh -c exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_program_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = run_command("ebrick-definitely-not-a-program", &[], tmp.path()).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
