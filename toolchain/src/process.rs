//! Running child processes to completion.
//!
//! Standard error is always captured so a failure can quote it; standard
//! output is captured or inherited depending on how the caller configured
//! the [`Command`]. There is no timeout: a hung child hangs the caller.

use std::process::{Command, Output, Stdio};

use omg_protoc_core::{Result, ToolError, reindent};
use tracing::debug;

/// Renders a command line as `program arg arg` for messages.
pub fn describe(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

/// Runs `command` and waits for it, failing on spawn errors and on any
/// unsuccessful exit.
///
/// Stdin is closed and stderr piped. Stdout is piped unless the caller set
/// it beforehand.
pub fn run(command: &mut Command) -> Result<Output> {
    let rendered = describe(command);
    debug!(command = %rendered, "Running");

    let output = command
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| {
            debug!(command = %rendered, error = %source, "Failed to spawn");
            ToolError::Spawn {
                command: rendered.clone(),
                source,
            }
        })?;

    if output.status.success() {
        return Ok(output);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    debug!(command = %rendered, status = %output.status, "Command failed");
    Err(ToolError::CommandFailed {
        command: rendered,
        status: output.status.to_string(),
        stderr: reindent(&stderr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_joins_program_and_args() {
        let mut command = Command::new("go");
        command.args(["list", "-mod=readonly", "-json", "example.com/x"]);
        assert_eq!(describe(&command), "go list -mod=readonly -json example.com/x");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let mut command = Command::new("omg-protoc-test-no-such-program");
        command.arg("--flag");
        match run(&mut command) {
            Err(ToolError::Spawn { command, .. }) => {
                assert_eq!(command, "omg-protoc-test-no-such-program --flag");
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_quotes_reindented_stderr() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo first >&2; echo second >&2; exit 3"]);
        let err = run(&mut command).expect_err("non-zero exit must fail");
        let message = err.to_string();
        assert!(message.starts_with("`sh -c echo first >&2; echo second >&2; exit 3` failed: "));
        assert!(message.contains("3"));
        assert!(message.ends_with("\n  first\n  second"));
    }

    #[cfg(unix)]
    #[test]
    fn test_success_captures_stdout() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo hello"]);
        let output = run(&mut command).unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "hello\n");
    }
}
