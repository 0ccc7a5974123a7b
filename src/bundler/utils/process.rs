//! External process execution.
//!
//! [`CommandRunner`] is the seam for every external tool call (7-Zip, dotnet).
//! Runners report the exit status but never treat a non-zero status as an
//! error; callers decide what a failed status means. Only failing to start
//! the program at all is an error.

use crate::bundler::error::{Error, Result};
use std::{ffi::OsString, fmt, future::Future, path::Path};

/// Exit status of a finished child process.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandStatus {
    code: Option<i32>,
}

impl CommandStatus {
    /// Status with the given exit code. `None` means terminated by a signal.
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    /// Status of a successful run.
    pub fn success_status() -> Self {
        Self { code: Some(0) }
    }

    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Runs an external program to completion.
pub trait CommandRunner {
    /// Runs `program` with `args`, inheriting stdio, and waits for it to exit.
    fn run(
        &self,
        program: &Path,
        args: &[OsString],
    ) -> impl Future<Output = Result<CommandStatus>> + Send;
}

/// Runner that spawns real child processes with tokio.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandStatus> {
        log::debug!("Running {}", display_command(program, args));

        let status = tokio::process::Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| Error::CommandFailed {
                command: program.display().to_string(),
                error: e,
            })?;

        Ok(status.into())
    }
}

/// Renders a command line for log output.
pub fn display_command(program: &Path, args: &[OsString]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_success_only_for_zero() {
        assert!(CommandStatus::success_status().success());
        assert!(!CommandStatus::from_code(Some(1)).success());
        assert!(!CommandStatus::from_code(None).success());
    }

    #[test]
    fn display_command_joins_args() {
        let line = display_command(
            Path::new("7z"),
            &["x".into(), "a.7z".into(), "-oout".into()],
        );
        assert_eq!(line, "7z x a.7z -oout");
    }

    #[tokio::test]
    async fn missing_program_is_command_failed() {
        let err = SystemRunner
            .run(Path::new("definitely-not-a-real-program-4b1d"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }));
    }
}
