//! Shell command execution with captured output.

use std::process::Command;

use tracing::{debug, error, instrument};

use crate::error::ServerResult;

/// Captured result of a shell command.
///
/// A non-zero exit status is data, not an error: callers inspect `status`
/// and `stderr` and decide for themselves. Only a failure to spawn the
/// shell surfaces as an error.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Process exit code; -1 when the process was terminated by a signal.
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Runs a command string under `sh -c`, capturing stdout and stderr.
///
/// Stderr is logged at error level when the command exits non-zero.
#[instrument]
pub fn execute_command(cmd: &str) -> ServerResult<CommandOutput> {
    debug!(%cmd, "spawning shell command");
    let output = Command::new("sh").arg("-c").arg(cmd).output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let status = output.status.code().unwrap_or(-1);

    debug!(%status, stdout = %stdout.trim_end(), "shell command finished");
    if status != 0 {
        error!(%cmd, %status, stderr = %stderr.trim_end(), "shell command failed");
    }

    Ok(CommandOutput {
        status,
        stdout,
        stderr,
    })
}
