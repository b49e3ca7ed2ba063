use anyhow::Result;
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::core::error::InvocationError;
use crate::core::invocation::Invocation;
use crate::runner::traits::ProcessRunner;

/// Spawns the analyzer with the parent's stdio and waits for it.
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<i32> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => InvocationError::MissingExecutable {
                    path: Some(invocation.program.clone()),
                },
                _ => InvocationError::Spawn {
                    program: invocation.program.clone(),
                    source,
                },
            })?;

        log::debug!("{} exited with {}", invocation.program.display(), status);
        Ok(exit_code(status))
    }
}

/// Exit code to relay for a finished child. Signals map to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
