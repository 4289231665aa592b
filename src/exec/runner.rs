// src/exec/runner.rs

use std::process::Command;

use tracing::{error, info};

use crate::errors::ExecError;
use crate::graph::model::JobGraph;

/// Execute every job in `ids_ordered`, strictly sequentially.
///
/// Each command runs through the platform shell and inherits the parent's
/// stdout/stderr (no output capture). One log line is emitted per job with
/// its id, command text and exit code. The first job that cannot be
/// launched or exits non-zero aborts the run; later jobs never start.
pub fn run_jobs(graph: &JobGraph, ids_ordered: &[String]) -> Result<(), ExecError> {
    for id in ids_ordered {
        let job = graph
            .get(id)
            .ok_or_else(|| ExecError::UnknownJob(id.clone()))?;

        info!(job = %id, cmd = %job.command, "starting job");

        let status = shell_command(&job.command)
            .status()
            .map_err(|source| {
                error!(job = %id, cmd = %job.command, "failed to launch command");
                ExecError::Spawn {
                    id: id.clone(),
                    source,
                }
            })?;

        // No exit code means the process was killed by a signal.
        let code = status.code().unwrap_or(-1);
        info!(job = %id, cmd = %job.command, exit_code = code, "job exited");

        if !status.success() {
            error!(job = %id, exit_code = code, "job failed; aborting run");
            return Err(ExecError::JobFailed {
                id: id.clone(),
                code,
            });
        }
    }

    Ok(())
}

/// Build a shell command appropriate for the platform.
fn shell_command(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    }
}
