// src/exec/child.rs

//! Production launcher: one OS child process per invocation.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitStatus;

use tokio::process::{Child, Command};
use tracing::{debug, trace};

use crate::config::{RepeatConfig, WaitMode};
use crate::errors::{RepeatError, Result};
use crate::exec::backend::{LaunchFuture, LaunchOutcome, Launcher};
use crate::exec::prefix::{pad_width, verbose_prefix};

/// Spawns the target program with `tokio::process::Command`.
///
/// The child inherits stdin, stdout and stderr. Spawning reports a target
/// that cannot be executed synchronously (the exec error travels back to the
/// parent over the spawn call's internal error pipe), so no signal handler is
/// needed to tell "could not start" apart from "ran and failed".
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    wait_mode: WaitMode,
    verbose: bool,
    width: usize,
}

impl ProcessLauncher {
    pub fn new(cfg: &RepeatConfig) -> Self {
        Self {
            wait_mode: cfg.wait_mode(),
            verbose: cfg.verbose(),
            width: pad_width(cfg.count()),
        }
    }

    /// Write the `-v` prefix and flush it so it lands ahead of anything the
    /// child prints.
    fn write_prefix(&self, index: u64) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(verbose_prefix(index, self.width).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl Launcher for ProcessLauncher {
    fn launch<'a>(&'a mut self, argv: &'a [String], index: u64) -> LaunchFuture<'a> {
        Box::pin(async move {
            let (program, args) = argv
                .split_first()
                .ok_or_else(|| RepeatError::Config("empty command".to_string()))?;

            if self.verbose {
                self.write_prefix(index)?;
            }

            let mut child = spawn_target(program, args)?;

            let pid = child.id().unwrap_or_default();
            debug!(index, pid, program = %program, "spawned child");

            match self.wait_mode {
                WaitMode::Blocking => {
                    let status = child
                        .wait()
                        .await
                        .map_err(|source| RepeatError::Wait { pid, source })?;
                    let code = exit_code(status);
                    trace!(index, pid, status = code, "child exited");
                    Ok(LaunchOutcome::Exited(code))
                }
                WaitMode::Detached => Ok(LaunchOutcome::Detached(Box::pin(async move {
                    let status = child
                        .wait()
                        .await
                        .map_err(|source| RepeatError::Wait { pid, source })?;
                    Ok(exit_code(status))
                }))),
            }
        })
    }
}

/// Spawn `program` with `args`, inheriting stdio.
///
/// An executable file the kernel does not recognise (`ENOEXEC`, typically a
/// script without a `#!` line) is handed to `/bin/sh` instead, the way
/// `execvp(3)` does it.
fn spawn_target(program: &str, args: &[String]) -> Result<Child> {
    match Command::new(program).args(args).spawn() {
        Ok(child) => Ok(child),
        Err(e) if is_exec_format_error(&e) => {
            let script = resolve_script(program);
            debug!(
                program = %program,
                script = %script.display(),
                "no interpreter line; running through /bin/sh"
            );
            Command::new("/bin/sh")
                .arg(&script)
                .args(args)
                .spawn()
                .map_err(|e| classify_spawn_error(program, e))
        }
        Err(e) => Err(classify_spawn_error(program, e)),
    }
}

#[cfg(unix)]
fn is_exec_format_error(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ENOEXEC)
}

#[cfg(not(unix))]
fn is_exec_format_error(_err: &io::Error) -> bool {
    false
}

/// Path of the script `sh` should read. Bare names are looked up in `PATH`
/// like the failed exec did; anything with a slash is used as given.
fn resolve_script(program: &str) -> PathBuf {
    if program.contains('/') {
        return PathBuf::from(program);
    }
    which::which(program).unwrap_or_else(|_| PathBuf::from(program))
}

/// Split spawn errors into "no child could be created" and "the child could
/// not start the target program".
///
/// Only `EAGAIN` unambiguously comes from process creation; everything else,
/// `ENOMEM` included, can come from the exec step.
fn classify_spawn_error(program: &str, source: io::Error) -> RepeatError {
    match source.kind() {
        io::ErrorKind::WouldBlock => RepeatError::LaunchFailed { source },
        _ => RepeatError::StartFailed {
            program: program.to_string(),
            source,
        },
    }
}

/// Numeric status of a terminated child. A child killed by a signal reports
/// `128 + signal`, as shells do.
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
