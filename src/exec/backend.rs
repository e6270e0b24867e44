// src/exec/backend.rs

//! Pluggable launcher abstraction.
//!
//! The invocation loop talks to a `Launcher` instead of spawning processes
//! itself. Production code uses [`ProcessLauncher`]; tests provide their own
//! implementation that records which argv was launched for which index.
//!
//! Failures to create a child or to start the target program are reported as
//! `Err` (`RepeatError::LaunchFailed` / `RepeatError::StartFailed`), which
//! aborts the whole run. A target that starts and exits nonzero is an
//! ordinary `LaunchOutcome::Exited`.
//!
//! [`ProcessLauncher`]: super::ProcessLauncher

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

/// A detached child that has not been reaped yet. Resolves to the child's
/// exit status once it terminates.
pub type PendingChild = Pin<Box<dyn Future<Output = Result<i32>> + Send + 'static>>;

/// Future returned by [`Launcher::launch`].
pub type LaunchFuture<'a> = Pin<Box<dyn Future<Output = Result<LaunchOutcome>> + Send + 'a>>;

/// Result of a successful launch.
pub enum LaunchOutcome {
    /// The child was waited for and exited with this status.
    Exited(i32),
    /// The child was left running; the loop reaps it later.
    Detached(PendingChild),
}

impl fmt::Debug for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchOutcome::Exited(code) => f.debug_tuple("Exited").field(code).finish(),
            LaunchOutcome::Detached(_) => f.write_str("Detached(..)"),
        }
    }
}

/// Trait abstracting how one invocation is started.
pub trait Launcher: Send {
    /// Start invocation `index` with the (already templated) `argv`.
    ///
    /// `argv[0]` is the program name; `argv` is never empty.
    fn launch<'a>(&'a mut self, argv: &'a [String], index: u64) -> LaunchFuture<'a>;
}
