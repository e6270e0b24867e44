// src/engine/mod.rs

//! Invocation loop for `repeat`.
//!
//! The pure state machine (how many invocations, which index comes next,
//! whether to pause) lives in [`core`]; the async shell that templates argv,
//! calls the launcher, sleeps and reaps is implemented in [`runtime`].
//! [`reaper`] keeps track of children started in detached mode.

/// Lifecycle of one run of the invocation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Nothing launched yet.
    Idle,
    /// At least one invocation has been started and more may follow.
    Running,
    /// The configured count was reached.
    Completed,
    /// An invocation could not be started; the run stopped early.
    Aborted,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// Number of invocations launched.
    pub launched: u64,
    /// Status of the last invocation that was waited for (0 if none was).
    pub last_status: i32,
    /// Detached children that exited nonzero or could not be waited for.
    pub detached_failures: u64,
    pub state: LoopState,
}

impl LoopReport {
    /// Process exit code for a run that completed normally.
    pub fn exit_code(&self) -> i32 {
        self.last_status
    }
}

pub mod core;
pub mod reaper;
pub mod runtime;

pub use self::core::LoopCore;
pub use reaper::DetachedChildren;
pub use runtime::InvocationLoop;
