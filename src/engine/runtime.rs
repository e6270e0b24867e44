// src/engine/runtime.rs

use std::fmt;

use tracing::{debug, info, trace};

use crate::config::{RepeatConfig, WaitMode};
use crate::errors::Result;
use crate::exec::{LaunchOutcome, Launcher};
use crate::template::argv_for;

use super::core::LoopCore;
use super::reaper::DetachedChildren;
use super::LoopReport;

/// Drives repeated invocations of the command template, delegating process
/// creation to a `Launcher`.
///
/// This is the async IO shell around `LoopCore`: it templates argv for each
/// index, launches, sleeps between invocations and reaps detached children.
///
/// Any launch error (the target could not be started, or no child could be
/// created) stops the loop immediately and is returned to the caller.
/// Children already running in detached mode are left alone.
pub struct InvocationLoop<L: Launcher> {
    config: RepeatConfig,
    core: LoopCore,
    launcher: L,
    detached: DetachedChildren,
}

impl<L: Launcher> fmt::Debug for InvocationLoop<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationLoop")
            .field("config", &self.config)
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<L: Launcher> InvocationLoop<L> {
    pub fn new(config: RepeatConfig, launcher: L) -> Self {
        let core = LoopCore::from_config(&config);
        Self {
            config,
            core,
            launcher,
            detached: DetachedChildren::new(),
        }
    }

    /// Run until the configured count is reached (forever if unbounded).
    pub async fn run(mut self) -> Result<LoopReport> {
        info!(
            program = %self.config.program(),
            count = ?self.config.count(),
            wait_mode = ?self.config.wait_mode(),
            delay_secs = self.config.delay().as_secs(),
            "repeat loop started"
        );

        let mut launched = 0u64;
        let mut last_status = 0;

        while let Some(index) = self.core.next_invocation() {
            // A templated argv lives only until its child has been spawned.
            let argv = argv_for(self.config.command(), self.config.replstr(), index);
            trace!(index, ?argv, "launching invocation");

            let outcome = match self.launcher.launch(&argv, index).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    self.core.abort();
                    debug!(index, error = %err, "invocation could not be started; aborting");
                    return Err(err);
                }
            };
            drop(argv);
            launched += 1;

            match outcome {
                LaunchOutcome::Exited(status) => {
                    debug!(index, status, "invocation finished");
                    last_status = status;
                }
                LaunchOutcome::Detached(child) => {
                    self.detached.track(child);
                    self.detached.reap_finished();
                }
            }

            if let Some(pause) = self.core.pause_after(index) {
                trace!(index, pause_secs = pause.as_secs(), "pausing before next invocation");
                tokio::time::sleep(pause).await;
            }
        }

        if self.config.wait_mode() == WaitMode::Detached {
            self.detached.reap_all().await;
        }

        let report = LoopReport {
            launched,
            last_status,
            detached_failures: self.detached.failures(),
            state: self.core.state(),
        };
        info!(?report, "repeat loop finished");
        Ok(report)
    }
}
