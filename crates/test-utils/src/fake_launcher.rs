use std::sync::{Arc, Mutex};
use std::time::Instant;

use repeat::errors::RepeatError;
use repeat::exec::{LaunchFuture, LaunchOutcome, Launcher};

/// One recorded call to [`RecordingLauncher::launch`].
#[derive(Debug, Clone)]
pub struct Invocation {
    pub index: u64,
    pub argv: Vec<String>,
    pub at: Instant,
}

/// A fake launcher that:
/// - records every invocation (index, argv, time)
/// - reports `Exited(status)` immediately, or `Detached` if configured so
/// - optionally fails to start the program at a given index.
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    launched: Arc<Mutex<Vec<Invocation>>>,
    status: i32,
    detached: bool,
    fail_at: Option<u64>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit status every invocation reports.
    pub fn with_status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Report children as detached instead of waited for.
    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    /// Fail to start the program on invocation `index`.
    pub fn fail_at(mut self, index: u64) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Shared handle to the recorded invocations.
    pub fn launched(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.launched)
    }
}

impl Launcher for RecordingLauncher {
    fn launch<'a>(&'a mut self, argv: &'a [String], index: u64) -> LaunchFuture<'a> {
        Box::pin(async move {
            // Give timeouts in tests a chance to fire on unbounded runs.
            tokio::task::yield_now().await;

            self.launched.lock().unwrap().push(Invocation {
                index,
                argv: argv.to_vec(),
                at: Instant::now(),
            });

            if self.fail_at == Some(index) {
                return Err(RepeatError::StartFailed {
                    program: argv[0].clone(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }

            let status = self.status;
            if self.detached {
                Ok(LaunchOutcome::Detached(Box::pin(async move { Ok(status) })))
            } else {
                Ok(LaunchOutcome::Exited(status))
            }
        })
    }
}
