// src/engine/reaper.rs

//! Bookkeeping for children launched in detached mode.

use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::exec::PendingChild;

/// Outstanding detached children.
///
/// Each child's wait future runs as its own Tokio task. Finished children are
/// collected opportunistically after every launch so an unbounded detached
/// run does not pile up zombies; [`reap_all`](Self::reap_all) blocks until
/// none remain.
#[derive(Debug, Default)]
pub struct DetachedChildren {
    waiting: JoinSet<Result<i32>>,
    failures: u64,
}

impl DetachedChildren {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, child: PendingChild) {
        self.waiting.spawn(child);
    }

    /// Number of children not reaped yet.
    pub fn outstanding(&self) -> usize {
        self.waiting.len()
    }

    /// Children that exited nonzero or could not be waited for.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Collect every child that has already terminated, without blocking.
    pub fn reap_finished(&mut self) {
        while let Some(res) = self.waiting.try_join_next() {
            self.record(res);
        }
    }

    /// Block until every outstanding child has terminated.
    pub async fn reap_all(&mut self) {
        debug!(outstanding = self.waiting.len(), "reaping detached children");
        while let Some(res) = self.waiting.join_next().await {
            self.record(res);
        }
    }

    fn record(&mut self, res: std::result::Result<Result<i32>, JoinError>) {
        match res {
            Ok(Ok(0)) => {}
            Ok(Ok(status)) => {
                self.failures += 1;
                warn!(status, "detached child exited nonzero");
            }
            Ok(Err(err)) => {
                self.failures += 1;
                warn!(error = %err, "detached child could not be waited for");
            }
            Err(err) => {
                self.failures += 1;
                warn!(error = %err, "detached wait task failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reap_all_collects_every_child_and_counts_failures() {
        let mut children = DetachedChildren::new();
        children.track(Box::pin(async { Ok(0) }));
        children.track(Box::pin(async { Ok(3) }));
        children.track(Box::pin(async {
            Err(crate::errors::RepeatError::Config("boom".to_string()))
        }));
        assert_eq!(children.outstanding(), 3);

        children.reap_all().await;

        assert_eq!(children.outstanding(), 0);
        assert_eq!(children.failures(), 2);
    }

    #[tokio::test]
    async fn reap_finished_does_not_block_on_running_children() {
        let mut children = DetachedChildren::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        children.track(Box::pin(async move {
            let _ = rx.await;
            Ok(0)
        }));

        children.reap_finished();
        assert_eq!(children.outstanding(), 1);

        tx.send(()).unwrap();
        children.reap_all().await;
        assert_eq!(children.outstanding(), 0);
        assert_eq!(children.failures(), 0);
    }
}
