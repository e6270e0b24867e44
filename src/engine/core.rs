// src/engine/core.rs

//! Pure invocation-loop state machine.
//!
//! `LoopCore` decides which invocation index comes next, when the run is
//! complete and whether to pause after an invocation. It has no Tokio types
//! and performs no IO, so it is unit tested directly.

use std::time::Duration;

use crate::config::RepeatConfig;
use crate::engine::LoopState;

#[derive(Debug, Clone)]
pub struct LoopCore {
    count: Option<u64>,
    delay: Duration,
    next_index: u64,
    state: LoopState,
}

impl LoopCore {
    pub fn new(count: Option<u64>, delay: Duration) -> Self {
        Self {
            count,
            delay,
            next_index: 1,
            state: LoopState::Idle,
        }
    }

    pub fn from_config(cfg: &RepeatConfig) -> Self {
        Self::new(cfg.count(), cfg.delay())
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Start the next invocation, returning its 1-based index, or `None`
    /// once the configured count has been reached.
    ///
    /// Unbounded runs never return `None`.
    pub fn next_invocation(&mut self) -> Option<u64> {
        if matches!(self.state, LoopState::Completed | LoopState::Aborted) {
            return None;
        }

        if let Some(count) = self.count {
            if self.next_index > count {
                self.state = LoopState::Completed;
                return None;
            }
        }

        let index = self.next_index;
        self.next_index = self.next_index.saturating_add(1);
        self.state = LoopState::Running;
        Some(index)
    }

    /// Pause to take after invocation `index`, if any. There is never a pause
    /// after the final scheduled invocation.
    pub fn pause_after(&self, index: u64) -> Option<Duration> {
        if self.delay.is_zero() || self.count == Some(index) {
            return None;
        }
        Some(self.delay)
    }

    pub fn abort(&mut self) {
        self.state = LoopState::Aborted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_run_yields_one_through_count_then_completes() {
        let mut core = LoopCore::new(Some(3), Duration::ZERO);
        assert_eq!(core.state(), LoopState::Idle);

        let indices: Vec<u64> = std::iter::from_fn(|| core.next_invocation()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(core.state(), LoopState::Completed);
        assert_eq!(core.next_invocation(), None);
    }

    #[test]
    fn unbounded_run_keeps_going() {
        let mut core = LoopCore::new(None, Duration::ZERO);
        for expected in 1..=1000 {
            assert_eq!(core.next_invocation(), Some(expected));
        }
        assert_eq!(core.state(), LoopState::Running);
    }

    #[test]
    fn pause_is_skipped_after_final_invocation() {
        let core = LoopCore::new(Some(3), Duration::from_secs(2));
        assert_eq!(core.pause_after(1), Some(Duration::from_secs(2)));
        assert_eq!(core.pause_after(2), Some(Duration::from_secs(2)));
        assert_eq!(core.pause_after(3), None);
    }

    #[test]
    fn no_pause_without_delay() {
        let core = LoopCore::new(None, Duration::ZERO);
        assert_eq!(core.pause_after(1), None);
    }

    #[test]
    fn aborted_core_stops_producing_indices() {
        let mut core = LoopCore::new(Some(5), Duration::ZERO);
        assert_eq!(core.next_invocation(), Some(1));
        core.abort();
        assert_eq!(core.state(), LoopState::Aborted);
        assert_eq!(core.next_invocation(), None);
    }
}
