// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod template;

use tracing::debug;

use crate::config::{RawConfig, RepeatConfig};
use crate::engine::{InvocationLoop, LoopReport};
use crate::errors::Result;
use crate::exec::ProcessLauncher;

/// High-level entry point used by `main.rs`.
///
/// Validates the configuration, then drives the invocation loop with the
/// real process launcher.
pub async fn run(raw: RawConfig) -> Result<LoopReport> {
    let cfg = RepeatConfig::try_from(raw)?;
    debug!(?cfg, "validated configuration");

    let launcher = ProcessLauncher::new(&cfg);
    InvocationLoop::new(cfg, launcher).run().await
}
