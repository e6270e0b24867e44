// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually creating the child process for a
//! single invocation, using `tokio::process::Command`.
//!
//! - [`backend`] provides the `Launcher` trait the invocation loop talks to,
//!   plus the launch result types. Tests replace the launcher with a fake
//!   that records invocations instead of spawning processes.
//! - [`child`] holds `ProcessLauncher`, the production launcher.
//! - [`prefix`] formats the zero-padded `-v` invocation prefix.

pub mod backend;
pub mod child;
pub mod prefix;

pub use backend::{LaunchFuture, LaunchOutcome, Launcher, PendingChild};
pub use child::ProcessLauncher;
