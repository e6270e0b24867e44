// src/config/mod.rs

//! Run configuration for `repeat`.
//!
//! - [`model`] holds the raw (as parsed) and validated configuration types.
//! - [`validate`] turns a [`RawConfig`] into an immutable [`RepeatConfig`].

pub mod model;
pub mod validate;

pub use model::{RawConfig, RepeatConfig, WaitMode};
