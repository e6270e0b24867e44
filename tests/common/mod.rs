#![allow(dead_code)]

pub use repeat_test_utils::builders;
pub use repeat_test_utils::fake_launcher;
pub use repeat_test_utils::{init_tracing, with_timeout};
