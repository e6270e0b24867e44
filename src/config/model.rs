// src/config/model.rs

use std::time::Duration;

use crate::cli::CliArgs;

/// Whether the loop waits for each child before starting the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitMode {
    /// Wait for every invocation before starting the next (default).
    #[default]
    Blocking,
    /// Launch back-to-back; reap all outstanding children at the end.
    Detached,
}

/// Configuration exactly as it came off the command line.
///
/// Nothing here is validated yet. Use `RepeatConfig::try_from` to get a
/// config the engine will accept.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub replstr: Option<String>,
    pub count: Option<i64>,
    pub sleep: Option<i64>,
    pub detach: bool,
    pub verbose: bool,
    pub command: Vec<String>,
}

impl From<&CliArgs> for RawConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            replstr: args.replstr.clone(),
            count: args.count,
            sleep: args.sleep,
            detach: args.detach,
            verbose: args.verbose,
            command: args.command.clone(),
        }
    }
}

/// Validated, immutable run configuration.
///
/// Built once at startup and shared read-only with the templater, the
/// launcher and the invocation loop.
#[derive(Debug, Clone)]
pub struct RepeatConfig {
    command: Vec<String>,
    count: Option<u64>,
    replstr: Option<String>,
    delay: Duration,
    wait_mode: WaitMode,
    verbose: bool,
}

impl RepeatConfig {
    /// Assemble a config without validation. Only [`validate`] should call
    /// this.
    ///
    /// [`validate`]: crate::config::validate
    pub(crate) fn new_unchecked(
        command: Vec<String>,
        count: Option<u64>,
        replstr: Option<String>,
        delay: Duration,
        wait_mode: WaitMode,
        verbose: bool,
    ) -> Self {
        // Detached mode never paces.
        let delay = match wait_mode {
            WaitMode::Blocking => delay,
            WaitMode::Detached => Duration::ZERO,
        };
        Self {
            command,
            count,
            replstr,
            delay,
            wait_mode,
            verbose,
        }
    }

    /// The command template: program name followed by its arguments.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Program name (first element of the command template).
    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    /// Invocation bound; `None` means repeat forever.
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    pub fn replstr(&self) -> Option<&str> {
        self.replstr.as_deref()
    }

    /// Effective pacing delay. Always zero in detached mode.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn wait_mode(&self) -> WaitMode {
        self.wait_mode
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
