use repeat::config::{RawConfig, RepeatConfig};

/// Builder for `RepeatConfig` to simplify test setup.
pub struct RepeatConfigBuilder {
    raw: RawConfig,
}

impl RepeatConfigBuilder {
    pub fn new(command: &[&str]) -> Self {
        Self {
            raw: RawConfig {
                command: command.iter().map(|s| s.to_string()).collect(),
                ..RawConfig::default()
            },
        }
    }

    pub fn count(mut self, n: i64) -> Self {
        self.raw.count = Some(n);
        self
    }

    pub fn replstr(mut self, token: &str) -> Self {
        self.raw.replstr = Some(token.to_string());
        self
    }

    pub fn sleep(mut self, secs: i64) -> Self {
        self.raw.sleep = Some(secs);
        self
    }

    pub fn detach(mut self) -> Self {
        self.raw.detach = true;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.raw.verbose = true;
        self
    }

    pub fn build(self) -> RepeatConfig {
        RepeatConfig::try_from(self.raw).expect("Failed to build valid config from builder")
    }
}
