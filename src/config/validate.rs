// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{RawConfig, RepeatConfig, WaitMode};
use crate::errors::{RepeatError, Result};

impl TryFrom<RawConfig> for RepeatConfig {
    type Error = RepeatError;

    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        validate_replstr(&raw)?;
        let count = validate_count(&raw)?;
        let delay = validate_sleep(&raw)?;
        ensure_has_command(&raw)?;

        let wait_mode = if raw.detach {
            WaitMode::Detached
        } else {
            WaitMode::Blocking
        };

        Ok(RepeatConfig::new_unchecked(
            raw.command,
            count,
            raw.replstr,
            delay,
            wait_mode,
            raw.verbose,
        ))
    }
}

fn validate_replstr(raw: &RawConfig) -> Result<()> {
    if raw.replstr.as_deref().is_some_and(str::is_empty) {
        return Err(RepeatError::Config("replstr may not be empty".to_string()));
    }
    Ok(())
}

fn validate_count(raw: &RawConfig) -> Result<Option<u64>> {
    match raw.count {
        None => Ok(None),
        Some(n) if n > 0 => Ok(Some(n.unsigned_abs())),
        Some(_) => Err(RepeatError::Config("count must be > 0".to_string())),
    }
}

fn validate_sleep(raw: &RawConfig) -> Result<Duration> {
    match raw.sleep {
        None => Ok(Duration::ZERO),
        Some(secs) if secs > 0 => Ok(Duration::from_secs(secs.unsigned_abs())),
        Some(_) => Err(RepeatError::Config("sleep must be > 0".to_string())),
    }
}

fn ensure_has_command(raw: &RawConfig) -> Result<()> {
    if raw.command.is_empty() {
        return Err(RepeatError::Config(
            "you need to specify a command to invoke".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(command: &[&str]) -> RawConfig {
        RawConfig {
            command: command.iter().map(|s| s.to_string()).collect(),
            ..RawConfig::default()
        }
    }

    fn config_error(raw: RawConfig) -> String {
        match RepeatConfig::try_from(raw) {
            Err(RepeatError::Config(msg)) => msg,
            Err(e) => panic!("expected Config error, got: {e:?}"),
            Ok(cfg) => panic!("expected error, got: {cfg:?}"),
        }
    }

    #[test]
    fn defaults_are_unbounded_blocking_without_templating() {
        let cfg = RepeatConfig::try_from(raw(&["date"])).unwrap();
        assert_eq!(cfg.count(), None);
        assert_eq!(cfg.replstr(), None);
        assert_eq!(cfg.delay(), Duration::ZERO);
        assert_eq!(cfg.wait_mode(), WaitMode::Blocking);
        assert!(!cfg.verbose());
        assert_eq!(cfg.program(), "date");
    }

    #[test]
    fn empty_replstr_is_rejected() {
        let mut r = raw(&["echo"]);
        r.replstr = Some(String::new());
        assert_eq!(config_error(r), "replstr may not be empty");
    }

    #[test]
    fn non_positive_count_is_rejected() {
        for n in [0, -3] {
            let mut r = raw(&["echo"]);
            r.count = Some(n);
            assert_eq!(config_error(r), "count must be > 0");
        }
    }

    #[test]
    fn non_positive_sleep_is_rejected() {
        let mut r = raw(&["echo"]);
        r.sleep = Some(0);
        assert_eq!(config_error(r), "sleep must be > 0");
    }

    #[test]
    fn missing_command_is_rejected() {
        assert_eq!(
            config_error(raw(&[])),
            "you need to specify a command to invoke"
        );
    }

    #[test]
    fn detached_mode_forces_zero_delay() {
        let mut r = raw(&["true"]);
        r.sleep = Some(5);
        r.detach = true;
        let cfg = RepeatConfig::try_from(r).unwrap();
        assert_eq!(cfg.wait_mode(), WaitMode::Detached);
        assert_eq!(cfg.delay(), Duration::ZERO);
    }
}
