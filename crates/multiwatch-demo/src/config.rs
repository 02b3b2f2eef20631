use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, ensure};

pub const ITERATIONS_VAR: &str = "MULTIWATCH_ITERATIONS";
pub const SETUP_MS_VAR: &str = "MULTIWATCH_SETUP_MS";
pub const WORK_MS_VAR: &str = "MULTIWATCH_WORK_MS";
pub const LOG_VAR: &str = "MULTIWATCH_LOG";

/// Demo settings. Every field can be overridden from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Loop iterations; each one is a single timed run.
    pub iterations: u32,
    /// Untimed setup per iteration.
    pub setup: Duration,
    /// Timed busy work per iteration.
    pub work: Duration,
    /// `env_logger` filter; `RUST_LOG` applies when unset.
    pub log_filter: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            setup: Duration::from_millis(5),
            work: Duration::from_millis(20),
            log_filter: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(n) = parse_var::<u32>(&lookup, ITERATIONS_VAR)? {
            config.iterations = n;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, SETUP_MS_VAR)? {
            config.setup = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, WORK_MS_VAR)? {
            config.work = Duration::from_millis(ms);
        }
        config.log_filter = lookup(LOG_VAR).filter(|s| !s.trim().is_empty());

        ensure!(config.iterations > 0, "{ITERATIONS_VAR} must be at least 1");
        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid value for {name}: {raw:?}"))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DemoConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_env_gives_defaults() {
        assert_eq!(load(&[]).unwrap(), DemoConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let cfg = load(&[
            (ITERATIONS_VAR, "3"),
            (SETUP_MS_VAR, " 0 "),
            (WORK_MS_VAR, "7"),
            (LOG_VAR, "debug"),
        ])
        .unwrap();
        assert_eq!(cfg.iterations, 3);
        assert_eq!(cfg.setup, Duration::ZERO);
        assert_eq!(cfg.work, Duration::from_millis(7));
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_log_filter_is_ignored() {
        let cfg = load(&[(LOG_VAR, "  ")]).unwrap();
        assert_eq!(cfg.log_filter, None);
    }

    #[test]
    fn malformed_number_names_the_variable() {
        let err = load(&[(WORK_MS_VAR, "fast")]).unwrap_err();
        assert!(err.to_string().contains(WORK_MS_VAR));
    }

    #[test]
    fn negative_number_rejected() {
        assert!(load(&[(ITERATIONS_VAR, "-1")]).is_err());
    }

    #[test]
    fn zero_iterations_rejected() {
        let err = load(&[(ITERATIONS_VAR, "0")]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }
}
