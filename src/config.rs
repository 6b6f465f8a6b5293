//! Runtime settings for the `cidr-tools` binary.
//!
//! Values come from the environment (a `.env` file is loaded first by `main`).

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
pub const ENV_LOG_CONFIG: &str = "CIDR_TOOLS_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "CIDR_TOOLS_LOG_LEVEL";
pub const ENV_EXPAND_LIMIT: &str = "CIDR_TOOLS_EXPAND_LIMIT";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;
/// Addresses printed by `expand` unless told otherwise. `0` lifts the limit.
pub const DEFAULT_EXPAND_LIMIT: usize = 65_536;

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: PathBuf,
    pub log_level: LevelFilter,
    pub expand_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(LOG_CONFIG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
            expand_limit: DEFAULT_EXPAND_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unparsable values fall back to the defaults.
    fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let log_config = lookup(ENV_LOG_CONFIG)
            .map(PathBuf::from)
            .unwrap_or(defaults.log_config);

        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(level) => level.trim().parse().unwrap_or_else(|_| {
                eprintln!("Ignoring {ENV_LOG_LEVEL}={level:?}, using {DEFAULT_LOG_LEVEL}");
                DEFAULT_LOG_LEVEL
            }),
            None => defaults.log_level,
        };

        let expand_limit = match lookup(ENV_EXPAND_LIMIT) {
            Some(limit) => limit.trim().parse().unwrap_or_else(|_| {
                eprintln!("Ignoring {ENV_EXPAND_LIMIT}={limit:?}, using {DEFAULT_EXPAND_LIMIT}");
                DEFAULT_EXPAND_LIMIT
            }),
            None => defaults.expand_limit,
        };

        Settings {
            log_config,
            log_level,
            expand_limit,
        }
    }
}

/// Start log4rs from the yaml file, or log to stderr at `log_level` when it is missing.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if Path::new(&settings.log_config).exists() {
        log4rs::init_file(&settings.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                settings.log_config.display()
            )
        })?;
        log::debug!("Logging configured from {}", settings.log_config.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(settings.log_level))
        .map_err(|e| format!("Error building log config: {e}"))?;
    log4rs::init_config(config).map_err(|e| format!("Error initializing log4rs: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(settings(&[]), Settings::default());
        assert_eq!(Settings::default().log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_overrides() {
        let s = settings(&[
            (ENV_LOG_CONFIG, "/etc/cidr/log.yml"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_EXPAND_LIMIT, " 10 "),
        ]);
        assert_eq!(s.log_config, PathBuf::from("/etc/cidr/log.yml"));
        assert_eq!(s.log_level, LevelFilter::Debug);
        assert_eq!(s.expand_limit, 10);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let s = settings(&[(ENV_LOG_LEVEL, "loud"), (ENV_EXPAND_LIMIT, "-1")]);
        assert_eq!(s.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(s.expand_limit, DEFAULT_EXPAND_LIMIT);
    }
}
