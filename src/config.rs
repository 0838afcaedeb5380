//! Provides the program's configuration, read from the environment.

use crate::util::{self, LogLevel};
use anyhow::Context;
use log::*;
use serde::Deserialize;
use serde_with::with_prefix;

/// The prefix used with every environment variable related to the program configuration.
pub const APP_PREFIX: &str = "ARMATORIO_";

with_prefix!(prefix_log "log_");

/// The program's configuration.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Contains the logging configuration.
    #[serde(flatten, with = "prefix_log")]
    pub log: LogConfig,
}

/// The program's logging configuration.
#[derive(Debug, Deserialize, Default)]
pub struct LogConfig {
    /// The log level to use.
    #[serde(default)]
    pub level: LogLevel,
}

impl Config {
    /// Returns a new `Config` read from `ARMATORIO_`-prefixed environment variables.
    pub fn from_env() -> anyhow::Result<Config> {
        Ok(envy::prefixed(APP_PREFIX)
            .from_env::<Config>()
            .with_context(|| {
                format!(
                    "Failed to load Config from environment variables.\nConfig env:\n{}",
                    util::dump_env(APP_PREFIX)
                )
            })?)
    }

    /// Logs the configuration values with the debug log level.
    pub fn debug_values(&self) {
        debug!("{:?}", util::dump_env_lines(APP_PREFIX));
        debug!("{:?}", self);
    }
}
