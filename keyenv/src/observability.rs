//! Tracing init, configured through keyenv itself.
//!
//! Reads `<PREFIX>_QUIET`, `<PREFIX>_LOG_LEVEL` and `<PREFIX>_LOG_JSON`.
//! `RUST_LOG` takes precedence over all of them.

use keyenv_core::ReadEnv;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::EnvConfig;

const DEFAULT_LEVEL: &str = "keyenv=info";
const QUIET_LEVEL: &str = "keyenv=warn";

/// Logging settings derived from an [`EnvConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_config<E: ReadEnv>(cfg: &EnvConfig<E>) -> Self {
        Self {
            quiet: cfg.bool("quiet"),
            log_level: cfg.string_or("log.level", DEFAULT_LEVEL),
            log_json: cfg.bool("log.json"),
        }
    }

    /// Filter directive when `RUST_LOG` is not set.
    pub fn directive(&self) -> &str {
        if self.quiet {
            QUIET_LEVEL
        } else {
            &self.log_level
        }
    }
}

/// Initialize tracing. Safe to call more than once; only the first call installs
/// a subscriber.
pub fn init_tracing<E: ReadEnv>(cfg: &EnvConfig<E>) {
    let obs = ObservabilityConfig::from_config(cfg);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(obs.directive()));

    let _ = if obs.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}
