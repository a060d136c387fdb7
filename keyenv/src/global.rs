//! Process-wide prefix and free-function accessors.
//!
//! Call [`set_prefix`] once at startup, then read with [`string`], [`int`],
//! [`bool`] and [`slice`]. Each call takes a snapshot of the prefix and reads
//! the live process environment, same semantics as [`EnvConfig`].

use std::sync::{PoisonError, RwLock};

use keyenv_core::{Prefix, SystemEnv};

use crate::config::EnvConfig;

static PREFIX: RwLock<Option<Prefix>> = RwLock::new(None);

/// Store the process-wide prefix. Later calls replace it.
pub fn set_prefix(prefix: impl Into<Prefix>) {
    let prefix = prefix.into();
    let mut guard = PREFIX.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(old) = guard.as_ref() {
        if *old != prefix {
            tracing::debug!(old = %old, new = %prefix, "replacing env prefix");
        }
    }
    *guard = Some(prefix);
}

/// Current prefix; empty until [`set_prefix`] runs.
pub fn prefix() -> Prefix {
    PREFIX
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_default()
}

/// Snapshot of the global settings as an [`EnvConfig`].
pub fn config() -> EnvConfig<SystemEnv> {
    EnvConfig::new(prefix())
}

pub fn resolve(key: &str) -> String {
    prefix().resolve(key)
}

pub fn string(key: &str) -> String {
    config().string(key)
}

pub fn string_or(key: &str, default: &str) -> String {
    config().string_or(key, default)
}

pub fn int(key: &str, default: i64) -> i64 {
    config().int(key, default)
}

pub fn bool(key: &str) -> bool {
    config().bool(key)
}

pub fn slice(key: &str) -> Option<Vec<String>> {
    config().slice(key)
}
