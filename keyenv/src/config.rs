//! `EnvConfig`: a prefix plus an environment, with one accessor per type.
//!
//! The plain accessors never fail and never log:
//!
//! | Accessor | Missing | Malformed |
//! |----------|---------|-----------|
//! | [`string`](EnvConfig::string) / [`string_or`](EnvConfig::string_or) | `""` / default | n/a |
//! | [`int`](EnvConfig::int) | default | `0` |
//! | [`bool`](EnvConfig::bool) | `false` | `false` |
//! | [`slice`](EnvConfig::slice) | `None` | n/a |
//!
//! A malformed value is **not** replaced by the caller's default. Use the
//! `lookup_*` variants to tell missing and malformed apart.
//!
//! A variable set to `""` counts as missing.

use keyenv_core::value::{parse_bool, parse_int, split_list, Lookup};
use keyenv_core::{raw_value, Prefix, ReadEnv, SystemEnv};

#[derive(Debug, Clone)]
pub struct EnvConfig<E: ReadEnv = SystemEnv> {
    prefix: Prefix,
    env: E,
}

impl EnvConfig<SystemEnv> {
    /// Read from the process environment.
    pub fn new(prefix: impl Into<Prefix>) -> Self {
        Self::with_env(prefix, SystemEnv)
    }
}

impl<E: ReadEnv> EnvConfig<E> {
    pub fn with_env(prefix: impl Into<Prefix>, env: E) -> Self {
        Self {
            prefix: prefix.into(),
            env,
        }
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Fully-qualified variable name for `key`.
    pub fn resolve(&self, key: &str) -> String {
        self.prefix.resolve(key)
    }

    fn raw(&self, key: &str) -> (String, Option<String>) {
        let name = self.resolve(key);
        let raw = raw_value(&self.env, &name);
        (name, raw)
    }

    pub fn string(&self, key: &str) -> String {
        self.string_or(key, "")
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.raw(key).1.unwrap_or_else(|| default.to_string())
    }

    /// Missing → `default`; present but not an integer → `0`.
    pub fn int(&self, key: &str, default: i64) -> i64 {
        self.lookup_int(key).unwrap_or_legacy(default, 0)
    }

    /// `true` only for `true`/`yes`/`1` in any casing.
    pub fn bool(&self, key: &str) -> bool {
        self.lookup_bool(key).unwrap_or_legacy(false, false)
    }

    /// Whitespace-separated list. `None` when the variable is missing.
    pub fn slice(&self, key: &str) -> Option<Vec<String>> {
        self.lookup_slice(key).found()
    }

    pub fn lookup_string(&self, key: &str) -> Lookup<String> {
        match self.raw(key).1 {
            Some(v) => Lookup::Found(v),
            None => Lookup::Missing,
        }
    }

    pub fn lookup_int(&self, key: &str) -> Lookup<i64> {
        let (name, raw) = self.raw(key);
        parse_int(&name, raw.as_deref())
    }

    /// Unlike [`bool`](Self::bool), reports values outside the known
    /// true/false tokens as malformed.
    pub fn lookup_bool(&self, key: &str) -> Lookup<bool> {
        let (name, raw) = self.raw(key);
        parse_bool(&name, raw.as_deref())
    }

    pub fn lookup_slice(&self, key: &str) -> Lookup<Vec<String>> {
        match self.raw(key).1 {
            Some(v) => Lookup::Found(split_list(&v)),
            None => Lookup::Missing,
        }
    }
}
