//! Typed access to environment variables by short key.
//!
//! ```
//! use keyenv::EnvConfig;
//!
//! let cfg = EnvConfig::new("app");
//! assert_eq!(cfg.resolve("test1.redirect"), "APP_TEST1_REDIRECT");
//! let port = cfg.int("port", 8080);
//! let hosts = cfg.slice("spam_hosts").unwrap_or_default();
//! # let _ = (port, hosts);
//! ```
//!
//! The process-wide facade in [`global`] keeps the "set the prefix once,
//! read anywhere" style for callers that want it.

pub mod cli;
pub mod config;
pub mod dotenv;
pub mod global;
pub mod observability;

pub use config::EnvConfig;
pub use global::{bool, int, prefix, resolve, set_prefix, slice, string, string_or};
pub use keyenv_core::{Lookup, Prefix, ReadEnv, SystemEnv, ValueError};
