//! keyenv core: the pieces with actual logic.
//!
//! | Concern | Module | Entry points |
//! |---------|--------|--------------|
//! | Host environment (read-only) | [`env`] | [`ReadEnv`], [`SystemEnv`], `InMemoryEnv`* |
//! | Short key → variable name | [`key`] | [`Prefix`], [`resolve`] |
//! | Typed parsing | [`value`] | [`Lookup`], [`parse_int`], [`parse_bool`], [`split_list`] |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature, together
//! with `set_env_var`, `remove_env_var` and `ScopedEnvGuard` for test setup.

pub mod env;
pub mod error;
pub mod key;
pub mod value;

#[cfg(any(test, feature = "test-support"))]
pub use env::{remove_env_var, set_env_var, ScopedEnvGuard};
pub use env::{raw_value, ReadEnv, SystemEnv};
pub use error::ValueError;
pub use key::{resolve, Prefix, KEY_DELIMITER, NAME_SEPARATOR};
pub use value::{parse_bool, parse_int, split_list, Lookup};
