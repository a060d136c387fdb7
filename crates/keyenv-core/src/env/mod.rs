//! Read-only view of the host environment.
//!
//! Nothing outside the test-support helpers writes variables.
//! Accessors never touch `std::env` directly; they go through [`ReadEnv`]
//! so tests can swap in an `InMemoryEnv`.
//!
//! ```
//! use keyenv_core::env::{raw_value, ReadEnv, SystemEnv};
//!
//! fn database_url<E: ReadEnv>(env: &E) -> String {
//!     raw_value(env, "APP_DATABASE_URL").unwrap_or_else(|| "postgres://localhost".to_string())
//! }
//!
//! let url = database_url(&SystemEnv);
//! ```

#[cfg(any(test, feature = "test-support"))]
mod in_memory;
mod read_env;
#[cfg(any(test, feature = "test-support"))]
mod setup;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
#[cfg(any(test, feature = "test-support"))]
pub use setup::{remove_env_var, set_env_var, ScopedEnvGuard};
pub use system::SystemEnv;

use std::env::VarError;

/// Single read of `name`, collapsed to "has a usable value or not".
///
/// An unset variable and a variable set to `""` are both `None`; callers
/// cannot tell them apart. Non-Unicode values are converted lossily.
pub fn raw_value<E: ReadEnv + ?Sized>(env: &E, name: &str) -> Option<String> {
    match env.var(name) {
        Ok(v) if v.is_empty() => None,
        Ok(v) => Some(v),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(os.to_string_lossy().into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_present() {
        let env = InMemoryEnv::new();
        env.set("APP_LOGIN", "@test:example.com");
        assert_eq!(raw_value(&env, "APP_LOGIN").as_deref(), Some("@test:example.com"));
    }

    #[test]
    fn test_raw_value_missing_and_empty_collapse() {
        let env = InMemoryEnv::new();
        env.set("APP_EMPTY", "");
        assert_eq!(raw_value(&env, "APP_EMPTY"), None);
        assert_eq!(raw_value(&env, "APP_NONE"), None);
    }

    /// Always answers with a value that is not valid Unicode.
    #[cfg(unix)]
    struct NonUnicodeEnv;

    #[cfg(unix)]
    impl ReadEnv for NonUnicodeEnv {
        fn var(&self, _key: &str) -> Result<String, VarError> {
            use std::os::unix::ffi::OsStringExt;
            Err(VarError::NotUnicode(std::ffi::OsString::from_vec(vec![0xff])))
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_value_non_unicode_is_lossy() {
        let raw = raw_value(&NonUnicodeEnv, "APP_PORT");
        assert_eq!(raw.as_deref(), Some("\u{FFFD}"));
        assert!(crate::value::parse_int("APP_PORT", raw.as_deref()).is_malformed());
        assert!(crate::value::parse_bool("APP_PORT", raw.as_deref()).is_malformed());
    }

    #[test]
    fn test_raw_value_keeps_whitespace() {
        let env = InMemoryEnv::new();
        env.set("APP_BLANK", "   ");
        assert_eq!(raw_value(&env, "APP_BLANK").as_deref(), Some("   "));
    }
}
