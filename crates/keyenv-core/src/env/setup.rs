//! Process-env mutation for test setup only. Nothing in the read path calls these.
//!
//! Call before spawning threads that read the environment.

use std::env;
use std::ffi::OsString;

pub fn set_env_var(key: &str, value: &str) {
    env::set_var(key, value);
}

pub fn remove_env_var(key: &str) {
    env::remove_var(key);
}

/// Sets (or unsets) a variable and restores its previous state on drop.
pub struct ScopedEnvGuard {
    key: String,
    previous: Option<OsString>,
}

impl ScopedEnvGuard {
    pub fn set(key: impl Into<String>, value: &str) -> Self {
        let key = key.into();
        let previous = env::var_os(&key);
        set_env_var(&key, value);
        Self { key, previous }
    }

    pub fn unset(key: impl Into<String>) -> Self {
        let key = key.into();
        let previous = env::var_os(&key);
        remove_env_var(&key);
        Self { key, previous }
    }
}

impl Drop for ScopedEnvGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(v) => env::set_var(&self.key, v),
            None => remove_env_var(&self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_env_guard_restores_previous_value() {
        set_env_var("KEYENV_CORE_TEST_GUARD", "before");
        {
            let _guard = ScopedEnvGuard::set("KEYENV_CORE_TEST_GUARD", "during");
            assert_eq!(env::var("KEYENV_CORE_TEST_GUARD").unwrap(), "during");
        }
        assert_eq!(env::var("KEYENV_CORE_TEST_GUARD").unwrap(), "before");
        remove_env_var("KEYENV_CORE_TEST_GUARD");
    }

    #[test]
    fn test_scoped_env_guard_removes_when_previously_unset() {
        remove_env_var("KEYENV_CORE_TEST_GUARD2");
        {
            let _guard = ScopedEnvGuard::set("KEYENV_CORE_TEST_GUARD2", "during");
        }
        assert!(env::var_os("KEYENV_CORE_TEST_GUARD2").is_none());
    }

    #[test]
    fn test_scoped_env_guard_unset_restores() {
        set_env_var("KEYENV_CORE_TEST_GUARD3", "kept");
        {
            let _guard = ScopedEnvGuard::unset("KEYENV_CORE_TEST_GUARD3");
            assert!(env::var_os("KEYENV_CORE_TEST_GUARD3").is_none());
        }
        assert_eq!(env::var("KEYENV_CORE_TEST_GUARD3").unwrap(), "kept");
        remove_env_var("KEYENV_CORE_TEST_GUARD3");
    }
}
