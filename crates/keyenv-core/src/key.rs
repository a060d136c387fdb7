//! Short key → fully-qualified variable name.
//!
//! `PREFIX` + `_` + short key uppercased with every `.` turned into `_`:
//! prefix `app`, key `test1.redirect` → `APP_TEST1_REDIRECT`.
//!
//! Only letters, digits and `.` are meaningful in a short key. Other
//! punctuation is passed through unescaped.

use std::fmt;

/// Segment delimiter inside a short key.
pub const KEY_DELIMITER: char = '.';

/// Separator used in the fully-qualified name.
pub const NAME_SEPARATOR: char = '_';

/// Canonical (uppercased) variable-name prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(prefix: impl AsRef<str>) -> Self {
        Self(prefix.as_ref().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fully-qualified name for `short_key`. Never fails; an empty prefix
    /// yields names like `_LOGIN`.
    pub fn resolve(&self, short_key: &str) -> String {
        let mut name = String::with_capacity(self.0.len() + 1 + short_key.len());
        name.push_str(&self.0);
        name.push(NAME_SEPARATOR);
        for c in short_key.to_uppercase().chars() {
            name.push(if c == KEY_DELIMITER { NAME_SEPARATOR } else { c });
        }
        name
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Prefix {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Same as [`Prefix::resolve`] without keeping a `Prefix` around.
pub fn resolve(prefix: &str, short_key: &str) -> String {
    Prefix::new(prefix).resolve(short_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dotted_key() {
        assert_eq!(resolve("app", "test1.redirect"), "APP_TEST1_REDIRECT");
    }

    #[test]
    fn test_resolve_plain_and_underscored_keys() {
        let prefix = Prefix::new("app");
        assert_eq!(prefix.resolve("login"), "APP_LOGIN");
        assert_eq!(prefix.resolve("spam_hosts"), "APP_SPAM_HOSTS");
        assert_eq!(prefix.resolve("SPAM_HOSTS"), "APP_SPAM_HOSTS");
        assert_eq!(prefix.resolve("ban.duration"), "APP_BAN_DURATION");
    }

    #[test]
    fn test_prefix_casing_is_irrelevant() {
        assert_eq!(Prefix::new("App"), Prefix::new("APP"));
        assert_eq!(Prefix::new("aPp").resolve("bool.yes"), "APP_BOOL_YES");
        assert_eq!(Prefix::new("app").as_str(), "APP");
    }

    #[test]
    fn test_empty_prefix_is_degenerate_but_well_formed() {
        let prefix = Prefix::default();
        assert!(prefix.is_empty());
        assert_eq!(prefix.resolve("login"), "_LOGIN");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let prefix = Prefix::from("app");
        let first = prefix.resolve("test2.ratelimit");
        let second = prefix.resolve("test2.ratelimit");
        assert_eq!(first, second);
        assert_eq!(first, "APP_TEST2_RATELIMIT");
    }

    #[test]
    fn test_every_delimiter_is_replaced() {
        assert_eq!(resolve("app", "a.b.c.d"), "APP_A_B_C_D");
        assert_eq!(resolve("app", ".lead"), "APP__LEAD");
    }

    #[test]
    fn test_other_punctuation_passes_through() {
        assert_eq!(resolve("app", "with-dash"), "APP_WITH-DASH");
    }
}
