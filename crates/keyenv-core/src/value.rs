//! Per-type conversion of a raw value.
//!
//! Every parser takes the output of [`raw_value`](crate::env::raw_value)
//! (`None` = missing) and returns a [`Lookup`] that keeps "missing" and
//! "malformed" apart. The legacy accessors collapse it afterwards.

use crate::error::ValueError;

/// Accepted truthy tokens, compared case-insensitively.
pub const TRUTHY: &[&str] = &["true", "yes", "1"];

/// Tokens recognized as an explicit `false`. Only affects diagnostics:
/// the legacy `bool` accessor maps everything outside [`TRUTHY`] to `false`.
pub const FALSY: &[&str] = &["false", "no", "0", "off"];

/// Outcome of reading one typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    Malformed(ValueError),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Self::Found(v) => Lookup::Found(f(v)),
            Self::Missing => Lookup::Missing,
            Self::Malformed(e) => Lookup::Malformed(e),
        }
    }

    /// `Ok(None)` when missing, `Err` when malformed.
    pub fn into_result(self) -> Result<Option<T>, ValueError> {
        match self {
            Self::Found(v) => Ok(Some(v)),
            Self::Missing => Ok(None),
            Self::Malformed(e) => Err(e),
        }
    }

    /// Collapse the way the plain accessors do: `when_missing` for an absent
    /// value, `when_malformed` for a bad one. The two are deliberately separate
    /// so a caller's default never masks a malformed value.
    pub fn unwrap_or_legacy(self, when_missing: T, when_malformed: T) -> T {
        match self {
            Self::Found(v) => v,
            Self::Missing => when_missing,
            Self::Malformed(_) => when_malformed,
        }
    }
}

/// Base-10 signed integer. No trimming; `" 1"` is malformed, `"+1"` is 1.
pub fn parse_int(name: &str, raw: Option<&str>) -> Lookup<i64> {
    let Some(raw) = raw else {
        return Lookup::Missing;
    };
    match raw.parse::<i64>() {
        Ok(n) => Lookup::Found(n),
        Err(source) => Lookup::Malformed(ValueError::InvalidInt {
            name: name.to_string(),
            value: raw.to_string(),
            source,
        }),
    }
}

/// Case-insensitive match against [`TRUTHY`] / [`FALSY`].
pub fn parse_bool(name: &str, raw: Option<&str>) -> Lookup<bool> {
    let Some(raw) = raw else {
        return Lookup::Missing;
    };
    if TRUTHY.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Lookup::Found(true)
    } else if FALSY.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Lookup::Found(false)
    } else {
        Lookup::Malformed(ValueError::UnrecognizedBool {
            name: name.to_string(),
            value: raw.to_string(),
        })
    }
}

/// Split on runs of whitespace, dropping empty tokens, order preserved.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("APP_BAN_DURATION", Some("1")), Lookup::Found(1));
        assert_eq!(parse_int("APP_N", Some("-42")), Lookup::Found(-42));
        assert_eq!(parse_int("APP_N", Some("+7")), Lookup::Found(7));
        assert_eq!(parse_int("APP_NONE", None), Lookup::Missing);
    }

    #[test]
    fn test_parse_int_malformed() {
        let lookup = parse_int("APP_BAN_SIZE", Some("invalid"));
        match lookup {
            Lookup::Malformed(ValueError::InvalidInt { ref name, ref value, .. }) => {
                assert_eq!(name, "APP_BAN_SIZE");
                assert_eq!(value, "invalid");
            }
            other => panic!("expected malformed, got {:?}", other),
        }
        assert!(parse_int("APP_N", Some(" 1")).is_malformed());
        assert!(parse_int("APP_N", Some("1.5")).is_malformed());
        assert!(parse_int("APP_N", Some("99999999999999999999")).is_malformed());
    }

    #[test]
    fn test_parse_bool_truthy_any_case() {
        for raw in ["true", "True", "TRUE", "tRuE", "yes", "yEs", "YES", "1"] {
            assert_eq!(parse_bool("APP_B", Some(raw)), Lookup::Found(true), "{raw}");
        }
    }

    #[test]
    fn test_parse_bool_falsy_and_unrecognized() {
        for raw in ["false", "No", "0", "OFF"] {
            assert_eq!(parse_bool("APP_B", Some(raw)), Lookup::Found(false), "{raw}");
        }
        assert!(parse_bool("APP_B", Some("invalid")).is_malformed());
        assert!(parse_bool("APP_B", Some("on")).is_malformed());
        assert!(parse_bool("APP_B", None).is_missing());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("spamer.com unitedspammers.org"),
            vec!["spamer.com", "unitedspammers.org"]
        );
        assert_eq!(split_list("  a\t b \n c  "), vec!["a", "b", "c"]);
        assert_eq!(split_list("invalid"), vec!["invalid"]);
        assert!(split_list("   ").is_empty());
    }

    #[test]
    fn test_unwrap_or_legacy_keeps_missing_and_malformed_apart() {
        assert_eq!(parse_int("APP_N", None).unwrap_or_legacy(5, 0), 5);
        assert_eq!(parse_int("APP_N", Some("x")).unwrap_or_legacy(5, 0), 0);
        assert_eq!(parse_int("APP_N", Some("3")).unwrap_or_legacy(5, 0), 3);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(parse_int("APP_N", Some("3")).into_result(), Ok(Some(3)));
        assert_eq!(parse_int("APP_N", None).into_result(), Ok(None));
        let err = parse_bool("APP_B", Some("maybe")).into_result().unwrap_err();
        assert_eq!(err.name(), "APP_B");
        assert_eq!(err.value(), "maybe");
    }
}
