//! `--env-file` support for the `keyenv` binary.
//!
//! The only code that writes process variables; `keyenv-core` stays
//! read-only.
//!
//! Format: `KEY=VALUE` per line, optional `export ` prefix, `#` comment lines,
//! matching single or double quotes stripped, ` # note` tails dropped from
//! unquoted values. A bad line is rejected on its own; the rest still loads.
//! Variables already present in the process are never overridden.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotenvError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A line that could not be used. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line: usize,
    pub reason: String,
}

/// Parsed file: usable assignments in file order plus rejected lines.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    pub assignments: Vec<(String, String)>,
    pub rejected: Vec<RejectedLine>,
}

/// What [`load_from`] did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub applied: Vec<String>,
    /// Already set in the process, left untouched.
    pub kept: Vec<String>,
    pub rejected: Vec<RejectedLine>,
}

impl LoadReport {
    /// Emit one warning per rejected line. Call after tracing is initialized.
    pub fn log(&self, path: &Path) {
        for r in &self.rejected {
            tracing::warn!(
                path = %path.display(),
                line = r.line,
                "ignoring .env line: {}",
                r.reason
            );
        }
        tracing::debug!(
            path = %path.display(),
            applied = self.applied.len(),
            kept = self.kept.len(),
            rejected = self.rejected.len(),
            "loaded .env"
        );
    }
}

pub fn parse(content: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for (idx, raw) in content.lines().enumerate() {
        match parse_line(raw) {
            Ok(Some(pair)) => parsed.assignments.push(pair),
            Ok(None) => {}
            Err(reason) => parsed.rejected.push(RejectedLine {
                line: idx + 1,
                reason,
            }),
        }
    }
    parsed
}

fn parse_line(raw: &str) -> Result<Option<(String, String)>, String> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", line))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("empty key".to_string());
    }
    if key.contains(char::is_whitespace) {
        return Err(format!("key {:?} contains whitespace", key));
    }
    Ok(Some((key.to_string(), clean_value(value.trim()).to_string())))
}

fn clean_value(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    if value.starts_with('#') {
        return "";
    }
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    }
}

/// Apply `path` to the process environment.
pub fn load_from(path: impl AsRef<Path>) -> Result<LoadReport, DotenvError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DotenvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let Parsed {
        assignments,
        rejected,
    } = parse(&content);
    let mut report = LoadReport {
        rejected,
        ..LoadReport::default()
    };
    for (key, value) in assignments {
        if env::var_os(&key).is_some() {
            report.kept.push(key);
        } else {
            env::set_var(&key, value);
            report.applied.push(key);
        }
    }
    Ok(report)
}
