//! `keyenv` command line: inspect what a short key resolves to.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use keyenv_core::{Lookup, ReadEnv, ValueError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::EnvConfig;

/// keyenv - typed environment lookups by short key
#[derive(Parser, Debug)]
#[command(name = "keyenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Variable-name prefix, e.g. "app" for APP_*
    #[arg(long, env = "KEYENV_PREFIX", default_value = "", global = true)]
    pub prefix: String,

    /// Load this .env file before any lookup (existing variables win)
    #[arg(long, value_name = "PATH", global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the fully-qualified variable name for a short key
    Resolve {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Read a short key as the given type
    Get {
        #[arg(value_name = "KEY")]
        key: String,

        /// Target type
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,

        /// Fallback when the variable is missing (string and int only)
        #[arg(long)]
        default: Option<String>,

        /// Fail on missing or malformed values instead of falling back
        #[arg(long)]
        strict: bool,

        /// Print a JSON object with the lookup status
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Int,
    Bool,
    List,
}

/// Why `get --strict` refused to fall back.
#[derive(Debug, Error)]
pub enum StrictError {
    #[error("{name} is not set")]
    Missing { name: String },

    #[error(transparent)]
    Malformed(#[from] ValueError),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Found,
    Missing,
    Malformed,
}

#[derive(Debug, Serialize)]
struct GetReport {
    key: String,
    name: String,
    status: Status,
    value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run a parsed command against `cfg`, writing results to `out`.
pub fn run<E: ReadEnv>(command: &Commands, cfg: &EnvConfig<E>, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Resolve { key } => {
            writeln!(out, "{}", cfg.resolve(key))?;
        }
        Commands::Get {
            key,
            kind,
            default,
            strict,
            json,
        } => {
            if default.is_some() && matches!(kind, ValueKind::Bool | ValueKind::List) {
                bail!("--default is only supported with --as string or --as int");
            }
            let (status, error) = lookup_status(cfg, key, *kind);
            if *strict {
                if let Some(e) = &error {
                    return Err(StrictError::from(e.clone()).into());
                }
                if matches!(status, Status::Missing) {
                    return Err(StrictError::Missing {
                        name: cfg.resolve(key),
                    }
                    .into());
                }
            }
            let error = error.map(|e| e.to_string());
            let value = legacy_value(cfg, key, *kind, default.as_deref())?;
            if *json {
                let report = GetReport {
                    key: key.clone(),
                    name: cfg.resolve(key),
                    status,
                    value,
                    error,
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(out, "{}", render_plain(&value))?;
            }
        }
    }
    Ok(())
}

fn lookup_status<E: ReadEnv>(
    cfg: &EnvConfig<E>,
    key: &str,
    kind: ValueKind,
) -> (Status, Option<ValueError>) {
    fn classify<T>(lookup: Lookup<T>) -> (Status, Option<ValueError>) {
        match lookup {
            Lookup::Found(_) => (Status::Found, None),
            Lookup::Missing => (Status::Missing, None),
            Lookup::Malformed(e) => (Status::Malformed, Some(e)),
        }
    }
    match kind {
        ValueKind::String => classify(cfg.lookup_string(key)),
        ValueKind::Int => classify(cfg.lookup_int(key)),
        ValueKind::Bool => classify(cfg.lookup_bool(key)),
        ValueKind::List => classify(cfg.lookup_slice(key)),
    }
}

fn legacy_value<E: ReadEnv>(
    cfg: &EnvConfig<E>,
    key: &str,
    kind: ValueKind,
    default: Option<&str>,
) -> Result<Value> {
    Ok(match kind {
        ValueKind::String => Value::from(cfg.string_or(key, default.unwrap_or(""))),
        ValueKind::Int => {
            let default = match default {
                Some(d) => d
                    .parse::<i64>()
                    .with_context(|| format!("--default {:?} is not an integer", d))?,
                None => 0,
            };
            Value::from(cfg.int(key, default))
        }
        ValueKind::Bool => Value::from(cfg.bool(key)),
        ValueKind::List => match cfg.slice(key) {
            Some(items) => Value::from(items),
            None => Value::Null,
        },
    })
}

fn render_plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
