use std::num::ParseIntError;

use thiserror::Error;

/// Why a present value could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{name}={value:?} is not a base-10 integer: {source}")]
    InvalidInt {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{name}={value:?} is not a recognized boolean (expected true/yes/1 or false/no/0/off)")]
    UnrecognizedBool { name: String, value: String },
}

impl ValueError {
    /// Fully-qualified variable name the bad value came from.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidInt { name, .. } | Self::UnrecognizedBool { name, .. } => name,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::InvalidInt { value, .. } | Self::UnrecognizedBool { value, .. } => value,
        }
    }
}
