//! Environment-variable helpers with typed errors.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading process environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// The variable is set but its value does not parse into the requested type.
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid {
        /// Variable name.
        name: String,
        /// Raw value as found in the environment.
        value: String,
    },
}

/// Reads an optional environment variable. Unset and empty values both map to `None`.
pub fn get_env_var_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Reads an optional environment variable and parses it with [`FromStr`].
///
/// Returns `Ok(None)` when the variable is unset, and [`EnvError::Invalid`]
/// when it is set to something that does not parse.
pub fn parse_env_var<T: FromStr>(name: &str) -> Result<Option<T>, EnvError> {
    match get_env_var_opt(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| EnvError::Invalid {
                name: name.to_string(),
                value: raw,
            }),
    }
}
