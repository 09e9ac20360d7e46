//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables. In the browser
//! there is no process environment, so every lookup reports `MissingEnv` and
//! callers fall back to their defaults.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an optional variable: `Ok(None)` when unset, an error only when set but malformed.
pub fn get_env_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_parse(name) {
        Ok(val) => Ok(Some(val)),
        Err(Error::MissingEnv(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} is not set"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
