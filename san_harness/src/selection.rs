//! Reading the selection key and resolving it against the scenario registry.

use core::fmt::{self, Display};
use std::ffi::OsString;

use crate::scenario::Scenario;

/// Environment variable holding the selection key.
pub const SELECTION_VAR: &str = "TEST_SANITIZER";

/// The only recoverable conditions of the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The variable is unset or empty.
    Missing,
    /// The key names no registered scenario.
    Unrecognized(String),
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Missing env. param: {SELECTION_VAR}"),
            Self::Unrecognized(_) => write!(f, "Unknown env. param: {SELECTION_VAR}"),
        }
    }
}

/// Turns the raw variable into a non-empty key.
///
/// A value that is not valid unicode cannot match any key, so it is kept
/// (lossily) and left for [`resolve`] to reject.
pub fn read_key(value: Option<OsString>) -> Result<String, SelectionError> {
    let key = value
        .map(|v| v.into_string().unwrap_or_else(|v| v.to_string_lossy().into_owned()))
        .unwrap_or_default();
    if key.is_empty() {
        return Err(SelectionError::Missing);
    }
    Ok(key)
}

pub fn resolve(key: &str) -> Result<Scenario, SelectionError> {
    key.parse::<Scenario>()
        .map_err(|_| SelectionError::Unrecognized(key.to_owned()))
}
