//! Crate-level error types.

use std::fmt;

/// Errors produced by the hovercam crate.
///
/// The per-frame controller never fails; these cover loading and saving
/// options presets and replay scripts.
#[derive(Debug)]
pub enum HovercamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Replay script parsing failure.
    ScriptParse(String),
    /// Trace serialization failure.
    Trace(serde_json::Error),
}

impl fmt::Display for HovercamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScriptParse(msg) => {
                write!(f, "script parse error: {msg}")
            }
            Self::Trace(e) => write!(f, "trace serialization error: {e}"),
        }
    }
}

impl std::error::Error for HovercamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Trace(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HovercamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for HovercamError {
    fn from(e: serde_json::Error) -> Self {
        Self::Trace(e)
    }
}
