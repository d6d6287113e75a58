use std::path::PathBuf;

use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop the launcher. Every variant is fatal.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Selection ----------------------------------------------------------
    /// Selector outside the known language set.
    #[error("don't speak that language")]
    UnknownLanguage(String),

    // ---- Module loading -----------------------------------------------------
    /// The dynamic loader could not open the module. The loader's own message is shown as-is.
    #[error("{source}")]
    Load {
        path: PathBuf,
        source: libloading::Error,
    },

    /// The module was opened but the export is missing.
    #[error("{source}")]
    Lookup {
        symbol: &'static str,
        source: libloading::Error,
    },

    #[error("symbol '{0}' resolved to a null pointer")]
    NullSymbol(&'static str),

    /// The module was built against a different plugin ABI.
    #[error("plugin ABI version {found} is not supported (expected {expected})")]
    AbiMismatch { expected: u32, found: u32 },

    #[error("invalid greeting: {0}")]
    InvalidGreeting(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue reading `greeter.json` (invalid JSON, unknown language, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// The config file is present but could not be inspected.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown_language<S: Into<String>>(tag: S) -> Self {
        Error::UnknownLanguage(tag.into())
    }
    pub fn invalid_greeting<S: Into<String>>(reason: S) -> Self {
        Error::InvalidGreeting(reason.into())
    }
}
