//! Error types for boxmenu.
//!
//! Invalid user selections are not errors: they come back as data in
//! [`crate::select::Selection`]. Everything here is a hard failure the
//! caller has to handle.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for boxmenu.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Single-position removal outside the current line list.
    #[error("Line position {pos} is out of range (menu has {len} lines)")]
    OutOfRange { pos: usize, len: usize },

    /// Range removal whose end runs past the current line list.
    #[error("Cannot remove {count} lines starting at {start} (menu has {len} lines)")]
    RangeOutOfBounds { start: usize, count: usize, len: usize },

    /// Input stream closed while waiting for a selection.
    #[error("Input stream closed before a selection was entered")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be read or parsed.
    #[error("Configuration file {path:?} is invalid: {reason}")]
    Config { path: PathBuf, reason: String },

    /// Palette override names a color that does not exist.
    #[error("Unknown color name: {0}")]
    UnknownColor(String),
}

/// Result type alias using MenuError.
pub type Result<T> = std::result::Result<T, MenuError>;
