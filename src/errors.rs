//! Error types for the demonstration
//!
//! This module defines [`DemoError`]. Every demonstrated value is a literal, so
//! the demonstration itself has no runtime failure modes; errors come from frame
//! bookkeeping, command-line parsing, and writing to the output stream.

use std::fmt;
use std::io;

/// Errors that can occur while building or printing the demonstration
#[derive(Debug)]
pub enum DemoError {
    /// A local with this name was already declared in the frame
    DuplicateVariable { name: String },

    /// Lookup of a local that was never declared
    UnknownVariable { name: String },

    /// Unrecognized command-line argument
    UnknownArgument { arg: String },

    /// Writing to the output stream failed
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' is already declared", name)
            }
            DemoError::UnknownVariable { name } => {
                write!(f, "Variable '{}' is not declared", name)
            }
            DemoError::UnknownArgument { arg } => {
                write!(f, "unknown argument '{}'", arg)
            }
            DemoError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        DemoError::Io(e)
    }
}
