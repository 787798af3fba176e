//! CLI error type.

use std::io;
use std::path::PathBuf;

use scm_indent::PolicyParseError;

/// Anything that stops a command before it produces output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("tab width must be a positive integer, found '{0}'")]
    InvalidTabWidth(String),
    #[error("offset must be a non-negative integer, found '{0}'")]
    InvalidOffset(String),
    #[error("offset {offset} is past the end of the file ({len} bytes)")]
    OffsetOutOfRange { offset: u32, len: u32 },
    #[error(transparent)]
    Policy(#[from] PolicyParseError),
}
