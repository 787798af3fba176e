//! Command implementations.
//!
//! Commands return their output instead of printing it; `main.rs` owns
//! stdout, stderr and the exit status.

use std::io;
use std::path::Path;

use scm_indent::{reindent_all, Indenter};
use scm_nav::SourceBuffer;

use crate::options::IndentOptions;
use crate::CliError;

/// Result of `fmt` on one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The file is already indented.
    Unchanged(String),
    /// The re-indented text differs from the file.
    Reindented(String),
}

impl FormatOutcome {
    pub fn text(&self) -> &str {
        match self {
            FormatOutcome::Unchanged(text) | FormatOutcome::Reindented(text) => text,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, FormatOutcome::Reindented(_))
    }
}

/// Read a source file as UTF-8.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::NotFound {
            path: path.to_owned(),
        },
        io::ErrorKind::InvalidData => CliError::InvalidUtf8 {
            path: path.to_owned(),
        },
        _ => CliError::Read {
            path: path.to_owned(),
            source,
        },
    })
}

/// Re-indent a whole source text.
pub fn format_source(content: &str, options: &IndentOptions) -> FormatOutcome {
    let formatted = reindent_all(content, &options.table, &options.config);
    if formatted == content {
        FormatOutcome::Unchanged(formatted)
    } else {
        FormatOutcome::Reindented(formatted)
    }
}

/// Column a newline inserted at byte `offset` of `content` would indent to.
pub fn indent_at(content: &str, offset: u32, options: &IndentOptions) -> Result<u32, CliError> {
    let source = SourceBuffer::new(content);
    if offset > source.len() {
        return Err(CliError::OffsetOutOfRange {
            offset,
            len: source.len(),
        });
    }
    let mut indenter = Indenter::new(&source, &options.table, &options.config);
    Ok(indenter.indentation_for(offset))
}

/// `scmi fmt <file>`.
pub fn run_fmt(path: &Path, options: &IndentOptions) -> Result<FormatOutcome, CliError> {
    let content = read_file(path)?;
    let outcome = format_source(&content, options);
    tracing::debug!(
        path = %path.display(),
        changed = outcome.is_changed(),
        "formatted file"
    );
    Ok(outcome)
}

/// `scmi indent <file> <offset>`.
pub fn run_indent(path: &Path, offset: &str, options: &IndentOptions) -> Result<u32, CliError> {
    let offset = offset
        .parse()
        .map_err(|_| CliError::InvalidOffset(offset.to_owned()))?;
    let content = read_file(path)?;
    indent_at(&content, offset, options)
}
