//! Newline auto-edit for editor hosts.
//!
//! Hosts route every pending replacement through [`AutoIndent::customize`]
//! before applying it. Typing a newline either continues a comment line or
//! is extended with the computed indentation, replacing whatever whitespace
//! already followed the insertion point.

use scm_nav::{SourceBuffer, LINE_DELIMITERS};

use crate::{indentation_string, leading_whitespace_length, FormTable, IndentConfig, Indenter};

/// A pending replacement of `length` bytes at `offset` by `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub offset: u32,
    pub length: u32,
    pub text: String,
}

impl TextEdit {
    /// Pure insertion of `text` at `offset`.
    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        Self {
            offset,
            length: 0,
            text: text.into(),
        }
    }
}

/// Rewrites newline insertions with indentation or comment continuation.
#[derive(Clone, Copy, Debug)]
pub struct AutoIndent<'a> {
    table: &'a FormTable,
    config: &'a IndentConfig,
}

impl<'a> AutoIndent<'a> {
    pub fn new(table: &'a FormTable, config: &'a IndentConfig) -> Self {
        Self { table, config }
    }

    /// Rewrite `command` against the text it will be applied to.
    ///
    /// Returns `None` when the command is not a plain insertion ending with
    /// a line delimiter; the host then applies it unchanged.
    pub fn customize(&self, source: &SourceBuffer, command: &TextEdit) -> Option<TextEdit> {
        if command.length != 0 || !ends_with_line_delimiter(&command.text) {
            return None;
        }

        if self.continues_comment(source.line_text(command.offset)) {
            let prefix = &self.config.comment_prefix;
            return Some(TextEdit {
                text: format!("{}{prefix} ", command.text),
                ..command.clone()
            });
        }

        let column = Indenter::new(source, self.table, self.config).indentation_for(command.offset);
        Some(TextEdit {
            offset: command.offset,
            length: leading_whitespace_length(source, command.offset),
            text: format!("{}{}", command.text, indentation_string(column)),
        })
    }

    /// A line starting with the comment prefix continues, unless it holds
    /// nothing but the prefix and one space.
    fn continues_comment(&self, line: &str) -> bool {
        let prefix = self.config.comment_prefix.as_str();
        self.config.continue_comments
            && !prefix.is_empty()
            && line.starts_with(prefix)
            && line.strip_prefix(prefix) != Some(" ")
    }
}

fn ends_with_line_delimiter(text: &str) -> bool {
    LINE_DELIMITERS.iter().any(|delimiter| text.ends_with(delimiter))
}
