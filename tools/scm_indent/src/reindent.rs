//! Region re-indent.
//!
//! Re-derives the indentation of whole lines with the same engine used for
//! newline insertion. Lines are processed top to bottom and each one is
//! computed against the text already re-indented above it, so a second run
//! over the output changes nothing.

use std::ops::Range;

use scm_nav::{ByteClass, SourceBuffer};

use crate::{indentation_string, leading_whitespace_length, FormTable, IndentConfig, Indenter};

/// Re-indent every line of `text`.
pub fn reindent_all(text: &str, table: &FormTable, config: &IndentConfig) -> String {
    reindent(text, 0..usize::MAX, table, config)
}

/// Re-indent the zero-based line range `lines` of `text`.
///
/// Each line's leading spaces and tabs are replaced by exactly the computed
/// number of spaces. Whitespace-only lines become empty. Lines that start
/// inside a multi-line string or block comment are left as they are. Lines
/// outside `lines` are copied unchanged.
pub fn reindent(
    text: &str,
    lines: Range<usize>,
    table: &FormTable,
    config: &IndentConfig,
) -> String {
    let mut text = text.to_owned();
    let mut source = SourceBuffer::new(&text);
    let end = lines.end.min(source.line_count());

    for line in lines.start..end {
        let Some(start) = source.line_start_of(line) else {
            break;
        };
        if starts_inside_literal(&source, start) {
            continue;
        }

        let run = leading_whitespace_length(&source, start);
        let column = if start + run == source.line_end(start) {
            0
        } else {
            Indenter::new(&source, table, config).indentation_for(start)
        };

        let replaced = start as usize..(start + run) as usize;
        let indentation = indentation_string(column);
        if text[replaced.clone()] == indentation {
            continue;
        }

        tracing::debug!(line, column, old = run, "re-indented line");
        text.replace_range(replaced, &indentation);
        source = SourceBuffer::new(&text);
    }

    text
}

/// Whether the line delimiter before `start` belongs to a string or a
/// block comment.
fn starts_inside_literal(source: &SourceBuffer, start: u32) -> bool {
    start > 0
        && matches!(
            source.class_at(start - 1),
            Some(ByteClass::String | ByteClass::Comment)
        )
}
