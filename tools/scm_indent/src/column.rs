//! Visual columns and whitespace runs.

use scm_nav::SourceBuffer;

/// Visual column of `offset` on its line.
///
/// Every character advances the column by one, except a tab, which adds
/// `tab_width` (a flat addition, not a jump to the next tab stop).
pub fn visual_column(source: &SourceBuffer, offset: u32, tab_width: u32) -> u32 {
    let offset = offset.min(source.len());
    let line_start = source.line_start(offset);
    source.as_bytes()[line_start as usize..offset as usize]
        .iter()
        // UTF-8 continuation bytes belong to the preceding character.
        .filter(|&&byte| byte & 0xC0 != 0x80)
        .fold(0, |column, &byte| {
            column + if byte == b'\t' { tab_width } else { 1 }
        })
}

/// Length of the run of spaces and tabs starting at `offset`.
///
/// Hosts delete this run before inserting freshly computed indentation, so
/// re-indenting replaces whitespace instead of adding to it.
pub fn leading_whitespace_length(source: &SourceBuffer, offset: u32) -> u32 {
    let mut cursor = source.cursor();
    cursor.advance_n(offset);
    let start = cursor.pos();
    cursor.eat_while(|byte| byte == b' ' || byte == b'\t');
    cursor.pos() - start
}

/// A run of `width` spaces.
pub fn indentation_string(width: u32) -> String {
    " ".repeat(width as usize)
}
