//! Left-to-right lexical classification of Scheme source bytes.
//!
//! One pass tags every byte with a [`ByteClass`]. Navigation in either
//! direction then only reads the class table, so a backward scan never has
//! to guess whether a `;` or `"` it meets opens a comment or a string.
//!
//! The pass never fails. Unterminated strings and block comments run to the
//! end of the buffer.

use crate::Cursor;

/// Lexical role of one source byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteClass {
    /// Whitespace, including line delimiters outside strings and block comments.
    Space,
    /// Any byte of a line comment or block comment, delimiters included.
    Comment,
    /// `(` or `[`.
    Open,
    /// `)` or `]`.
    Close,
    /// Quote-like prefix: `'`, `` ` ``, `,`, `,@`, or the `#` of `#(`, `#'`.
    Prefix,
    /// Opening `"` of a string literal.
    StringOpen,
    /// String body and closing `"`.
    String,
    /// Any byte of an atom: symbol, number, boolean, character literal.
    Atom,
}

impl ByteClass {
    /// Whitespace and comments: invisible to every navigation move.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, ByteClass::Space | ByteClass::Comment)
    }
}

/// Classify every byte reachable from `cursor` (which must be at offset 0).
pub fn classify(mut cursor: Cursor<'_>) -> Vec<ByteClass> {
    let mut classes = Vec::with_capacity(cursor.source_len() as usize);
    let mut at_token_start = true;

    while !cursor.is_eof() {
        let start = cursor.pos();
        let class = match cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => {
                cursor.advance();
                ByteClass::Space
            }
            b';' => {
                cursor.eat_until_newline_or_eof();
                ByteClass::Comment
            }
            b'#' if cursor.peek() == b'|' => {
                block_comment(&mut cursor);
                ByteClass::Comment
            }
            b'"' => {
                cursor.advance();
                fill(&mut classes, start, cursor.pos(), ByteClass::StringOpen);
                let body = cursor.pos();
                string_body(&mut cursor);
                fill(&mut classes, body, cursor.pos(), ByteClass::String);
                at_token_start = true;
                continue;
            }
            b'(' | b'[' => {
                cursor.advance();
                ByteClass::Open
            }
            b')' | b']' => {
                cursor.advance();
                ByteClass::Close
            }
            b'\'' | b'`' if at_token_start => {
                cursor.advance();
                ByteClass::Prefix
            }
            b',' if at_token_start => {
                cursor.advance();
                if cursor.current() == b'@' {
                    cursor.advance();
                }
                ByteClass::Prefix
            }
            b'#' if at_token_start && matches!(cursor.peek(), b'(' | b'[' | b'\'' | b'`' | b',') => {
                cursor.advance();
                ByteClass::Prefix
            }
            _ => {
                atom(&mut cursor);
                ByteClass::Atom
            }
        };
        fill(&mut classes, start, cursor.pos(), class);
        // Prefixes chain (`'#(`, `,'x`); anything else ends the token.
        at_token_start = class != ByteClass::Atom;
    }

    classes
}

#[inline]
fn fill(classes: &mut Vec<ByteClass>, start: u32, end: u32, class: ByteClass) {
    classes.resize(classes.len() + (end - start) as usize, class);
}

/// Returns `true` for bytes that end an atom.
#[inline]
fn is_atom_terminator(byte: u8) -> bool {
    matches!(
        byte,
        b' ' | b'\t' | b'\n' | b'\r' | 0x0C | b'(' | b')' | b'[' | b']' | b'"' | b';'
    )
}

/// Consume a `#| ... |#` comment, honoring nesting. Runs to EOF if unclosed.
fn block_comment(cursor: &mut Cursor<'_>) {
    let mut depth = 0u32;
    while !cursor.is_eof() {
        match (cursor.current(), cursor.peek()) {
            (b'#', b'|') => {
                depth += 1;
                cursor.advance_n(2);
            }
            (b'|', b'#') => {
                cursor.advance_n(2);
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            _ => cursor.advance(),
        }
    }
}

/// Consume a string body up to and including the closing `"`.
fn string_body(cursor: &mut Cursor<'_>) {
    loop {
        match cursor.skip_to_string_delim() {
            b'"' => {
                cursor.advance();
                return;
            }
            b'\\' => {
                cursor.advance();
                cursor.advance_char();
            }
            _ => return,
        }
    }
}

/// Consume one atom.
///
/// `#\x` character literals always take the byte after the backslash, so
/// `#\(` and `#\;` stay atoms. `|...|` is a literal section.
fn atom(cursor: &mut Cursor<'_>) {
    if cursor.current() == b'#' && cursor.peek() == b'\\' {
        cursor.advance_n(2);
        cursor.advance_char();
    }
    while !cursor.is_eof() && !is_atom_terminator(cursor.current()) {
        if cursor.current() == b'|' {
            cursor.advance();
            cursor.eat_while(|b| b != b'|');
        }
        cursor.advance_n(1);
    }
}
