//! Cursor-style S-expression navigator.
//!
//! A [`Navigator`] is bound to one [`SourceBuffer`] snapshot and remembers
//! the span of the most recently located form. Each move takes an offset,
//! reports success as a `bool`, and on success replaces the remembered span.
//! A failed move leaves the previous span untouched.
//!
//! The borrow on the snapshot keeps a navigator from outliving the text it
//! was built for. Hosts create a fresh snapshot and navigator after every
//! edit.

use crate::scan::{self, Extent, Shape};
use crate::SourceBuffer;

/// What kind of form a [`FormSpan`] covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Bare identifier: an unprefixed atom in the symbol lexical class.
    Symbol,
    /// Delimited list.
    List,
    /// String literal, delimiters included.
    String,
    /// Any other leaf: numbers, booleans, characters, quoted atoms.
    Atom,
}

/// Half-open byte range `start..end` of one form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormSpan {
    pub start: u32,
    pub end: u32,
    pub kind: FormKind,
}

impl FormSpan {
    pub const fn new(start: u32, end: u32, kind: FormKind) -> Self {
        Self { start, end, kind }
    }
}

/// A caller broke a navigator precondition.
///
/// Malformed text never produces this: it signals a bug in the calling code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// `down` was asked to enter a form that is not a list.
    #[error("cannot descend at offset {offset}: form is {found:?}, not a list")]
    NotAList { offset: u32, found: FormKind },
}

/// Lexical class of an unprefixed atom.
///
/// Atoms starting with `#` (booleans, characters, radix numbers) and numeric
/// literals are [`FormKind::Atom`]; everything else, including `+`, `-` and
/// `...`, is a [`FormKind::Symbol`].
pub fn atom_kind(text: &str) -> FormKind {
    match text.as_bytes() {
        []
        | [b'#', ..]
        | [b'0'..=b'9', ..]
        | [b'+' | b'-' | b'.', b'0'..=b'9', ..]
        | [b'+' | b'-', b'.', b'0'..=b'9', ..] => FormKind::Atom,
        _ => FormKind::Symbol,
    }
}

/// Bidirectional navigator over one source snapshot.
#[derive(Clone, Debug)]
pub struct Navigator<'a> {
    source: &'a SourceBuffer,
    span: FormSpan,
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "class table length equals source length, which fits in u32"
)]
impl<'a> Navigator<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self {
            source,
            span: FormSpan::new(0, 0, FormKind::Atom),
        }
    }

    /// The snapshot this navigator reads.
    pub fn source(&self) -> &'a SourceBuffer {
        self.source
    }

    /// Span of the most recently located form.
    ///
    /// Only meaningful after a successful move.
    pub fn span(&self) -> FormSpan {
        self.span
    }

    /// Text covered by [`span()`](Self::span).
    pub fn text(&self) -> &'a str {
        self.source.slice(self.span.start, self.span.end)
    }

    /// Read the first complete form at or after `offset`.
    ///
    /// Whitespace and comments are skipped. Fails at end of buffer and in
    /// front of a close delimiter.
    pub fn forward(&mut self, offset: u32) -> bool {
        let classes = self.source.classes();
        match scan::form_forward(classes, offset as usize) {
            Some(extent) => {
                self.span = self.span_of(extent);
                true
            }
            None => false,
        }
    }

    /// Read the last complete form ending at or before `offset`.
    ///
    /// Whitespace and comments are skipped. Fails at buffer start and right
    /// after an open delimiter.
    pub fn backward(&mut self, offset: u32) -> bool {
        let classes = self.source.classes();
        match scan::form_backward(classes, offset as usize) {
            Some(extent) => {
                self.span = self.span_of(extent);
                true
            }
            None => false,
        }
    }

    /// Locate the innermost list strictly containing `offset`.
    ///
    /// The span starts at the list's open delimiter and ends past its close
    /// delimiter, or at end of buffer when the list is unterminated. Fails at
    /// top level.
    pub fn up(&mut self, offset: u32) -> bool {
        let classes = self.source.classes();
        let Some(open) = scan::open_backward(classes, offset as usize, 0) else {
            return false;
        };
        let end = scan::close_forward(classes, open + 1, 0).unwrap_or(classes.len());
        self.span = FormSpan::new(open as u32, end as u32, FormKind::List);
        true
    }

    /// Enter the list at or after `offset`.
    ///
    /// On success the span covers the list interior: it starts just past the
    /// open delimiter, so `forward(span().start)` reads the first child.
    /// Returns `Ok(false)` when no form follows `offset`, and
    /// [`NavError::NotAList`] when the next form is not a list.
    pub fn down(&mut self, offset: u32) -> Result<bool, NavError> {
        let classes = self.source.classes();
        let Some(extent) = scan::form_forward(classes, offset as usize) else {
            return Ok(false);
        };
        if extent.shape != Shape::List {
            return Err(NavError::NotAList {
                offset: extent.start as u32,
                found: self.span_of(extent).kind,
            });
        }

        let inner = extent.body + 1;
        let close = scan::close_forward(classes, inner, 0).map_or(classes.len(), |end| end - 1);
        self.span = FormSpan::new(inner as u32, close as u32, FormKind::List);
        Ok(true)
    }

    fn span_of(&self, extent: Extent) -> FormSpan {
        let kind = match extent.shape {
            Shape::List => FormKind::List,
            Shape::String => FormKind::String,
            Shape::Atom if extent.start == extent.body => {
                atom_kind(self.source.slice(extent.body as u32, extent.end as u32))
            }
            Shape::Atom | Shape::DanglingPrefix => FormKind::Atom,
        };
        FormSpan::new(extent.start as u32, extent.end as u32, kind)
    }
}
