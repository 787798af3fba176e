//! Pure form scans over a [`ByteClass`] table.
//!
//! These functions know nothing about buffers or cursors: they take a class
//! slice and a position and return positions. List matching carries the
//! current nesting depth as an explicit argument, so a scan can be resumed
//! from any point and tested in isolation.
//!
//! Positions are byte indices into the class table; `pos` arguments are
//! exclusive bounds for backward scans and inclusive starts for forward ones.

use crate::ByteClass;

/// Syntactic shape of a scanned form, before symbol classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Delimited list (possibly unterminated).
    List,
    /// String literal (possibly unterminated).
    String,
    /// Atom run.
    Atom,
    /// Prefix bytes not followed by a form, such as a trailing `'`.
    DanglingPrefix,
}

/// Extent of one form found by [`form_forward`] or [`form_backward`].
///
/// `start..body` holds the form's prefixes (empty when unprefixed);
/// `body..end` is the form proper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    pub start: usize,
    pub body: usize,
    pub end: usize,
    pub shape: Shape,
}

/// First non-trivia position at or after `pos` (or `classes.len()`).
pub fn skip_trivia_forward(classes: &[ByteClass], pos: usize) -> usize {
    let mut pos = pos.min(classes.len());
    while pos < classes.len() && classes[pos].is_trivia() {
        pos += 1;
    }
    pos
}

/// Smallest position `p <= pos` such that `classes[p..pos]` is all trivia.
pub fn skip_trivia_backward(classes: &[ByteClass], pos: usize) -> usize {
    let mut pos = pos.min(classes.len());
    while pos > 0 && classes[pos - 1].is_trivia() {
        pos -= 1;
    }
    pos
}

/// Scan forward from `pos` with `depth` lists already opened past the one
/// being closed. Returns the position just after the close delimiter that
/// is reached at depth zero, or `None` if the buffer ends first.
///
/// To skip a list whose opening delimiter is at `open`, call
/// `close_forward(classes, open + 1, 0)`.
pub fn close_forward(classes: &[ByteClass], pos: usize, depth: u32) -> Option<usize> {
    let mut depth = depth;
    for (i, class) in classes.iter().enumerate().skip(pos) {
        match class {
            ByteClass::Open => depth += 1,
            ByteClass::Close if depth == 0 => return Some(i + 1),
            ByteClass::Close => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Scan backward from `pos` (exclusive) with `depth` close delimiters already
/// passed. Returns the index of the open delimiter reached at depth zero, or
/// `None` if the buffer start comes first.
///
/// With `depth == 0` from an arbitrary offset this finds the innermost
/// enclosing list. To skip a list whose close delimiter is at `close`, call
/// `open_backward(classes, close, 0)`.
pub fn open_backward(classes: &[ByteClass], pos: usize, depth: u32) -> Option<usize> {
    let mut depth = depth;
    let end = pos.min(classes.len());
    for (i, class) in classes[..end].iter().enumerate().rev() {
        match class {
            ByteClass::Close => depth += 1,
            ByteClass::Open if depth == 0 => return Some(i),
            ByteClass::Open => depth -= 1,
            _ => {}
        }
    }
    None
}

/// End of the run of `class` starting at `pos`.
fn run_end(classes: &[ByteClass], pos: usize, class: ByteClass) -> usize {
    let mut end = pos;
    while end < classes.len() && classes[end] == class {
        end += 1;
    }
    end
}

/// Start of the run of `class` that ends at `last` (inclusive).
fn run_start(classes: &[ByteClass], last: usize, class: ByteClass) -> usize {
    let mut start = last;
    while start > 0 && classes[start - 1] == class {
        start -= 1;
    }
    start
}

/// The first complete form at or after `pos`, skipping trivia.
///
/// Returns `None` when only trivia remains, or when the next significant
/// byte closes the enclosing list. Prefixes extend over trivia to their
/// datum; a prefix with no datum before a close or the buffer end is a
/// [`Shape::DanglingPrefix`]. An unterminated list or string extends
/// to the end of the buffer.
pub fn form_forward(classes: &[ByteClass], pos: usize) -> Option<Extent> {
    let len = classes.len();
    let start = skip_trivia_forward(classes, pos);
    if start >= len || classes[start] == ByteClass::Close {
        return None;
    }

    // Whitespace and comments may separate a prefix from its datum.
    let mut prefix_end = run_end(classes, start, ByteClass::Prefix);
    let mut body = skip_trivia_forward(classes, prefix_end);
    while body < len && classes[body] == ByteClass::Prefix {
        prefix_end = run_end(classes, body, ByteClass::Prefix);
        body = skip_trivia_forward(classes, prefix_end);
    }
    if body == len || classes[body] == ByteClass::Close {
        return Some(Extent {
            start,
            body: start,
            end: prefix_end,
            shape: Shape::DanglingPrefix,
        });
    }

    let (end, shape) = match classes[body] {
        ByteClass::Open => (
            close_forward(classes, body + 1, 0).unwrap_or(len),
            Shape::List,
        ),
        ByteClass::StringOpen => (run_end(classes, body + 1, ByteClass::String), Shape::String),
        // Starting inside a string body reads the rest of the literal.
        ByteClass::String => (run_end(classes, body, ByteClass::String), Shape::String),
        _ => (run_end(classes, body, ByteClass::Atom), Shape::Atom),
    };
    Some(Extent {
        start,
        body,
        end,
        shape,
    })
}

/// The last complete form ending at or before `pos`, skipping trivia.
///
/// Returns `None` at buffer start or right after an opening delimiter.
/// A close delimiter without a matching open extends the form to the
/// buffer start. Prefixes before the form are included in the extent, even
/// when whitespace or comments separate them from it.
pub fn form_backward(classes: &[ByteClass], pos: usize) -> Option<Extent> {
    let end = skip_trivia_backward(classes, pos);
    if end == 0 {
        return None;
    }
    let last = end - 1;

    let (body, shape) = match classes[last] {
        ByteClass::Open | ByteClass::Space | ByteClass::Comment => return None,
        ByteClass::Prefix => {
            let start = prefixes_before(classes, run_start(classes, last, ByteClass::Prefix));
            return Some(Extent {
                start,
                body: start,
                end,
                shape: Shape::DanglingPrefix,
            });
        }
        ByteClass::Close => (open_backward(classes, last, 0).unwrap_or(0), Shape::List),
        ByteClass::StringOpen => (last, Shape::String),
        ByteClass::String => {
            let body = run_start(classes, last, ByteClass::String);
            if body > 0 && classes[body - 1] == ByteClass::StringOpen {
                (body - 1, Shape::String)
            } else {
                (body, Shape::String)
            }
        }
        ByteClass::Atom => (run_start(classes, last, ByteClass::Atom), Shape::Atom),
    };

    Some(Extent {
        start: prefixes_before(classes, body),
        body,
        end,
        shape,
    })
}

/// Start of the chain of prefixes applying to the form at `body`, or `body`
/// itself when it is unprefixed. Trivia may separate the links.
fn prefixes_before(classes: &[ByteClass], body: usize) -> usize {
    let mut start = body;
    loop {
        let before = skip_trivia_backward(classes, start);
        if before == 0 || classes[before - 1] != ByteClass::Prefix {
            return start;
        }
        start = run_start(classes, before - 1, ByteClass::Prefix);
    }
}

#[cfg(test)]
mod tests;
