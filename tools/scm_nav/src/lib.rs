//! S-expression navigation over raw Scheme source text.
//!
//! This crate moves through parenthesized forms directly over text, without
//! building a syntax tree. Input is expected to be mid-edit: unbalanced
//! delimiters and unterminated strings are ordinary, and every move degrades
//! to a plain `false` rather than an error.
//!
//! # Architecture
//!
//! 1. [`SourceBuffer`]: an immutable snapshot of the text. Construction runs
//!    a single left-to-right classification pass ([`classify`]) that tags
//!    every byte as whitespace, comment, delimiter, prefix, string or atom.
//! 2. [`scan`]: pure functions over the class table. List matching threads
//!    an explicit nesting depth through each scan.
//! 3. [`Navigator`]: the cursor-style API (`forward`, `backward`, `up`,
//!    `down`) bound to one snapshot, remembering the last located form.
//!
//! Because the class table is computed once from the left, forward and
//! backward moves agree on where strings and comments begin and end.

mod class;
mod cursor;
mod navigator;
pub mod scan;
mod source_buffer;

pub use class::{classify, ByteClass};
pub use cursor::Cursor;
pub use navigator::{atom_kind, FormKind, FormSpan, NavError, Navigator};
pub use source_buffer::{SourceBuffer, LINE_DELIMITERS};
