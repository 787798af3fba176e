//! Scheme Indenter
//!
//! Computes the indentation of a new line in parenthesized source text,
//! from the text alone, as the user types.
//!
//! # Architecture
//!
//! Indentation is inferred in two steps:
//!
//! 1. **Anchor**: navigate from the insertion point with a
//!    [`scm_nav::Navigator`] to classify the structural situation (top of
//!    buffer, first slot of a list, after a sibling under a symbol head, ...).
//! 2. **Policy**: when the enclosing form starts with a symbol, look the
//!    symbol up in the [`FormTable`] and apply its [`IndentPolicy`].
//!
//! # Modules
//!
//! - [`policy`]: the closed set of indentation policies and their text syntax
//! - [`table`]: symbol to policy mapping with built-in Scheme keywords
//! - [`config`]: tab width and comment continuation settings
//! - [`column`]: visual columns and whitespace runs
//! - [`engine`]: the inference algorithm
//! - [`strategy`]: newline auto-edit for editor hosts
//! - [`reindent`]: re-derive the indentation of a range of lines

pub mod column;
pub mod config;
pub mod engine;
mod keywords;
pub mod policy;
pub mod reindent;
pub mod strategy;
pub mod table;

pub use column::{indentation_string, leading_whitespace_length, visual_column};
pub use config::{IndentConfig, DEFAULT_COMMENT_PREFIX, DEFAULT_TAB_WIDTH};
pub use engine::{Anchor, Indenter};
pub use policy::{IndentPolicy, PolicyParseError};
pub use reindent::{reindent, reindent_all};
pub use strategy::{AutoIndent, TextEdit};
pub use table::FormTable;
