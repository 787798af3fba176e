//! Indentation Engine.
//!
//! Computing the indentation of a new line is split in two steps:
//!
//! 1. [`Indenter::anchor`] classifies the insertion point into an
//!    [`Anchor`]: what lies before it and what list encloses it.
//! 2. [`Indenter::indentation_for`] maps the anchor, and for symbol-headed
//!    lists the head's [`IndentPolicy`], to a visual column.
//!
//! Every navigator failure is ordinary control flow with a fixed fallback.

use scm_nav::{FormKind, Navigator, SourceBuffer};

use crate::{visual_column, FormTable, IndentConfig, IndentPolicy};

/// Structural situation at an insertion point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor<'a> {
    /// Nothing before the insertion point and no enclosing list.
    BufferStart,
    /// First position inside a list: no sibling precedes the insertion point.
    FirstInList { open: u32 },
    /// A previous form exists at top level.
    TopLevel { previous: u32 },
    /// Inside a list whose first child is a symbol.
    SymbolHead {
        previous: u32,
        open: u32,
        symbol: &'a str,
    },
    /// Inside a list whose first child is itself a list starting at `head`.
    ListHead { head: u32 },
    /// Inside a list headed by a string or other leaf.
    LeafHead { previous: u32 },
}

/// Indentation calculator bound to one source snapshot.
pub struct Indenter<'a> {
    nav: Navigator<'a>,
    table: &'a FormTable,
    tab_width: u32,
}

impl<'a> Indenter<'a> {
    pub fn new(source: &'a SourceBuffer, table: &'a FormTable, config: &IndentConfig) -> Self {
        Self {
            nav: Navigator::new(source),
            table,
            tab_width: config.tab_width,
        }
    }

    /// Classify the insertion point at `offset`.
    pub fn anchor(&mut self, offset: u32) -> Anchor<'a> {
        if !self.nav.backward(offset) {
            if self.nav.up(offset) {
                return Anchor::FirstInList {
                    open: self.nav.span().start,
                };
            }
            return Anchor::BufferStart;
        }

        let previous = self.nav.span().start;
        if !self.nav.up(previous) {
            return Anchor::TopLevel { previous };
        }
        let open = self.nav.span().start;

        match self.nav.down(open) {
            Ok(true) => {}
            Ok(false) => return Anchor::LeafHead { previous },
            Err(error) => {
                tracing::warn!(%error, open, "enclosing form rejected descent");
                return Anchor::LeafHead { previous };
            }
        }
        if !self.nav.forward(self.nav.span().start) {
            return Anchor::LeafHead { previous };
        }

        let head = self.nav.span();
        match head.kind {
            FormKind::Symbol => Anchor::SymbolHead {
                previous,
                open,
                symbol: self.nav.text(),
            },
            FormKind::List => Anchor::ListHead { head: head.start },
            FormKind::String | FormKind::Atom => Anchor::LeafHead { previous },
        }
    }

    /// Column a new line inserted at `offset` should be indented to.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn indentation_for(&mut self, offset: u32) -> u32 {
        let anchor = self.anchor(offset);
        let (policy, column) = match anchor {
            Anchor::BufferStart => (None, 0),
            Anchor::FirstInList { open } => (None, self.column(open) + 1),
            Anchor::TopLevel { previous } | Anchor::LeafHead { previous } => {
                (None, self.column(previous))
            }
            Anchor::ListHead { head } => (None, self.column(head)),
            Anchor::SymbolHead {
                previous,
                open,
                symbol,
            } => {
                let policy = self.table.policy_for(symbol);
                (Some(policy), self.apply(policy, offset, previous, open))
            }
        };
        tracing::trace!(?anchor, ?policy, column, "computed indentation");
        column
    }

    /// Visual column of `offset` with the configured tab width.
    pub fn column(&self, offset: u32) -> u32 {
        visual_column(self.nav.source(), offset, self.tab_width)
    }

    fn apply(&mut self, policy: IndentPolicy, offset: u32, previous: u32, open: u32) -> u32 {
        if let Some(indent) = policy.fixed_offset() {
            return self.column(open) + indent;
        }
        match policy {
            IndentPolicy::Default => {
                let leftmost = self.leftmost_on_line(previous);
                self.column(leftmost)
            }
            IndentPolicy::Binding { threshold } => {
                let body = if self.count_preceding(offset, threshold) > threshold {
                    IndentPolicy::Sequence
                } else {
                    IndentPolicy::Branch
                };
                self.column(open) + body.fixed_offset().unwrap_or_default()
            }
            IndentPolicy::Sequence
            | IndentPolicy::Definition
            | IndentPolicy::Branch
            | IndentPolicy::Verbatim => self.column(previous),
        }
    }

    /// Walk left from `previous` while the walk has not reached the start of
    /// the line `previous` is on.
    ///
    /// The check is made on the form the walk is leaving, not the one it
    /// lands on: a form that starts exactly at the line start ends the walk,
    /// and the first child of a list is never returned.
    fn leftmost_on_line(&mut self, mut previous: u32) -> u32 {
        let line_start = self.nav.source().line_start(previous);
        let mut offset = previous;
        while self.nav.backward(offset) && offset > line_start {
            previous = offset;
            offset = self.nav.span().start;
        }
        previous
    }

    /// Count forms before `offset`, stopping once the count exceeds `limit`.
    fn count_preceding(&mut self, mut offset: u32, limit: u32) -> u32 {
        let mut count = 0;
        while self.nav.backward(offset) {
            count += 1;
            if count > limit {
                break;
            }
            offset = self.nav.span().start;
        }
        count
    }
}

#[cfg(test)]
mod tests;
