//! Form Classification Table: head symbol to indentation policy.
//!
//! Lookup is exact and case-sensitive on the symbol's literal text. Symbols
//! without an entry use [`IndentPolicy::Default`]. The engine only reads the
//! table; hosts build it once from the built-in keywords and their own
//! overrides.

use rustc_hash::FxHashMap;

use crate::keywords::SCHEME_KEYWORDS;
use crate::{IndentPolicy, PolicyParseError};

/// Mapping from head symbol to [`IndentPolicy`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormTable {
    entries: FxHashMap<String, IndentPolicy>,
}

impl FormTable {
    /// A table with no entries: every form uses [`IndentPolicy::Default`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Scheme keyword classification.
    pub fn scheme() -> Self {
        SCHEME_KEYWORDS
            .iter()
            .map(|&(symbol, policy)| (symbol.to_owned(), policy))
            .collect()
    }

    /// Classify `symbol`, replacing any previous entry.
    pub fn insert(&mut self, symbol: impl Into<String>, policy: IndentPolicy) {
        self.entries.insert(symbol.into(), policy);
    }

    /// Apply host overrides on top of the current entries.
    #[must_use]
    pub fn with_overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, IndentPolicy)>,
        S: Into<String>,
    {
        for (symbol, policy) in overrides {
            self.insert(symbol, policy);
        }
        self
    }

    /// Policy for a head symbol.
    pub fn policy_for(&self, symbol: &str) -> IndentPolicy {
        self.entries.get(symbol).copied().unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<(S, IndentPolicy)> for FormTable {
    fn from_iter<I: IntoIterator<Item = (S, IndentPolicy)>>(iter: I) -> Self {
        Self::empty().with_overrides(iter)
    }
}

/// Parse one `SYMBOL=POLICY` override, as in `my-let=with:1`.
pub fn parse_override(text: &str) -> Result<(String, IndentPolicy), PolicyParseError> {
    let Some((symbol, policy)) = text.split_once('=') else {
        return Err(PolicyParseError::MalformedOverride(text.to_owned()));
    };
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(PolicyParseError::MalformedOverride(text.to_owned()));
    }
    Ok((symbol.to_owned(), policy.parse()?))
}
