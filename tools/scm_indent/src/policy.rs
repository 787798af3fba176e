//! Indentation policies.
//!
//! Every symbol that heads a form maps to exactly one [`IndentPolicy`]. The
//! set is closed: the engine matches on it directly.
//!
//! # Text Syntax
//!
//! Policies have a short textual form used by overrides:
//!
//! | Text | Policy |
//! |------|--------|
//! | `default` | [`IndentPolicy::Default`] |
//! | `sequence` | [`IndentPolicy::Sequence`] |
//! | `definition` | [`IndentPolicy::Definition`] |
//! | `if`, `branch` | [`IndentPolicy::Branch`] |
//! | `with:N`, `binding:N` | [`IndentPolicy::Binding`] with threshold `N` |
//! | `none` | [`IndentPolicy::Verbatim`] |

use std::fmt;
use std::str::FromStr;

/// Column offset from the enclosing open delimiter for body forms.
pub const BODY_OFFSET: u32 = 2;

/// Column offset from the enclosing open delimiter for branch forms.
pub const BRANCH_OFFSET: u32 = 4;

/// How continuation lines of a form are indented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum IndentPolicy {
    /// Align under the first argument on the line where the previous
    /// sibling starts (ordinary call alignment).
    #[default]
    Default,
    /// Body form: open delimiter column + 2.
    Sequence,
    /// Definition form: open delimiter column + 2.
    Definition,
    /// Conditional: open delimiter column + 4.
    Branch,
    /// Header of `threshold` forms indented like [`Branch`](Self::Branch),
    /// then a body indented like [`Sequence`](Self::Sequence). The head
    /// symbol counts as one of the preceding forms.
    Binding { threshold: u32 },
    /// Align with the previous sibling, whatever line it is on.
    Verbatim,
}

impl IndentPolicy {
    /// Fixed column offset from the enclosing open delimiter, if the policy
    /// has one independent of the preceding forms.
    pub fn fixed_offset(self) -> Option<u32> {
        match self {
            IndentPolicy::Sequence | IndentPolicy::Definition => Some(BODY_OFFSET),
            IndentPolicy::Branch => Some(BRANCH_OFFSET),
            IndentPolicy::Default | IndentPolicy::Binding { .. } | IndentPolicy::Verbatim => None,
        }
    }
}

impl fmt::Display for IndentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentPolicy::Default => f.write_str("default"),
            IndentPolicy::Sequence => f.write_str("sequence"),
            IndentPolicy::Definition => f.write_str("definition"),
            IndentPolicy::Branch => f.write_str("if"),
            IndentPolicy::Binding { threshold } => write!(f, "with:{threshold}"),
            IndentPolicy::Verbatim => f.write_str("none"),
        }
    }
}

/// Invalid policy or override text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyParseError {
    #[error("unknown indentation policy `{0}`")]
    UnknownPolicy(String),
    #[error("policy `{0}` needs a threshold, as in `{0}:1`")]
    MissingThreshold(String),
    #[error("invalid threshold `{value}` for policy `{policy}`")]
    InvalidThreshold { policy: String, value: String },
    #[error("policy `{0}` takes no threshold")]
    UnexpectedThreshold(String),
    #[error("override `{0}` is not of the form SYMBOL=POLICY")]
    MalformedOverride(String),
}

impl FromStr for IndentPolicy {
    type Err = PolicyParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (name, threshold) = match text.split_once(':') {
            Some((name, threshold)) => (name.trim(), Some(threshold.trim())),
            None => (text, None),
        };

        let simple = match name {
            "default" => Some(IndentPolicy::Default),
            "sequence" => Some(IndentPolicy::Sequence),
            "definition" => Some(IndentPolicy::Definition),
            "if" | "branch" => Some(IndentPolicy::Branch),
            "none" => Some(IndentPolicy::Verbatim),
            "with" | "binding" => None,
            _ => return Err(PolicyParseError::UnknownPolicy(name.to_owned())),
        };

        match (simple, threshold) {
            (Some(policy), None) => Ok(policy),
            (Some(_), Some(_)) => Err(PolicyParseError::UnexpectedThreshold(name.to_owned())),
            (None, None) => Err(PolicyParseError::MissingThreshold(name.to_owned())),
            (None, Some(value)) => value
                .parse()
                .map(|threshold| IndentPolicy::Binding { threshold })
                .map_err(|_| PolicyParseError::InvalidThreshold {
                    policy: name.to_owned(),
                    value: value.to_owned(),
                }),
        }
    }
}
