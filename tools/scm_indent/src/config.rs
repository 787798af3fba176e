//! Indenter configuration.

/// Columns a tab character advances.
pub const DEFAULT_TAB_WIDTH: u32 = 8;

/// Comment prefix continued onto a new line.
pub const DEFAULT_COMMENT_PREFIX: &str = ";;";

/// Settings the host supplies to the indenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentConfig {
    /// Columns added per tab character when measuring a line. Positive.
    pub tab_width: u32,

    /// Whether a newline typed on a comment line starts another comment
    /// line instead of being indented.
    pub continue_comments: bool,

    /// Prefix recognized and repeated by comment continuation.
    pub comment_prefix: String,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            continue_comments: true,
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_owned(),
        }
    }
}

impl IndentConfig {
    /// Create a config with the specified tab width.
    pub fn with_tab_width(tab_width: u32) -> Self {
        Self {
            tab_width,
            ..Default::default()
        }
    }

    /// Create a config that never continues comments.
    pub fn without_comment_continuation() -> Self {
        Self {
            continue_comments: false,
            ..Default::default()
        }
    }
}
