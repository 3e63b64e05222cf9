//! Errors raised when building relations, matrices and configuration from caller input.
pub type Result<T> = std::result::Result<T, RelationError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    #[error("pair ({a},{b}) lies outside {{1..{rows}}} × {{1..{cols}}}")]
    OutOfDomain {
        a: usize,
        b: usize,
        rows: usize,
        cols: usize,
    },

    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: usize, max: usize },

    #[error("domain must contain at least one element")]
    EmptyDomain,

    #[error("{what} {value} exceeds the limit of {max}")]
    TooLarge {
        what: &'static str,
        value: usize,
        max: usize,
    },

    #[error("cell ({row},{col}) is outside a {rows}×{cols} matrix")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid timeline: {0}")]
    InvalidTimeline(String),

    #[error("invalid settings: {0}")]
    Settings(String),
}

impl RelationError {
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::InvalidTimeline(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
