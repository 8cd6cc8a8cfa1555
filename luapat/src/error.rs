//! Error types for the pattern engine
//!
//! A single error enum covers pattern validation, capture access, and
//! replacement-template expansion. Matching itself is infallible on a
//! validated pattern except for the recursion-depth guard.

use thiserror::Error;

/// The error type for pattern compilation, matching, and substitution.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern exceeds the recursion budget, either counted up front
    /// by the validator or hit while backtracking.
    #[error("pattern too complex")]
    TooComplex,

    /// A `%` escape with nothing after it.
    #[error("malformed pattern (ends with '%')")]
    EndsWithPercent,

    /// A `[` set that is never closed by `]`.
    #[error("malformed pattern (missing ']')")]
    MissingBracket,

    /// `%b` needs an open and a close delimiter byte.
    #[error("malformed pattern (missing arguments to '%b')")]
    MissingBalanceArguments,

    /// `%f` must be followed directly by a `[` set.
    #[error("missing '[' after '%f' in pattern")]
    MissingFrontierSet,

    /// More `(` captures than the engine supports.
    #[error("too many captures")]
    TooManyCaptures,

    /// A `)` with no capture left open.
    #[error("invalid pattern capture")]
    InvalidCapture,

    /// A `%n` reference to a capture that does not exist or is not
    /// finished at that point, in a pattern or a replacement template.
    #[error("invalid capture index %{0}")]
    InvalidCaptureIndex(usize),

    /// A capture still open when the pattern ends.
    #[error("unfinished capture")]
    UnfinishedCapture,

    /// A capture index past the end of a match result.
    #[error("no capture at index {0}")]
    CaptureOutOfRange(usize),

    /// A `%` in a replacement template followed by anything other than
    /// `%` or a digit.
    #[error("invalid use of '%' in replacement string")]
    InvalidReplacementEscape,
}

/// Result type alias for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
