use thiserror::Error;

use crate::radius::Corner;

/// A style token or token list that could not be turned into values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The token does not start with a run of digits followed by a unit.
    #[error("'{0}' is not a <length> (expected digits followed by a unit)")]
    InvalidLength(String),

    /// The token splits into a magnitude and a unit, but the unit is unknown.
    #[error("unknown unit '{unit}' in '{token}'")]
    UnknownUnit {
        /// The whole token as written.
        token: String,
        /// The unit substring that failed to match.
        unit: String,
    },

    /// A side list contained no tokens at all.
    #[error("expected 1 to 4 values, found none")]
    NoValues,

    /// A side list contained more than four tokens.
    #[error("too many values: expected at most 4, found {count}")]
    TooManyValues {
        /// Number of tokens found.
        count: usize,
    },

    /// A shorthand contained more than one `/` separator.
    #[error("expected at most one '/', found {count} axis lists")]
    TooManyAxes {
        /// Number of `/`-separated parts found.
        count: usize,
    },
}

/// Failure of a paint call or of a paint worklet registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    /// A value failed to parse in a position where failure is not recoverable.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Neither the longhand nor the shorthand produced a radius for a corner.
    #[error("missing parameters: no radius for the {corner} corner")]
    MissingParameters {
        /// The corner left unresolved.
        corner: Corner,
    },

    /// `register_paint` was called with an empty name.
    #[error("paint name must not be empty")]
    EmptyPaintName,

    /// `register_paint` was called twice with the same name.
    #[error("a paint named '{0}' is already registered")]
    DuplicatePaintName(String),

    /// A paint was invoked under a name that was never registered.
    #[error("no paint registered under '{0}'")]
    UnknownPaint(String),
}
