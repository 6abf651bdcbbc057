//! Error types raised by the grid core and the colour parser.
use thiserror::Error;

/// Failures originating in the sieve/fold core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// An input outside the domain of the core (zero width, zero height,
    /// or a `width * height` product that does not fit in `usize`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failures while turning a user-supplied colour into RGB.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A `#`-prefixed value that is not exactly `#RRGGBB`.
    #[error("invalid colour code `{0}` (expected #RRGGBB)")]
    InvalidHex(String),
    /// A colour name missing from the web colour table.
    #[error("unknown colour name `{0}`")]
    UnknownName(String),
}
