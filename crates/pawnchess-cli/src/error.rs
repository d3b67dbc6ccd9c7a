//! Console session errors.

use pawnchess_core::PositionError;

/// Errors that can occur while running a console session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A line of input is neither a move like `e2e4` nor `exit`.
    #[error("malformed input: \"{input}\"")]
    InvalidInput {
        /// The offending line, lowercased and trimmed.
        input: String,
    },

    /// The configured starting position could not be parsed.
    #[error("invalid starting position: {source}")]
    Position {
        /// The underlying notation error.
        #[from]
        source: PositionError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
