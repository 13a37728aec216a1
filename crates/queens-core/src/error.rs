//! Error types for the queens domination engine.

use crate::board::Position;
use thiserror::Error;

/// Errors reported by the engine.
///
/// Bad board-size input is the only user-facing failure; out-of-bounds
/// access guards against caller bugs and is reported rather than ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// Board size text did not match the `<width>x<height>` pattern.
    #[error("invalid board size {input:?}: expected <width>x<height>, e.g. 8x8")]
    MalformedSize { input: String },

    /// Dimensions parsed but fall outside the supported range.
    #[error("board dimensions must be between 3 and 16, got {width}x{height}")]
    SizeOutOfRange { width: usize, height: usize },

    /// A coordinate outside the current board was passed to the engine.
    #[error("position {pos} is outside the {width}x{height} board")]
    OutOfBounds {
        pos: Position,
        width: usize,
        height: usize,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::MalformedSize {
            input: "8 x 8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid board size \"8 x 8\": expected <width>x<height>, e.g. 8x8"
        );

        let err = GameError::OutOfBounds {
            pos: Position::new(9, 2),
            width: 8,
            height: 8,
        };
        assert_eq!(err.to_string(), "position (9, 2) is outside the 8x8 board");
    }
}
