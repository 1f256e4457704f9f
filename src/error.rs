//! Error types for notation parsing and cube layout validation.

use thiserror::Error;

use crate::pieces::Coord;

/// Errors raised while turning notation text into moves.
///
/// Both kinds are final for the offending input: nothing is partially
/// recovered, and callers should treat the algorithm as not selected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The first character of a token is not a face, slice or rotation.
    #[error("invalid token `{token}`: `{face}` is not a face, slice or rotation")]
    InvalidToken { token: String, face: char },

    /// Commutator text does not follow `[setup: [A, B]]`.
    #[error("malformed notation `{notation}`: {reason}")]
    MalformedNotation {
        notation: String,
        reason: &'static str,
    },
}

impl NotationError {
    pub(crate) fn malformed(notation: &str, reason: &'static str) -> Self {
        Self::MalformedNotation {
            notation: notation.to_string(),
            reason,
        }
    }
}

/// Result type alias for notation operations.
pub type Result<T> = std::result::Result<T, NotationError>;

/// A piece set that cannot describe a 3x3x3 cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 26 pieces, got {0}")]
    PieceCount(usize),

    #[error("piece at {0:?} lies outside the 3x3x3 lattice")]
    OutOfLattice(Coord),

    #[error("a piece occupies the cube center")]
    CenterOccupied,

    #[error("two pieces share position {0:?}")]
    Duplicate(Coord),
}
