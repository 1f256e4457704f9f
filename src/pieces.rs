//! Discrete cube pieces and the solved layout.
//!
//! Each piece is identified by its lattice coordinate in `{-1, 0, 1}^3`.
//! The center `(0, 0, 0)` is never instantiated, leaving 26 pieces.

use rustc_hash::FxHashSet;

use crate::error::LayoutError;

/// A lattice coordinate. Each component is -1, 0 or 1.
pub type Coord = (i32, i32, i32);

/// Number of visible pieces in a 3x3x3 cube.
pub const PIECE_COUNT: usize = 26;

/// A single cubie.
///
/// `position` is the only record of which layers the piece belongs to.
/// The handle belongs to the renderer and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubePiece<H> {
    pub position: Coord,
    pub handle: H,
}

impl<H> CubePiece<H> {
    pub fn new(position: Coord, handle: H) -> Self {
        Self { position, handle }
    }
}

/// Returns the 26 non-center lattice positions in x-major order.
pub fn solved_positions() -> impl Iterator<Item = Coord> {
    (-1..=1)
        .flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| (x, y, z))))
        .filter(|&coord| coord != (0, 0, 0))
}

/// Builds a solved cube whose handles are the piece ids `0..26`.
pub fn solved_layout() -> Vec<CubePiece<usize>> {
    solved_positions()
        .enumerate()
        .map(|(id, position)| CubePiece::new(position, id))
        .collect()
}

/// Checks that a piece set covers each non-center lattice point exactly once.
pub fn validate_layout<H>(pieces: &[CubePiece<H>]) -> Result<(), LayoutError> {
    if pieces.len() != PIECE_COUNT {
        return Err(LayoutError::PieceCount(pieces.len()));
    }

    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    for piece in pieces {
        let (x, y, z) = piece.position;
        if ![x, y, z].iter().all(|c| (-1..=1).contains(c)) {
            return Err(LayoutError::OutOfLattice(piece.position));
        }
        if piece.position == (0, 0, 0) {
            return Err(LayoutError::CenterOccupied);
        }
        if !seen.insert(piece.position) {
            return Err(LayoutError::Duplicate(piece.position));
        }
    }

    Ok(())
}
