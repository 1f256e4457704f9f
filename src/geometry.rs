//! Quarter-turn rotations of lattice coordinates.
//!
//! Every turn of a 3x3x3 cube is a multiple of 90 degrees about one of the
//! three coordinate axes through the cube center, so the new position of a
//! piece can be computed exactly on the integer lattice.

use crate::pieces::Coord;

/// A rotation axis through the cube center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Counter-clockwise rotations about each positive axis (right-hand rule),
/// indexed by `[axis][quarter_turns]`.
const QUARTER_TURNS: [[fn(Coord) -> Coord; 4]; 3] = [
    // about +X: y goes to z
    [
        |(x, y, z)| (x, y, z),
        |(x, y, z)| (x, -z, y),
        |(x, y, z)| (x, -y, -z),
        |(x, y, z)| (x, z, -y),
    ],
    // about +Y: z goes to x
    [
        |(x, y, z)| (x, y, z),
        |(x, y, z)| (z, y, -x),
        |(x, y, z)| (-x, y, -z),
        |(x, y, z)| (-z, y, x),
    ],
    // about +Z: x goes to y
    [
        |(x, y, z)| (x, y, z),
        |(x, y, z)| (-y, x, z),
        |(x, y, z)| (-x, -y, z),
        |(x, y, z)| (y, -x, z),
    ],
];

/// Rotates a coordinate by `quarter_turns * 90` degrees about `axis`.
///
/// Positive counts turn counter-clockwise when looking down the positive
/// axis toward the origin; any integer is accepted and reduced modulo 4.
pub fn rotate(coord: Coord, axis: Axis, quarter_turns: i32) -> Coord {
    let turns = quarter_turns.rem_euclid(4) as usize;
    QUARTER_TURNS[axis.index()][turns](coord)
}
