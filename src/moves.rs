//! Primitive turns and the tokenizer for single notation words.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use crate::algorithm::PartKind;
use crate::error::{NotationError, Result};
use crate::geometry::Axis;

/// An outer face, a middle slice or a whole-cube rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
    M,
    E,
    S,
    X,
    Y,
    Z,
}

impl Face {
    pub const ALL: [Face; 12] = [
        Face::U,
        Face::D,
        Face::L,
        Face::R,
        Face::F,
        Face::B,
        Face::M,
        Face::E,
        Face::S,
        Face::X,
        Face::Y,
        Face::Z,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'U' => Face::U,
            'D' => Face::D,
            'L' => Face::L,
            'R' => Face::R,
            'F' => Face::F,
            'B' => Face::B,
            'M' => Face::M,
            'E' => Face::E,
            'S' => Face::S,
            'x' => Face::X,
            'y' => Face::Y,
            'z' => Face::Z,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
            Face::M => 'M',
            Face::E => 'E',
            Face::S => 'S',
            Face::X => 'x',
            Face::Y => 'y',
            Face::Z => 'z',
        }
    }

    /// The axis this face turns about.
    pub fn axis(self) -> Axis {
        match self {
            Face::L | Face::R | Face::M | Face::X => Axis::X,
            Face::U | Face::D | Face::E | Face::Y => Axis::Y,
            Face::F | Face::B | Face::S | Face::Z => Axis::Z,
        }
    }

    /// Sign of the outward normal of the face whose clockwise sense this
    /// turn follows: `M` follows `L`, `E` follows `D`, `S` follows `F`,
    /// and `x`/`y`/`z` follow `R`/`U`/`F`.
    pub fn normal_sign(self) -> i32 {
        match self {
            Face::R | Face::U | Face::F | Face::S | Face::X | Face::Y | Face::Z => 1,
            Face::L | Face::D | Face::B | Face::M | Face::E => -1,
        }
    }

    /// The middle slice a wide turn of this face carries along.
    pub fn inner_slice(self) -> Option<Face> {
        match self {
            Face::L | Face::R => Some(Face::M),
            Face::U | Face::D => Some(Face::E),
            Face::F | Face::B => Some(Face::S),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single turn instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    /// `1` for clockwise as seen from the face, `-1` for counter-clockwise.
    pub direction: i32,
    pub wide: bool,
    pub double: bool,
    /// Which algorithm part produced this move. Display only.
    pub part: Option<PartKind>,
}

impl Move {
    pub fn new(face: Face) -> Self {
        Self {
            face,
            direction: 1,
            wide: false,
            double: false,
            part: None,
        }
    }

    /// Parses one notation word such as `R`, `U'`, `Rw2` or `x`.
    ///
    /// Markers are detected by presence rather than position: a `'`
    /// anywhere makes the turn counter-clockwise, a `w` or `W` makes it wide
    /// and a `2` makes it a half turn.
    pub fn parse(token: &str) -> Result<Self> {
        let first = token.chars().next().ok_or_else(|| NotationError::InvalidToken {
            token: token.to_string(),
            face: ' ',
        })?;
        let face = Face::from_char(first).ok_or_else(|| NotationError::InvalidToken {
            token: token.to_string(),
            face: first,
        })?;
        let markers = &token[first.len_utf8()..];

        Ok(Self {
            face,
            direction: if markers.contains('\'') { -1 } else { 1 },
            wide: markers.contains(['w', 'W']),
            double: markers.contains('2'),
            part: None,
        })
    }

    pub fn with_part(mut self, part: PartKind) -> Self {
        self.part = Some(part);
        self
    }

    /// Signed number of quarter turns about the positive axis.
    pub fn quarter_turns(&self) -> i32 {
        let magnitude = if self.double { 2 } else { 1 };
        -magnitude * self.direction * self.face.normal_sign()
    }

    /// Signed rotation angle about the positive axis, in radians.
    pub fn angle_radians(&self) -> f32 {
        self.quarter_turns() as f32 * FRAC_PI_2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if self.wide {
            f.write_str("w")?;
        }
        if self.double {
            f.write_str("2")?;
        }
        if self.direction < 0 {
            f.write_str("'")?;
        }
        Ok(())
    }
}

/// Splits a move string on whitespace and parses every word.
pub fn tokenize(moves: &str) -> Result<Vec<Move>> {
    moves.split_whitespace().map(Move::parse).collect()
}

/// Like [`tokenize`], tagging every move with the part it came from.
pub fn tokenize_part(moves: &str, part: PartKind) -> Result<Vec<Move>> {
    moves
        .split_whitespace()
        .map(|token| Move::parse(token).map(|mv| mv.with_part(part)))
        .collect()
}
