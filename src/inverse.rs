//! Inversion of move sequences.

use crate::moves::Move;

/// Inverts one notation word: half turns are their own inverse, a primed
/// turn loses its prime and any other turn gains one.
fn invert_token(token: &str) -> String {
    if token.contains('2') {
        token.to_string()
    } else if token.contains('\'') {
        token.replace('\'', "")
    } else {
        format!("{token}'")
    }
}

/// Returns the inverse of a space-separated move string.
///
/// Tokens are reversed and each one inverted. The output is joined with
/// single spaces; an empty input yields an empty string.
pub fn reverse_sequence(moves: &str) -> String {
    moves
        .split_whitespace()
        .rev()
        .map(invert_token)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Move {
    /// The turn that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inverse = self.clone();
        if !self.double {
            inverse.direction = -self.direction;
        }
        inverse
    }
}

/// Inverts a parsed move list, mirroring [`reverse_sequence`].
pub fn reverse_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(Move::inverse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::tokenize;

    #[test]
    fn test_reverse_simple_sequence() {
        assert_eq!(reverse_sequence("R U R'"), "R U' R'");
        assert_eq!(reverse_sequence("R U R' U'"), "U R U' R'");
    }

    #[test]
    fn test_double_turns_are_self_inverse() {
        assert_eq!(reverse_sequence("U2 R2"), "R2 U2");
        assert_eq!(reverse_sequence("R2'"), "R2'");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(reverse_sequence(""), "");
        assert_eq!(reverse_sequence("   "), "");
    }

    #[test]
    fn test_reverse_is_an_involution() {
        let sequence = "Rw U' M2 x F' Bw";
        assert_eq!(reverse_sequence(&reverse_sequence(sequence)), sequence);
    }

    #[test]
    fn test_record_inverse_agrees_with_text_inverse() {
        let sequence = "R Uw' D2 S x'";
        let from_text = tokenize(&reverse_sequence(sequence)).unwrap();
        let from_moves = reverse_moves(&tokenize(sequence).unwrap());
        assert_eq!(from_text, from_moves);
    }
}
