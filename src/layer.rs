//! Selection of the pieces a turn moves.

use crate::moves::{Face, Move};
use crate::pieces::{Coord, CubePiece};

/// Whether a piece at `coord` lies in the single layer named by `face`.
fn in_face_layer(coord: Coord, face: Face) -> bool {
    let (x, y, z) = coord;
    match face {
        Face::L => x == -1,
        Face::R => x == 1,
        Face::U => y == 1,
        Face::D => y == -1,
        Face::F => z == 1,
        Face::B => z == -1,
        Face::M => x == 0,
        Face::E => y == 0,
        Face::S => z == 0,
        Face::X | Face::Y | Face::Z => true,
    }
}

/// Whether a piece at `coord` is turned by `mv`.
///
/// A wide face turn also takes the middle slice next to that face.
pub fn in_layer(coord: Coord, mv: &Move) -> bool {
    if in_face_layer(coord, mv.face) {
        return true;
    }
    match mv.face.inner_slice() {
        Some(slice) if mv.wide => in_face_layer(coord, slice),
        _ => false,
    }
}

/// Returns the indices of every piece turned by `mv`, in piece order.
pub fn select_layer<H>(pieces: &[CubePiece<H>], mv: &Move) -> Vec<usize> {
    pieces
        .iter()
        .enumerate()
        .filter(|(_, piece)| in_layer(piece.position, mv))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::solved_layout;

    fn selected_positions(token: &str) -> Vec<Coord> {
        let layout = solved_layout();
        let mv = Move::parse(token).unwrap();
        select_layer(&layout, &mv)
            .into_iter()
            .map(|index| layout[index].position)
            .collect()
    }

    #[test]
    fn test_outer_face_selects_nine() {
        let selected = selected_positions("R");
        assert_eq!(selected.len(), 9);
        assert!(selected.iter().all(|&(x, _, _)| x == 1));

        for token in ["L", "U", "D", "F", "B'", "R2"] {
            assert_eq!(selected_positions(token).len(), 9, "{token}");
        }
    }

    #[test]
    fn test_middle_slices_skip_the_center() {
        for token in ["M", "E", "S"] {
            let selected = selected_positions(token);
            assert_eq!(selected.len(), 8, "{token}");
            assert!(!selected.contains(&(0, 0, 0)));
        }
        assert!(selected_positions("E").iter().all(|&(_, y, _)| y == 0));
    }

    #[test]
    fn test_wide_turn_adds_middle_slice() {
        let selected = selected_positions("Rw");
        // 9 outer pieces plus the 8 pieces of the M slice
        assert_eq!(selected.len(), 17);
        assert!(selected.iter().all(|&(x, _, _)| x == 1 || x == 0));

        let selected = selected_positions("Dw'");
        assert!(selected.iter().all(|&(_, y, _)| y == -1 || y == 0));
        assert_eq!(selected.len(), 17);
    }

    #[test]
    fn test_wide_marker_ignored_for_slices() {
        assert_eq!(selected_positions("Mw"), selected_positions("M"));
    }

    #[test]
    fn test_rotation_selects_everything() {
        for token in ["x", "y'", "z2"] {
            assert_eq!(selected_positions(token).len(), 26);
        }
    }

    #[test]
    fn test_selection_follows_current_positions() {
        let mut layout = solved_layout();
        // swap two pieces between the R and L layers
        let (a, b) = (0, 25);
        let (pa, pb) = (layout[a].position, layout[b].position);
        layout[a].position = pb;
        layout[b].position = pa;

        let selected = select_layer(&layout, &Move::parse("R").unwrap());
        assert!(selected.contains(&a));
        assert!(!selected.contains(&b));
    }
}
