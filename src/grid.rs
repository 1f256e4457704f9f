//! Text rendering of the discrete cube layout.
//!
//! The 27 lattice cells are stored in a flat array indexed x-major, with
//! each coordinate shifted from `{-1, 0, 1}` to `{0, 1, 2}`.

use crate::pieces::{Coord, CubePiece};

/// Number of lattice cells, the empty center included.
pub const GRID_SIZE: usize = 27;

/// Converts a lattice coordinate to a linear cell index.
///
/// Index order is x-major: `idx = (x+1) * 9 + (y+1) * 3 + (z+1)`.
#[inline(always)]
pub const fn coord_to_idx(coord: Coord) -> usize {
    let (x, y, z) = coord;
    ((x + 1) * 9 + (y + 1) * 3 + (z + 1)) as usize
}

/// Converts a linear cell index back to a lattice coordinate.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> Coord {
    (
        (cell_index / 9) as i32 - 1,
        ((cell_index / 3) % 3) as i32 - 1,
        (cell_index % 3) as i32 - 1,
    )
}

/// Maps each cell to the index of the piece occupying it.
pub fn layout_to_grid<H>(pieces: &[CubePiece<H>]) -> [Option<usize>; GRID_SIZE] {
    let mut grid = [None; GRID_SIZE];
    for (index, piece) in pieces.iter().enumerate() {
        grid[coord_to_idx(piece.position)] = Some(index);
    }
    grid
}

/// Formats the layout as three z-slices side by side.
///
/// Slices run back (`B`, z=-1) to front (`F`, z=1); rows run from the top
/// layer down and columns from left to right. Pieces show their index in
/// base 36, the center shows as '.'.
pub fn format_layout<H>(pieces: &[CubePiece<H>]) -> String {
    let grid = layout_to_grid(pieces);

    let mut output = ["B", "S", "F"]
        .map(|label| format!("{label:<3}"))
        .join("  ")
        .trim_end()
        .to_string();
    output.push('\n');

    for y in [1, 0, -1] {
        for z in -1..=1 {
            if z > -1 {
                output.push_str("  ");
            }
            for x in -1..=1 {
                let display_char = match grid[coord_to_idx((x, y, z))] {
                    Some(index) => char::from_digit(index as u32, 36)
                        .map(|c| c.to_ascii_uppercase())
                        .unwrap_or('?'),
                    None => '.',
                };
                output.push(display_char);
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{ExecutorConfig, MoveExecutor};
    use crate::moves::tokenize;
    use crate::pieces::solved_layout;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for idx in 0..GRID_SIZE {
            let coord = idx_to_coord(idx);
            assert_eq!(coord_to_idx(coord), idx, "Roundtrip failed for index {idx}");
        }
        assert_eq!(coord_to_idx((0, 0, 0)), 13);
    }

    #[test]
    fn test_grid_leaves_center_empty() {
        let grid = layout_to_grid(&solved_layout());
        assert_eq!(grid.iter().filter(|cell| cell.is_none()).count(), 1);
        assert_eq!(grid[13], None);
    }

    #[test]
    fn test_format_solved_layout() {
        let output = format_layout(&solved_layout());
        insta::assert_snapshot!(output.trim_end(), @r"
        B    S    F
        6EN  7FO  8GP
        3CK  4.L  5DM
        09H  1AI  2BJ
        ");
    }

    #[test]
    fn test_format_after_r() {
        let mut executor =
            MoveExecutor::new(solved_layout(), ManualScheduler::new(), ExecutorConfig::default())
                .unwrap();
        executor.enqueue(tokenize("R").unwrap());
        executor.start();
        executor.run_to_completion();

        let output = format_layout(executor.pieces());
        insta::assert_snapshot!(output.trim_end(), @r"
        B    S    F
        6EP  7FM  8GJ
        3CO  4.L  5DI
        09N  1AK  2BH
        ");
    }
}
