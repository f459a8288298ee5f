//! Conway's B3/S23 transition rule.

use crate::{Board, Coordinate, ViewportBounds};

/// Live neighbor counts under which a live cell stays alive.
pub const SURVIVAL: [usize; 2] = [2, 3];
/// Live neighbor count under which a dead cell comes alive.
pub const BIRTH: usize = 3;

/// Decides whether `coord` is alive in the next generation.
///
/// Cells outside `bounds` are always dead, and out-of-bounds neighbors
/// contribute nothing to the count even if the board holds them.
pub fn is_alive(
    board: &Board,
    bounds: ViewportBounds,
    coord: Coordinate,
    currently_alive: bool,
) -> bool {
    if !bounds.contains(coord) {
        return false;
    }
    let neighbors = coord
        .neighbors()
        .filter(|&n| bounds.contains(n) && board.contains_coordinate(n))
        .count();
    next_state(currently_alive, neighbors)
}

pub fn next_state(currently_alive: bool, neighbors: usize) -> bool {
    if currently_alive {
        SURVIVAL.contains(&neighbors)
    } else {
        neighbors == BIRTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: ViewportBounds = ViewportBounds::new(20, 20);

    fn block_3x3() -> Board {
        (4..7)
            .flat_map(|x| (4..7).map(move |y| Coordinate::new(x, y)))
            .collect()
    }

    #[test]
    fn test_transition_table() {
        for neighbors in 0..=8 {
            assert_eq!(next_state(true, neighbors), neighbors == 2 || neighbors == 3);
            assert_eq!(next_state(false, neighbors), neighbors == 3);
        }
    }

    #[test]
    fn test_full_block_center_dies() {
        let board = block_3x3();
        assert!(!is_alive(&board, BOUNDS, Coordinate::new(5, 5), true));
    }

    #[test]
    fn test_full_block_corner_survives() {
        let board = block_3x3();
        for (x, y) in [(4, 4), (4, 6), (6, 4), (6, 6)] {
            assert!(is_alive(&board, BOUNDS, Coordinate::new(x, y), true));
        }
        // edge midpoints have 5 neighbors
        assert!(!is_alive(&board, BOUNDS, Coordinate::new(5, 4), true));
    }

    #[test]
    fn test_out_of_bounds_is_dead() {
        let board = [(0, 0), (1, 0), (0, 1), (-1, -1), (-1, 0)]
            .map(Coordinate::from)
            .into_iter()
            .collect::<Board>();
        assert!(!is_alive(&board, BOUNDS, Coordinate::new(-1, -1), true));
        assert!(!is_alive(&board, BOUNDS, Coordinate::new(21, 0), false));
        // four neighbors if (-1, -1) and (-1, 0) counted, two otherwise
        assert!(is_alive(&board, BOUNDS, Coordinate::new(0, 0), true));
        assert!(is_alive(&board, BOUNDS, Coordinate::new(1, 1), false));
    }

    #[test]
    fn test_edge_cell_ignores_outside_neighbor() {
        let bounds = ViewportBounds::new(10, 10);
        let board = [(10, 10), (11, 10), (9, 9)]
            .map(Coordinate::from)
            .into_iter()
            .collect::<Board>();
        // only (9, 9) counts: one neighbor, so the corner dies
        assert!(!is_alive(&board, bounds, Coordinate::new(10, 10), true));
        // (10, 9) would see three live cells if (11, 10) counted
        assert!(!is_alive(&board, bounds, Coordinate::new(10, 9), false));
    }
}
