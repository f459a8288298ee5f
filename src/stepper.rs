use crate::{rule, Board, Coordinate, LifeError, ViewportBounds};
use ahash::AHashSet;

/// The outcome of one generation step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    /// Live cells of the next generation.
    pub board: Board,
    /// Every live cell of `board`; the renderer redraws all of them.
    pub draw_set: Vec<Coordinate>,
}

/// Computes the next generation from `board` without touching it.
///
/// Only live cells and their dead neighbors are evaluated; a dead cell with no
/// live neighbor cannot be born, so the result matches a dense scan of the
/// whole viewport while costing `O(live cells × 8)` rule evaluations.
///
/// # Errors
///
/// Fails with [`LifeError::MalformedKey`] if a board key does not decode.
/// In that case no partial generation is returned.
pub fn step(board: &Board, bounds: ViewportBounds) -> Result<Generation, LifeError> {
    let mut next = Board::new();
    let mut draw_set = Vec::with_capacity(board.len());
    let mut considered_dead = AHashSet::new();

    for key in board.entries() {
        let coord = key.decode()?;
        if rule::is_alive(board, bounds, coord, true) {
            next.add(key.clone());
            draw_set.push(coord);
        }

        for neighbor in coord.neighbors() {
            let neighbor_key = neighbor.key();
            if board.contains(&neighbor_key) || considered_dead.contains(&neighbor_key) {
                continue;
            }
            if rule::is_alive(board, bounds, neighbor, false) {
                next.add(neighbor_key.clone());
                draw_set.push(neighbor);
            }
            considered_dead.insert(neighbor_key);
        }
    }

    Ok(Generation {
        board: next,
        draw_set,
    })
}
