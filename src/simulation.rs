use crate::{
    stepper, Board, Config, Coordinate, LifeError, ViewportBounds, ViewportProvider,
};
use std::num::NonZeroU32;

/// Everything a running simulation knows: the board, the viewport bounds
/// and the generation counter.
///
/// Owned by [`AnimationController`](crate::AnimationController); all
/// mutation goes through it.
#[derive(Clone, Debug)]
pub struct Simulation {
    board: Board,
    bounds: ViewportBounds,
    generation: u64,
    edge_length: NonZeroU32,
}

impl Simulation {
    pub fn new(config: &Config, viewport: &impl ViewportProvider) -> Self {
        let mut simulation = Self {
            board: Board::new(),
            bounds: ViewportBounds::default(),
            generation: 0,
            edge_length: config.edge_length(),
        };
        simulation.resize(viewport);
        simulation
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bounds(&self) -> ViewportBounds {
        self.bounds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn edge_length(&self) -> u32 {
        self.edge_length.get()
    }

    /// Recomputes the bounds from the current surface size.
    ///
    /// Cells that fall outside the new bounds stay on the board until the
    /// next step removes them.
    pub fn resize(&mut self, viewport: &impl ViewportProvider) {
        let (width, height) = viewport.pixel_size();
        self.bounds = ViewportBounds::from_pixels(width, height, self.edge_length);
    }

    pub fn add_cell(&mut self, coord: Coordinate) -> bool {
        self.board.add(coord.key())
    }

    /// Adds the cell under the pixel `(px, py)` and returns its coordinate.
    pub fn add_cell_at_pixel(&mut self, px: i64, py: i64) -> Coordinate {
        let edge = self.edge_length.get() as i64;
        let coord = Coordinate::new(px.div_euclid(edge), py.div_euclid(edge));
        self.add_cell(coord);
        coord
    }

    /// Replaces the board with the next generation and returns the cells to draw.
    ///
    /// On error the board and the counter are left as they were.
    pub fn advance(&mut self) -> Result<Vec<Coordinate>, LifeError> {
        let next = stepper::step(&self.board, self.bounds)?;
        self.board.replace(next.board);
        self.generation += 1;
        Ok(next.draw_set)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelSize;

    fn simulation() -> Simulation {
        Simulation::new(&Config::default(), &PixelSize::new(200, 150))
    }

    #[test]
    fn test_bounds_follow_viewport() {
        let mut simulation = simulation();
        assert_eq!(simulation.bounds(), ViewportBounds::new(20, 15));
        simulation.resize(&PixelSize::new(95, 31));
        assert_eq!(simulation.bounds(), ViewportBounds::new(9, 3));
    }

    #[test]
    fn test_add_cell_at_pixel_floors() {
        let mut simulation = simulation();
        assert_eq!(simulation.add_cell_at_pixel(0, 9), Coordinate::new(0, 0));
        assert_eq!(simulation.add_cell_at_pixel(19, 30), Coordinate::new(1, 3));
        assert_eq!(simulation.add_cell_at_pixel(-1, 5), Coordinate::new(-1, 0));
        assert_eq!(simulation.board().len(), 3);
    }

    #[test]
    fn test_advance_counts_generations() {
        let mut simulation = simulation();
        for x in 4..7 {
            simulation.add_cell(Coordinate::new(x, 5));
        }
        let mut drawn = simulation.advance().unwrap();
        drawn.sort();
        assert_eq!(
            drawn,
            [(5, 4), (5, 5), (5, 6)].map(Coordinate::from).to_vec()
        );
        simulation.advance().unwrap();
        assert_eq!(simulation.generation(), 2);

        simulation.reset();
        assert_eq!(simulation.generation(), 0);
        assert!(simulation.board().is_empty());
    }
}
