use crate::{Coordinate, RenderAdapter};
use anyhow::{anyhow, Result};
use std::fmt;

/// Largest canvas accepted, in cells; a frame this size is already 16 MiB of text.
pub const MAX_CANVAS_CELLS: usize = 1 << 24;

/// A character-grid surface: one character per cell, `#` alive and `.` dead.
///
/// Used by the command line tool to print frames and by tests to observe
/// what was drawn. Cells outside the canvas are counted but not stored.
#[derive(Clone, Debug, Default)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    clear_calls: u64,
    draw_calls: u64,
    last_generation: Option<u64>,
}

impl TextCanvas {
    /// Creates a blank canvas of `width × height` cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas would hold more than
    /// [`MAX_CANVAS_CELLS`] cells.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let size = width
            .checked_mul(height)
            .filter(|&size| size <= MAX_CANVAS_CELLS)
            .ok_or_else(|| anyhow!("canvas of {}x{} cells is too large", width, height))?;
        Ok(Self {
            width,
            height,
            cells: vec![false; size],
            ..Default::default()
        })
    }

    /// Filled cells, ordered by `x` then `y`.
    pub fn live_cells(&self) -> Vec<Coordinate> {
        let mut cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.cells[y * self.width + x])
            .map(|(x, y)| Coordinate::new(x as i64, y as i64))
            .collect::<Vec<_>>();
        cells.sort();
        cells
    }

    pub fn clear_calls(&self) -> u64 {
        self.clear_calls
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    pub fn last_generation(&self) -> Option<u64> {
        self.last_generation
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }
}

impl RenderAdapter for TextCanvas {
    fn clear(&mut self) {
        self.cells.fill(false);
        self.clear_calls += 1;
    }

    fn draw_cell(&mut self, x: i64, y: i64, _edge_length: u32) {
        self.draw_calls += 1;
        if let Some(i) = self.index(x, y) {
            self.cells[i] = true;
        }
    }

    fn generation_changed(&mut self, generation: u64) {
        self.last_generation = Some(generation);
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
