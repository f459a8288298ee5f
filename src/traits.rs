/// Visual surface the simulation draws onto.
pub trait RenderAdapter {
    /// Erases the whole surface.
    ///
    /// Called once at the start of every frame, before the cells of the new
    /// generation are drawn.
    fn clear(&mut self);

    /// Fills the square of the cell at `(x, y)`.
    ///
    /// # Parameters
    /// * `x`, `y` - Cell coordinates, not pixels
    /// * `edge_length` - Side of one cell in pixels; the cell covers
    ///   `[x * edge_length, (x + 1) * edge_length)` horizontally and
    ///   likewise vertically
    fn draw_cell(&mut self, x: i64, y: i64, edge_length: u32);

    /// Reports the generation counter after every step and after a reset.
    ///
    /// # Note
    ///
    /// The default implementation does nothing. Surfaces with a readout
    /// should override it.
    fn generation_changed(&mut self, _generation: u64) {}
}

/// Source of the current surface size.
pub trait ViewportProvider {
    /// Returns `(width, height)` in pixels.
    fn pixel_size(&self) -> (u32, u32);
}
