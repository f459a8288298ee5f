use crate::{Coordinate, ViewportProvider};
use std::num::NonZeroU32;

/// The rectangle of coordinates currently in play.
///
/// Cells outside `[0, x_max] × [0, y_max]` are dead no matter what the board
/// says: they never survive, are never born and are not counted as neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportBounds {
    pub x_max: i64,
    pub y_max: i64,
}

impl ViewportBounds {
    pub const fn new(x_max: i64, y_max: i64) -> Self {
        Self { x_max, y_max }
    }

    /// Derives the bounds from the surface size in pixels.
    pub fn from_pixels(width: u32, height: u32, edge_length: NonZeroU32) -> Self {
        Self {
            x_max: (width / edge_length) as i64,
            y_max: (height / edge_length) as i64,
        }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        (0..=self.x_max).contains(&coord.x) && (0..=self.y_max).contains(&coord.y)
    }
}

/// A fixed surface size, for hosts that report resizes as plain numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ViewportProvider for PixelSize {
    fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_floors() {
        let edge = NonZeroU32::new(10).unwrap();
        assert_eq!(
            ViewportBounds::from_pixels(805, 599, edge),
            ViewportBounds::new(80, 59)
        );
        assert_eq!(
            ViewportBounds::from_pixels(9, 9, edge),
            ViewportBounds::new(0, 0)
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = ViewportBounds::new(4, 2);
        assert!(bounds.contains(Coordinate::new(0, 0)));
        assert!(bounds.contains(Coordinate::new(4, 2)));
        assert!(!bounds.contains(Coordinate::new(5, 2)));
        assert!(!bounds.contains(Coordinate::new(4, 3)));
        assert!(!bounds.contains(Coordinate::new(-1, 0)));
        assert!(!bounds.contains(Coordinate::new(0, -1)));
    }
}
