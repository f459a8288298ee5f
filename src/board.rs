use crate::{CellKey, Coordinate, LifeError};
use ahash::AHashSet;

/// The set of currently live cells.
///
/// A key is present exactly when its cell is alive. Iteration order is
/// unspecified and nothing in the crate relies on it.
///
/// Cells are added one by one by the interaction side ([`Board::add`]) and
/// replaced wholesale by the stepper once a generation is complete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: AHashSet<CellKey>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &CellKey) -> bool {
        self.cells.contains(key)
    }

    pub fn contains_coordinate(&self, coord: Coordinate) -> bool {
        self.contains(&coord.key())
    }

    /// Marks the cell alive. Returns `false` if it already was.
    pub fn add(&mut self, key: CellKey) -> bool {
        self.cells.insert(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CellKey> + '_ {
        self.cells.iter()
    }

    /// Decodes every key, in iteration order.
    pub fn coordinates(&self) -> Result<Vec<Coordinate>, LifeError> {
        self.entries().map(CellKey::decode).collect()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn replace(&mut self, next: Board) {
        *self = next;
    }
}

impl FromIterator<Coordinate> for Board {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Coordinate::key).collect(),
        }
    }
}

impl Extend<Coordinate> for Board {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.cells.extend(iter.into_iter().map(Coordinate::key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut board = Board::new();
        assert!(board.add(Coordinate::new(1, 2).key()));
        assert!(!board.add(Coordinate::new(1, 2).key()));
        assert_eq!(board.len(), 1);
        assert!(board.contains_coordinate(Coordinate::new(1, 2)));
        assert!(!board.contains_coordinate(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_entries_and_clear() {
        let cells = [(0, 0), (-4, 9), (7, 7)].map(Coordinate::from);
        let mut board = cells.into_iter().collect::<Board>();

        let mut decoded = board.coordinates().unwrap();
        decoded.sort();
        let mut expected = cells.to_vec();
        expected.sort();
        assert_eq!(decoded, expected);
        assert_eq!(board.entries().count(), 3);

        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.entries().count(), 0);
    }
}
