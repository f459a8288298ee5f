use crate::LifeError;
use std::{fmt, str::FromStr};

/// Separates the two halves of a [`CellKey`].
///
/// A letter never appears in the decimal form of a signed integer,
/// so splitting on it is unambiguous.
pub const KEY_DELIMITER: char = 'x';

/// Offsets of the Moore neighborhood, row by row.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Position of a cell on the grid, measured in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn key(self) -> CellKey {
        CellKey::encode(self)
    }

    /// Iterates over the 8 cells adjacent to this one.
    ///
    /// Neighbors that would overflow `i64` are skipped: they lie outside
    /// any viewport and can never be alive.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        MOORE_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            Some(Coordinate::new(
                self.x.checked_add(dx)?,
                self.y.checked_add(dy)?,
            ))
        })
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Key of a live cell inside a [`Board`](crate::Board).
///
/// The textual form is `"{x}x{y}"`, e.g. `(-3, 12)` becomes `"-3x12"`.
/// Keys are either produced by [`CellKey::encode`] or parsed through
/// [`FromStr`], which only accepts the canonical form, so the mapping
/// between keys and coordinates is a bijection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(String);

impl CellKey {
    pub fn encode(coord: Coordinate) -> Self {
        Self(format!("{}{}{}", coord.x, KEY_DELIMITER, coord.y))
    }

    /// Recovers the coordinate the key was built from.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::MalformedKey`] if the delimiter is absent or
    /// either half does not parse as an integer.
    pub fn decode(&self) -> Result<Coordinate, LifeError> {
        Self::decode_str(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn decode_str(s: &str) -> Result<Coordinate, LifeError> {
        let malformed = || LifeError::MalformedKey(s.to_owned());
        let (x, y) = s.split_once(KEY_DELIMITER).ok_or_else(malformed)?;
        let x = x.parse().map_err(|_| malformed())?;
        let y = y.parse().map_err(|_| malformed())?;
        Ok(Coordinate::new(x, y))
    }
}

impl FromStr for CellKey {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Self::decode_str(s)?.key();
        // `+5x3` or `05x3` decode fine but would alias `5x3`
        if key.0 != s {
            return Err(LifeError::MalformedKey(s.to_owned()));
        }
        Ok(key)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Coordinate> for CellKey {
    fn from(coord: Coordinate) -> Self {
        Self::encode(coord)
    }
}
