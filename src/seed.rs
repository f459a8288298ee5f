//! Random starting configurations.

use crate::{Coordinate, ViewportBounds};
use anyhow::{anyhow, Result};
use rand::{Rng, SeedableRng};

/// Picks every cell of `bounds` independently with probability `density`.
///
/// # Arguments
///
/// * `bounds` - Area to fill.
/// * `density` - Probability of a cell being alive, within `[0, 1]`.
/// * `seed` - Optional seed for the random number generator.
///   If None, seeds from the OS.
///
/// # Errors
///
/// Returns an error if `density` is outside `[0, 1]`.
pub fn random_soup(
    bounds: ViewportBounds,
    density: f64,
    seed: Option<u64>,
) -> Result<Vec<Coordinate>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(anyhow!("density {} is not within [0, 1]", density));
    }
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_os_rng()
    };
    let cells = (0..=bounds.y_max)
        .flat_map(|y| (0..=bounds.x_max).map(move |x| Coordinate::new(x, y)))
        .filter(|_| rng.random_bool(density))
        .collect();
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 42;

    #[test]
    fn test_random_soup() {
        let bounds = ViewportBounds::new(31, 31);
        let a = random_soup(bounds, 0.5, Some(SEED)).unwrap();
        let b = random_soup(bounds, 0.5, Some(SEED)).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&c| bounds.contains(c)));
        // 1024 cells at one half: far from both extremes
        assert!((256..768).contains(&a.len()));

        assert!(random_soup(bounds, 0.0, Some(SEED)).unwrap().is_empty());
        assert_eq!(random_soup(bounds, 1.0, Some(SEED)).unwrap().len(), 1024);
        assert!(random_soup(bounds, 1.5, Some(SEED)).is_err());
        assert!(random_soup(bounds, f64::NAN, None).is_err());
    }
}
