//! Uniform random split.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::TourPair;

/// Splits `{0, …, n-1}` into two cycles uniformly at random.
///
/// Shuffles all vertices and cuts the permutation at `n / 2`. The first cycle
/// gets `⌊n/2⌋` vertices and the second the rest, each in shuffled order.
///
/// # Examples
///
/// ```
/// use two_tsp::constructive::construct_random;
/// use two_tsp::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let pair = construct_random(7, &mut rng);
/// assert_eq!(pair.first().len(), 3);
/// assert_eq!(pair.second().len(), 4);
/// assert!(pair.validate(7).is_ok());
/// ```
pub fn construct_random<R: Rng>(n: usize, rng: &mut R) -> TourPair {
    let mut vertices: Vec<usize> = (0..n).collect();
    vertices.shuffle(rng);
    let second = vertices.split_off(n / 2);
    debug!(event = "construction_end", strategy = "random", vertices = n);
    TourPair::new(vertices, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_sizes() {
        let mut rng = create_rng(3);
        for n in 0..12 {
            let pair = construct_random(n, &mut rng);
            assert_eq!(pair.first().len(), n / 2);
            assert_eq!(pair.second().len(), n - n / 2);
            assert!(pair.validate(n).is_ok());
        }
    }

    #[test]
    fn test_random_degenerate() {
        let mut rng = create_rng(3);
        assert_eq!(construct_random(0, &mut rng).into_cycles(), (vec![], vec![]));
        assert_eq!(construct_random(1, &mut rng).into_cycles(), (vec![], vec![0]));
    }

    #[test]
    fn test_random_reproducible() {
        let a = construct_random(20, &mut create_rng(9));
        let b = construct_random(20, &mut create_rng(9));
        assert_eq!(a, b);
    }
}
