//! Random value helpers for the demo driver.

use rand::Rng;

use crate::errors::{TreeError, TreeResult};

/// Uniform random value in `[min, max]`, both inclusive.
/// Fails when `min` exceeds `max`.
pub fn random_between<R>(rng: &mut R, min: i64, max: i64) -> TreeResult<i64>
where
    R: Rng + ?Sized,
{
    if min > max {
        return Err(TreeError::InvalidRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// A vector of `count` uniform random values in `[min, max]`.
pub fn random_values<R>(rng: &mut R, count: usize, min: i64, max: i64) -> TreeResult<Vec<i64>>
where
    R: Rng + ?Sized,
{
    (0..count).map(|_| random_between(rng, min, max)).collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_values_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = random_values(&mut rng, 100, 1, 10).unwrap();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (1..=10).contains(v)));
    }

    #[test]
    fn test_degenerate_range_is_allowed() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_between(&mut rng, 7, 7).unwrap(), 7);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = random_between(&mut rng, 10, 1).unwrap_err();
        assert!(matches!(err, TreeError::InvalidRange { min: 10, max: 1 }));
    }
}
