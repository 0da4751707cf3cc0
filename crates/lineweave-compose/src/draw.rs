//! Typed random draws over an explicitly injected RNG.
//!
//! Every function takes its [`DeterministicRng`] as the first argument;
//! there is no ambient default source. The floor-based constructions
//! match the original artwork bit-for-bit in distribution, including the
//! truncation bias of [`pick_decimal`].

use thiserror::Error;

use crate::rng::DeterministicRng;

/// Errors from the draw utilities. All indicate misconfiguration, not
/// recoverable runtime conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("cannot pick from an empty collection")]
    EmptyInput,

    #[error("requested {requested} distinct elements but only {available} are available")]
    Range { requested: usize, available: usize },
}

/// Pick one element uniformly.
pub fn pick_random<'a, T>(rng: &mut DeterministicRng, items: &'a [T]) -> Result<&'a T, DrawError> {
    if items.is_empty() {
        return Err(DrawError::EmptyInput);
    }
    let index = (rng.rand() * items.len() as f64).floor() as usize;
    Ok(&items[index])
}

/// Pick an integer in `[min, max]`, inclusive on both ends.
pub fn pick_int(rng: &mut DeterministicRng, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max);
    let span = f64::from(max - min + 1);
    min + (rng.rand() * span).floor() as u32
}

/// Pick a decimal in `[min, max)` truncated (not rounded) to
/// `decimal_places` digits.
pub fn pick_decimal(rng: &mut DeterministicRng, min: f64, max: f64, decimal_places: u32) -> f64 {
    let raw = rng.rand() * (max - min) + min;
    let power = 10f64.powi(decimal_places as i32);
    (raw * power).floor() / power
}

/// Biased coin flip: true with probability `true_probability`.
pub fn pick_bool(rng: &mut DeterministicRng, true_probability: f64) -> bool {
    rng.rand() < true_probability
}

/// Sample `count` distinct elements without replacement using a partial
/// Fisher-Yates swap scheme.
pub fn pick_many<T: Clone>(
    rng: &mut DeterministicRng,
    items: &[T],
    count: usize,
) -> Result<Vec<T>, DrawError> {
    if count > items.len() {
        return Err(DrawError::Range {
            requested: count,
            available: items.len(),
        });
    }

    // `taken[x]` redirects slot x to the element that was swapped into it.
    let mut taken: Vec<Option<usize>> = vec![None; items.len()];
    let mut len = items.len();
    let mut result = Vec::with_capacity(count);

    for _ in 0..count {
        let x = (rng.rand() * len as f64).floor() as usize;
        let picked = taken[x].unwrap_or(x);
        result.push(items[picked].clone());
        len -= 1;
        taken[x] = Some(taken[len].unwrap_or(len));
    }
    Ok(result)
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T>(rng: &mut DeterministicRng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = (rng.rand() * (i + 1) as f64).floor() as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_random_empty_input() {
        let mut rng = DeterministicRng::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(pick_random(&mut rng, &empty), Err(DrawError::EmptyInput));
    }

    #[test]
    fn test_pick_random_stays_in_bounds() {
        let mut rng = DeterministicRng::new(2);
        let items = [10, 20, 30];
        for _ in 0..1000 {
            let v = pick_random(&mut rng, &items).unwrap();
            assert!(items.contains(v));
        }
    }

    #[test]
    fn test_pick_int_inclusive_both_ends() {
        let mut rng = DeterministicRng::new(3);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..5000 {
            let v = pick_int(&mut rng, 4, 7);
            assert!((4..=7).contains(&v));
            seen_min |= v == 4;
            seen_max |= v == 7;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_pick_decimal_truncates_not_rounds() {
        let mut rng = DeterministicRng::new(4);
        let mut shadow = rng.clone();
        for _ in 0..1000 {
            let v = pick_decimal(&mut rng, 1.0, 4.0, 3);
            let raw = shadow.rand() * 3.0 + 1.0;
            assert!((1.0..4.0).contains(&v));
            // Truncation never rounds up past the raw sample.
            assert!(v <= raw);
            assert_eq!(v, (raw * 1000.0).floor() / 1000.0);
        }
    }

    #[test]
    fn test_pick_bool_extremes() {
        let mut rng = DeterministicRng::new(5);
        for _ in 0..100 {
            assert!(!pick_bool(&mut rng, 0.0));
            assert!(pick_bool(&mut rng, 1.0));
        }
    }

    #[test]
    fn test_pick_many_range_error() {
        let mut rng = DeterministicRng::new(6);
        let items = [1, 2, 3];
        assert_eq!(
            pick_many(&mut rng, &items, 4),
            Err(DrawError::Range {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_pick_many_distinct() {
        let mut rng = DeterministicRng::new(7);
        let items: Vec<u32> = (0..20).collect();
        for _ in 0..100 {
            let mut picked = pick_many(&mut rng, &items, 8).unwrap();
            assert_eq!(picked.len(), 8);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 8, "pick_many returned duplicates");
        }
    }

    #[test]
    fn test_pick_many_full_draw_is_permutation() {
        let mut rng = DeterministicRng::new(8);
        let items: Vec<u32> = (0..10).collect();
        let mut picked = pick_many(&mut rng, &items, 10).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, items);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = DeterministicRng::new(9);
        let mut items: Vec<u32> = (0..32).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_draws_deterministic_per_seed() {
        let mut a = DeterministicRng::new(1234);
        let mut b = DeterministicRng::new(1234);
        let items: Vec<u32> = (0..50).collect();
        assert_eq!(
            pick_many(&mut a, &items, 10).unwrap(),
            pick_many(&mut b, &items, 10).unwrap()
        );
        assert_eq!(pick_int(&mut a, 0, 100), pick_int(&mut b, 0, 100));
        assert_eq!(
            pick_decimal(&mut a, 0.0, 1.0, 2),
            pick_decimal(&mut b, 0.0, 1.0, 2)
        );
    }
}
