//! Uniform range, choice and weighted-choice helpers over any `Rng`.

use rand::Rng;

/// Uniform float in `[min, max)`. Returns `min` for an empty range.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Uniform integer in `[min, max]` (both inclusive).
pub fn random_range_int<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniformly picks one element. `None` only for an empty slice.
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}

/// Picks an element with probability proportional to `weight(item)`.
///
/// Walks the cumulative weights against a uniform draw in `[0, total)`.
/// Falls back to the last element when rounding leaves the draw past the end.
pub fn weighted_choose<'a, T, R, F>(rng: &mut R, items: &'a [T], weight: F) -> Option<&'a T>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    let weights: Vec<f64> = items.iter().map(|item| weight(item).max(0.0)).collect();
    let total: f64 = weights.iter().sum();
    if items.is_empty() {
        return None;
    }
    if total <= 0.0 {
        return choose(rng, items);
    }

    let mut roll = rng.gen::<f64>() * total;
    for (item, w) in items.iter().zip(&weights) {
        if roll < *w {
            return Some(item);
        }
        roll -= w;
    }
    items.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_random_range_int_inclusive_bounds() {
        let mut rng = create_test_rng();
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1000 {
            let v = random_range_int(&mut rng, 1, 5);
            assert!((1..=5).contains(&v));
            seen_min |= v == 1;
            seen_max |= v == 5;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = create_test_rng();
        assert_eq!(random_range_int(&mut rng, 3, 3), 3);
        assert_eq!(random_range(&mut rng, 2.0, 2.0), 2.0);
        assert!(choose::<u8, _>(&mut rng, &[]).is_none());
    }

    #[test]
    fn test_weighted_choose_respects_zero_weight() {
        let mut rng = create_test_rng();
        let items = ["never", "always"];
        for _ in 0..500 {
            let picked = weighted_choose(&mut rng, &items, |s| if *s == "never" { 0.0 } else { 1.0 });
            assert_eq!(picked, Some(&"always"));
        }
    }

    #[test]
    fn test_weighted_choose_distribution() {
        let mut rng = create_test_rng();
        let items = [(0usize, 0.5), (1, 0.3), (2, 0.2)];
        let mut counts = [0u32; 3];
        let trials = 20_000;
        for _ in 0..trials {
            let (index, _) = weighted_choose(&mut rng, &items, |(_, w)| *w).unwrap();
            counts[*index] += 1;
        }
        let share = |c: u32| c as f64 / trials as f64;
        assert!((share(counts[0]) - 0.5).abs() < 0.03);
        assert!((share(counts[1]) - 0.3).abs() < 0.03);
        assert!((share(counts[2]) - 0.2).abs() < 0.03);
    }
}
