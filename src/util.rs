use rand::Rng;

/// Uniform integer in `[0, max)`. A non-positive `max` collapses to 0
/// rather than failing, keeping helper misuse non-fatal.
pub fn random_below(max: i64) -> i64 {
    if max <= 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..max)
}

/// Uniform integer in `[min, max]` inclusive. A degenerate range collapses
/// to `min`.
pub fn random_range(min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_below_stays_in_range() {
        for _ in 0..200 {
            let v = random_below(6);
            assert!((0..6).contains(&v));
        }
    }

    #[test]
    fn random_range_is_inclusive() {
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..500 {
            let v = random_range(1, 3);
            assert!((1..=3).contains(&v));
            saw_min |= v == 1;
            saw_max |= v == 3;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn degenerate_ranges_collapse() {
        assert_eq!(random_below(0), 0);
        assert_eq!(random_below(-5), 0);
        assert_eq!(random_range(7, 7), 7);
        assert_eq!(random_range(9, 2), 9);
    }
}
