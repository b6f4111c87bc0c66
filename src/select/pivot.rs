//! Pivot selection policies for the partition-based selectors.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Chooses the pivot for one partitioning step.
pub trait PivotPolicy {
    /// Index into the non-empty `range` to partition around; `k` is the
    /// target rank relative to the start of `range`.
    fn pivot_index<T: PartialOrd>(&mut self, range: &[T], k: usize) -> usize;
}

/// Median of the first, middle and last element of the active range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedianOfThree;

impl PivotPolicy for MedianOfThree {
    fn pivot_index<T: PartialOrd>(&mut self, range: &[T], _k: usize) -> usize {
        let lo = 0;
        let hi = range.len() - 1;
        let mid = hi / 2;

        let (a, b, c) = (&range[lo], &range[mid], &range[hi]);
        if (a <= b) == (b <= c) {
            mid
        } else if (b <= a) == (a <= c) {
            lo
        } else {
            hi
        }
    }
}

/// The element currently at the target rank (Wirth's pivot).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetPivot;

impl PivotPolicy for TargetPivot {
    fn pivot_index<T: PartialOrd>(&mut self, _range: &[T], k: usize) -> usize {
        k
    }
}

/// A uniformly random index drawn from an injected generator.
#[derive(Debug, Clone)]
pub struct RandomPivot<R> {
    rng: R,
}

impl<R: Rng> RandomPivot<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the policy and hands back the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomPivot<ChaCha20Rng> {
    /// ChaCha20 generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }

    /// ChaCha20 generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

impl<R: Rng> PivotPolicy for RandomPivot<R> {
    fn pivot_index<T: PartialOrd>(&mut self, range: &[T], _k: usize) -> usize {
        self.rng.gen_range(0..range.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_of_three_picks_middle_value() {
        let mut policy = MedianOfThree;
        assert_eq!(policy.pivot_index(&[1.0, 5.0, 9.0], 0), 1);
        assert_eq!(policy.pivot_index(&[5.0, 1.0, 9.0], 0), 0);
        assert_eq!(policy.pivot_index(&[9.0, 1.0, 5.0], 0), 2);
        assert_eq!(policy.pivot_index(&[9.0, 5.0, 1.0], 0), 1);
    }

    #[test]
    fn test_median_of_three_uses_range_ends() {
        let mut policy = MedianOfThree;
        // first = 4.0, middle (index 2) = 0.0, last = 2.0
        let range = [4.0, 7.0, 0.0, 8.0, 2.0];
        assert_eq!(policy.pivot_index(&range, 0), 4);
    }

    #[test]
    fn test_median_of_three_small_ranges() {
        let mut policy = MedianOfThree;
        assert_eq!(policy.pivot_index(&[3.0], 0), 0);
        let idx = policy.pivot_index(&[3.0, 1.0], 0);
        assert!(idx < 2);
    }

    #[test]
    fn test_median_of_three_equal_values() {
        let mut policy = MedianOfThree;
        assert_eq!(policy.pivot_index(&[2.0, 2.0, 2.0, 2.0], 0), 1);
    }

    #[test]
    fn test_target_pivot_returns_rank() {
        let mut policy = TargetPivot;
        assert_eq!(policy.pivot_index(&[1.0, 2.0, 3.0, 4.0], 3), 3);
        assert_eq!(policy.pivot_index(&[1.0, 2.0, 3.0, 4.0], 0), 0);
    }

    #[test]
    fn test_random_pivot_in_bounds() {
        let mut policy = RandomPivot::seeded(7);
        let range = [0.0; 13];
        for _ in 0..1000 {
            assert!(policy.pivot_index(&range, 0) < range.len());
        }
    }

    #[test]
    fn test_random_pivot_same_seed_same_sequence() {
        let range = [0.0; 100];
        let mut a = RandomPivot::seeded(42);
        let mut b = RandomPivot::seeded(42);
        let seq_a: Vec<usize> = (0..50).map(|_| a.pivot_index(&range, 0)).collect();
        let seq_b: Vec<usize> = (0..50).map(|_| b.pivot_index(&range, 0)).collect();
        assert_eq!(seq_a, seq_b);
    }
}
