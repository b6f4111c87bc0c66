use log::debug;
use num_traits::Float;
use rand_chacha::ChaCha20Rng;

use crate::error::Result;
use crate::select::pivot::{MedianOfThree, PivotPolicy, RandomPivot};
use crate::select::{select_by_partition, validate_rank, SelectionAlgorithm};

/// Partition-based selection (Hoare's "find").
///
/// Each step partitions the active range around a pivot chosen by `P` and
/// keeps only the side that holds the target rank. Expected O(n); the worst
/// case is O(n^2) on pivot sequences that always pick an extreme value.
///
/// The default policy is [`MedianOfThree`], which is deterministic. Use
/// [`QuickSelect::seeded`] or [`QuickSelect::with_policy`] with a
/// [`RandomPivot`] for randomized pivoting.
#[derive(Debug, Clone, Default)]
pub struct QuickSelect<P = MedianOfThree> {
    policy: P,
}

impl QuickSelect<MedianOfThree> {
    /// QuickSelect with median-of-three pivoting.
    pub fn new() -> Self {
        Self {
            policy: MedianOfThree,
        }
    }
}

impl QuickSelect<RandomPivot<ChaCha20Rng>> {
    /// QuickSelect with uniformly random pivots drawn from a ChaCha20
    /// generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_policy(RandomPivot::seeded(seed))
    }
}

impl<P: PivotPolicy> QuickSelect<P> {
    /// QuickSelect driven by a custom pivot policy.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// The pivot policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: PivotPolicy> SelectionAlgorithm for QuickSelect<P> {
    fn name(&self) -> &'static str {
        "quickselect"
    }

    fn select<T: Float>(&mut self, buffer: &mut [T], k: usize) -> Result<T> {
        if let Err(err) = validate_rank(buffer, k) {
            debug!("{}: rejected: {}", self.name(), err);
            return Err(err);
        }
        debug!("{}: rank {} of {}", self.name(), k, buffer.len());
        Ok(select_by_partition(buffer, k, &mut self.policy))
    }
}

/// Lower median of `buffer` using median-of-three QuickSelect.
///
/// Reorders `buffer`.
pub fn median_quickselect<T: Float>(buffer: &mut [T]) -> Result<T> {
    QuickSelect::new().lower_median(buffer)
}
