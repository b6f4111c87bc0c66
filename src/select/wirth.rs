//! Wirth's selection algorithm.
//!
//! Reference: N. Wirth, *Algorithms + Data Structures = Programs*,
//! Prentice-Hall, 1976.

use log::debug;
use num_traits::Float;

use crate::error::Result;
use crate::select::pivot::TargetPivot;
use crate::select::{select_by_partition, validate_rank, SelectionAlgorithm};

/// Deterministic selection that always pivots on the element currently at
/// the target rank.
///
/// Uses the same crossing-pointer partition as [`QuickSelect`], but the
/// pivot choice involves no randomness and no sampling, so the result and
/// the final buffer arrangement depend only on the input order.
///
/// [`QuickSelect`]: crate::select::QuickSelect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WirthSelect;

impl WirthSelect {
    /// Wirth's selector.
    pub fn new() -> Self {
        Self
    }
}

impl SelectionAlgorithm for WirthSelect {
    fn name(&self) -> &'static str {
        "wirth"
    }

    fn select<T: Float>(&mut self, buffer: &mut [T], k: usize) -> Result<T> {
        if let Err(err) = validate_rank(buffer, k) {
            debug!("{}: rejected: {}", self.name(), err);
            return Err(err);
        }
        debug!("{}: rank {} of {}", self.name(), k, buffer.len());
        Ok(select_by_partition(buffer, k, &mut TargetPivot))
    }
}

/// Lower median of `buffer` using Wirth's algorithm.
///
/// Reorders `buffer`.
pub fn median_wirth<T: Float>(buffer: &mut [T]) -> Result<T> {
    WirthSelect.lower_median(buffer)
}
