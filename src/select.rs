//! Order statistic selection over floating-point buffers.
//!
//! This module provides:
//! - QuickSelect with a pluggable pivot policy (median-of-three by default)
//! - Wirth's selection, which pivots on the element at the target rank
//! - Torben's median, which counts instead of reordering
//! - The Aho/Hopcroft/Ullman counting selector
//! - `kth_smallest` for arbitrary ranks
//!
//! # Conventions
//!
//! The partition-based selectors return a value that is present in the
//! buffer. Their median entry points return the *lower* median for an even
//! number of samples; ask for rank `n / 2` through [`kth_smallest`] to get
//! the upper one. [`median_torben`] instead returns the mean of the two
//! central values for an even number of samples.
//!
//! Selectors that take `&mut [T]` reorder the buffer. The multiset of values
//! is preserved, the order is not; copy the buffer first if the order
//! matters. Selectors that take `&[T]` never reorder anything.
//!
//! Every entry point rejects empty buffers, out-of-range ranks and NaN or
//! infinite samples before touching the buffer.
//!
//! # Examples
//!
//! ```rust
//! use medians::select::{kth_smallest, median_quickselect, median_torben};
//!
//! let samples = [3.0, 1.0, 4.0, 2.0];
//!
//! assert_eq!(median_torben(&samples).unwrap(), 2.5);
//!
//! let mut buffer = samples;
//! assert_eq!(median_quickselect(&mut buffer).unwrap(), 2.0);
//!
//! let mut buffer = samples;
//! assert_eq!(kth_smallest(&mut buffer, 2).unwrap(), 3.0);
//! ```

pub mod ahu;
pub mod kth_smallest;
pub mod partition;
pub mod pivot;
pub mod quickselect;
pub mod torben;
pub mod wirth;


use std::cmp::Ordering;

use log::{debug, trace};
use num_traits::Float;

use crate::error::{Error, Result};

pub use ahu::{median_ahu, AhuSelect};
pub use kth_smallest::kth_smallest;
pub use partition::partition;
pub use pivot::{MedianOfThree, PivotPolicy, RandomPivot, TargetPivot};
pub use quickselect::{median_quickselect, QuickSelect};
pub use torben::{median_torben, TorbenMedian, TorbenStats};
pub use wirth::{median_wirth, WirthSelect};

/// A selection algorithm that finds the value of a given rank.
pub trait SelectionAlgorithm {
    /// Short name used in logs and benchmark labels.
    fn name(&self) -> &'static str;

    /// Returns the value that would sit at index `k` if `buffer` were sorted
    /// ascending. May reorder `buffer`.
    fn select<T: Float>(&mut self, buffer: &mut [T], k: usize) -> Result<T>;

    /// Returns the lower median, i.e. the value of rank `(n - 1) / 2`.
    fn lower_median<T: Float>(&mut self, buffer: &mut [T]) -> Result<T> {
        if buffer.is_empty() {
            debug!("{}: rejected: {}", self.name(), Error::EmptyInput);
            return Err(Error::EmptyInput);
        }
        let k = lower_median_rank(buffer.len());
        self.select(buffer, k)
    }
}

/// Rank of the lower median for `len` samples.
pub fn lower_median_rank(len: usize) -> usize {
    len.saturating_sub(1) / 2
}

/// Checks that `buffer` is non-empty and holds only finite values.
pub(crate) fn validate<T: Float>(buffer: &[T]) -> Result<()> {
    if buffer.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(index) = buffer.iter().position(|x| !x.is_finite()) {
        return Err(Error::NonFinite { index });
    }
    Ok(())
}

/// Like [`validate`], and additionally checks that `k` addresses an element.
pub(crate) fn validate_rank<T: Float>(buffer: &[T], k: usize) -> Result<()> {
    if buffer.is_empty() {
        return Err(Error::EmptyInput);
    }
    if k >= buffer.len() {
        return Err(Error::InvalidRank {
            k,
            len: buffer.len(),
        });
    }
    validate(buffer)
}

/// Narrows `[lo, hi]` around the target rank until the partition lands on
/// it. Only the side holding `k` is ever revisited.
///
/// The caller guarantees `k < data.len()`.
pub(crate) fn select_by_partition<T, P>(data: &mut [T], k: usize, policy: &mut P) -> T
where
    T: PartialOrd + Copy,
    P: PivotPolicy,
{
    let mut lo = 0;
    let mut hi = data.len() - 1;
    let mut steps = 0usize;

    loop {
        if lo == hi {
            trace!("range collapsed to index {} after {} steps", lo, steps);
            return data[lo];
        }

        let range = &mut data[lo..=hi];
        let pivot = policy.pivot_index(range, k - lo);
        let p = lo + partition(range, pivot);
        steps += 1;
        trace!("step {}: range [{}, {}], pivot landed at {}", steps, lo, hi, p);

        match k.cmp(&p) {
            Ordering::Equal => return data[p],
            Ordering::Less => hi = p - 1,
            Ordering::Greater => lo = p + 1,
        }
    }
}
