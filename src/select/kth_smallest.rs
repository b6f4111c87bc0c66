use num_traits::Float;

use crate::error::Result;
use crate::select::{SelectionAlgorithm, WirthSelect};

/// Returns the `k`-th smallest value of `buffer` (0-based, so `k = 0` is the
/// minimum and `k = n - 1` the maximum).
///
/// Backed by [`WirthSelect`]. Reorders `buffer`; on return the value sits at
/// index `k`, with nothing larger before it and nothing smaller after it.
///
/// # Errors
///
/// - [`Error::EmptyInput`](crate::Error::EmptyInput) if `buffer` is empty.
/// - [`Error::InvalidRank`](crate::Error::InvalidRank) if `k >= buffer.len()`.
/// - [`Error::NonFinite`](crate::Error::NonFinite) if `buffer` holds NaN or
///   an infinity.
///
/// # Example
///
/// ```
/// use medians::select::kth_smallest;
///
/// let mut buffer = [8.0, 1.0, 4.0, 9.0, 2.0];
/// assert_eq!(kth_smallest(&mut buffer, 0).unwrap(), 1.0);
/// assert_eq!(kth_smallest(&mut buffer, 4).unwrap(), 9.0);
/// ```
pub fn kth_smallest<T: Float>(buffer: &mut [T], k: usize) -> Result<T> {
    WirthSelect.select(buffer, k)
}
