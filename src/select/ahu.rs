use log::{debug, trace};
use num_traits::Float;

use crate::error::Result;
use crate::select::{lower_median_rank, validate_rank, SelectionAlgorithm};

/// Three-way counting selection from Aho, Hopcroft and Ullman. Reads the
/// buffer and narrows a scratch copy, so it needs O(n) extra space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AhuSelect;

impl AhuSelect {
    /// The AHU selector.
    pub fn new() -> Self {
        Self
    }

    /// Value of 0-based rank `k` in `buffer` without reordering it.
    pub fn select_ref<T: Float>(&self, buffer: &[T], k: usize) -> Result<T> {
        if let Err(err) = validate_rank(buffer, k) {
            debug!("ahu: rejected: {}", err);
            return Err(err);
        }
        debug!("ahu: rank {} of {}", k, buffer.len());
        Ok(select_k(buffer, k))
    }
}

impl SelectionAlgorithm for AhuSelect {
    fn name(&self) -> &'static str {
        "ahu"
    }

    fn select<T: Float>(&mut self, buffer: &mut [T], k: usize) -> Result<T> {
        self.select_ref(buffer, k)
    }
}

fn select_k<T: Float>(buffer: &[T], mut k: usize) -> T {
    let mut list = buffer.to_vec();
    loop {
        if list.len() == 1 {
            return list[0];
        }

        let pivot = list[list.len() / 2];
        let (mut less, mut equal) = (0, 0);
        for &x in &list {
            if x < pivot {
                less += 1;
            } else if x == pivot {
                equal += 1;
            }
        }
        trace!("ahu: {} samples, {} below and {} at pivot", list.len(), less, equal);

        if k < less {
            list.retain(|&x| x < pivot);
        } else if k < less + equal {
            return pivot;
        } else {
            k -= less + equal;
            list.retain(|&x| x > pivot);
        }
    }
}

/// Lower median of `buffer` using the AHU selector. Does not reorder `buffer`.
pub fn median_ahu<T: Float>(buffer: &[T]) -> Result<T> {
    AhuSelect.select_ref(buffer, lower_median_rank(buffer.len()))
}
