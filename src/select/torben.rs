//! Torben Mogensen's median search.
//!
//! Read-only: each pass counts the samples below, at and above a guessed
//! value. Every pass scans the whole buffer; samples spread over a huge
//! dynamic range need more passes.

use log::{debug, trace};
use num_traits::Float;

use crate::error::Result;
use crate::select::validate;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default buffer length from which passes run on rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Statistics about a completed Torben search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TorbenStats {
    pub passes: usize,
}

/// Configuration for Torben's median search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorbenMedian {
    parallel_threshold: usize,
}

impl Default for TorbenMedian {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Counts<T> {
    less: usize,
    equal: usize,
    greater: usize,
    max_below: T,
    min_above: T,
}

impl<T: Float> Counts<T> {
    fn new(min: T, max: T) -> Self {
        Self {
            less: 0,
            equal: 0,
            greater: 0,
            max_below: min,
            min_above: max,
        }
    }

    fn push(mut self, x: T, guess: T) -> Self {
        if x < guess {
            self.less += 1;
            if x > self.max_below {
                self.max_below = x;
            }
        } else if x > guess {
            self.greater += 1;
            if x < self.min_above {
                self.min_above = x;
            }
        } else {
            self.equal += 1;
        }
        self
    }

    #[cfg(feature = "parallel")]
    fn merge(self, other: Self) -> Self {
        Self {
            less: self.less + other.less,
            equal: self.equal + other.equal,
            greater: self.greater + other.greater,
            max_below: self.max_below.max(other.max_below),
            min_above: self.min_above.min(other.min_above),
        }
    }

    /// Value of 1-based `rank` once the guess brackets the median.
    fn value_at(&self, rank: usize, guess: T) -> T {
        if self.less >= rank {
            self.max_below
        } else if self.less + self.equal >= rank {
            guess
        } else {
            self.min_above
        }
    }
}

impl TorbenMedian {
    /// Torben search with the default parallel threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer length from which passes run on rayon (`parallel` feature only).
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// The configured parallel threshold.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Median of `buffer`, averaging the central pair for even lengths.
    pub fn median<T>(&self, buffer: &[T]) -> Result<T>
    where
        T: Float + Send + Sync,
    {
        self.median_with_stats(buffer).map(|(median, _)| median)
    }

    /// Median of `buffer` together with the pass count.
    pub fn median_with_stats<T>(&self, buffer: &[T]) -> Result<(T, TorbenStats)>
    where
        T: Float + Send + Sync,
    {
        if let Err(err) = validate(buffer) {
            debug!("torben: rejected: {}", err);
            return Err(err);
        }

        let n = buffer.len();
        debug!("torben: median of {}", n);

        let (mut min, mut max) = buffer
            .iter()
            .fold((buffer[0], buffer[0]), |(lo, hi), &x| (lo.min(x), hi.max(x)));

        // 1-based rank of the lower median.
        let half = (n + 1) / 2;
        let mut stats = TorbenStats::default();

        let (guess, counts) = loop {
            let guess = midpoint(min, max);
            let counts = self.count(buffer, guess, min, max);
            stats.passes += 1;
            trace!(
                "torben pass {}: less {} equal {} greater {}",
                stats.passes,
                counts.less,
                counts.equal,
                counts.greater
            );

            if counts.less <= half && counts.greater <= half {
                break (guess, counts);
            } else if counts.less > counts.greater {
                max = counts.max_below;
            } else {
                min = counts.min_above;
            }
        };

        let median = if n % 2 == 1 {
            counts.value_at(half, guess)
        } else {
            let lower = counts.value_at(n / 2, guess);
            let upper = counts.value_at(n / 2 + 1, guess);
            midpoint(lower, upper)
        };

        debug!("torben: converged after {} passes", stats.passes);
        Ok((median, stats))
    }

    fn count<T>(&self, buffer: &[T], guess: T, min: T, max: T) -> Counts<T>
    where
        T: Float + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if buffer.len() >= self.parallel_threshold {
                return buffer
                    .par_iter()
                    .fold(|| Counts::new(min, max), |c, &x| c.push(x, guess))
                    .reduce(|| Counts::new(min, max), Counts::merge);
            }
        }

        buffer
            .iter()
            .fold(Counts::new(min, max), |c, &x| c.push(x, guess))
    }
}

/// Median of `buffer` using Torben's method. Does not reorder `buffer`.
pub fn median_torben<T>(buffer: &[T]) -> Result<T>
where
    T: Float + Send + Sync,
{
    TorbenMedian::new().median(buffer)
}

/// Midpoint of two finite values that does not overflow to infinity.
fn midpoint<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    let mid = (a + b) / two;
    if mid.is_finite() {
        mid
    } else {
        a / two + b / two
    }
}
