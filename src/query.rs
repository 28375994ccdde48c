//! Read-only prime queries over a completed sieve.
//!
//! The sieve array stores odd candidates only, so the prime 2 appears
//! nowhere in it; this module handles 2 in one place, as an implicit member
//! of every range that covers it. All query bounds are inclusive values,
//! never indices.

use crate::index::OddIndex;
use crate::storage::{OddBitmap, OnesIn};

/// Borrowed view over a completed sieve, answering value-range questions.
///
/// Cheap to construct and copy; every query is independent and repeatable.
#[derive(Clone, Copy)]
pub struct PrimeQuery<'a> {
    bits: &'a OddBitmap,
    limit: u64,
}

impl<'a> PrimeQuery<'a> {
    pub(crate) fn new(bits: &'a OddBitmap, limit: u64) -> Self {
        Self { bits, limit }
    }

    /// The inclusive bound of the underlying sieve.
    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Counts primes in the inclusive value range `[start, end]`.
    ///
    /// An empty range (`start > end`) counts zero. The prime 2 is counted
    /// whenever `start <= 2 <= end`; from there the count is a popcount over
    /// the odd indices `[start/2, (end+1)/2)`.
    ///
    /// # Panics
    /// Panics if `start` or `end` exceeds the sieve limit. Bounds past the
    /// sieved range are a caller error; answering from a sieve that never
    /// examined those values would be silently wrong.
    pub fn count_primes(&self, start: u64, end: u64) -> u64 {
        self.check_bounds(start, end);
        if start > end {
            return 0;
        }
        let mut count = 0;
        let mut start = start;
        if start <= 2 && 2 <= end {
            count += 1;
            start = 2;
        }
        count + self
            .bits
            .count_range((start / 2) as usize, ((end + 1) / 2) as usize)
    }

    /// Iterates the primes in the inclusive value range `[start, end]` in
    /// increasing order.
    ///
    /// Lazy, borrows the sieve, and restartable: every call walks the range
    /// from scratch and repeated calls yield identical sequences.
    ///
    /// # Panics
    /// Panics if `start` or `end` exceeds the sieve limit, as for
    /// [`count_primes`](PrimeQuery::count_primes).
    pub fn primes(&self, start: u64, end: u64) -> Primes<'a> {
        self.check_bounds(start, end);
        if start > end {
            return Primes {
                two: false,
                odds: self.bits.ones_in(0, 0),
            };
        }
        let two = start <= 2 && 2 <= end;
        let start = if two { 2 } else { start };
        Primes {
            two,
            odds: self
                .bits
                .ones_in((start / 2) as usize, ((end + 1) / 2) as usize),
        }
    }

    /// Whether `value` is prime.
    ///
    /// # Panics
    /// Panics if `value` exceeds the sieve limit.
    pub fn is_prime(&self, value: u64) -> bool {
        assert!(
            value <= self.limit,
            "query value {value} exceeds sieve limit {}",
            self.limit
        );
        if value == 2 {
            return true;
        }
        if value % 2 == 0 {
            return false;
        }
        self.bits.get((value / 2) as usize)
    }

    fn check_bounds(&self, start: u64, end: u64) {
        assert!(
            start <= self.limit,
            "query start {start} exceeds sieve limit {}",
            self.limit
        );
        assert!(
            end <= self.limit,
            "query end {end} exceeds sieve limit {}",
            self.limit
        );
    }
}

/// Lazy iterator over the primes in a value range, in increasing order.
///
/// Produced by [`PrimeQuery::primes`]. Yields 2 first when the range covers
/// it, then every surviving odd candidate as its value.
pub struct Primes<'a> {
    two: bool,
    odds: OnesIn<'a>,
}

impl Iterator for Primes<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.two {
            self.two = false;
            return Some(2);
        }
        self.odds.next().map(|index| OddIndex::new(index).value())
    }
}
