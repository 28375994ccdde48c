//! `OddIndex`: the odd-only index compression in one place
//!
//! Even numbers other than 2 are never prime, so the sieve stores one entry
//! per odd number. Index `i` represents the value `2*i + 1`:
//!
//! ```text
//! index:  0   1   2   3   4   5   6   7
//! value:  1   3   5   7   9  11  13  15
//! ```
//!
//! Two identities fall out of the mapping and drive both constructions:
//! - the square of the value at index `i` lives at index `2*i*(i + 1)`,
//!   which is where marking starts (smaller multiples carry a smaller
//!   prime factor and are handled by earlier candidates);
//! - consecutive odd multiples of that value are `2*(2*i + 1)` apart, so
//!   in index space the marking stride is the value itself, `2*i + 1`.
//!
//! This module provides:
//! - A transparent `OddIndex` newtype around `usize` so the identities are
//!   written once instead of being re-derived at every call site.
//! - A checked constructor from a represented value.
//! - `Debug`/`Display`/ordering implementations so indices can be compared,
//!   sorted, and printed easily.

use std::fmt;

/// Position of an odd number in the compressed index space.
///
/// # Memory layout
/// This type is `repr(transparent)`, so it has the same ABI and alignment as
/// `usize` and costs nothing over raw index arithmetic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct OddIndex(usize);

impl OddIndex {
    /// Wraps a raw index. Every index is valid; bounds are the business of
    /// the bitmap holding the entries.
    #[inline]
    pub const fn new(index: usize) -> Self {
        OddIndex(index)
    }

    /// Creates the index representing an odd `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is even; even numbers have no entry in the
    /// compressed index space.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use prime_sieve::index::OddIndex;
    /// let seven = OddIndex::from_value(7);
    /// assert_eq!(seven.get(), 3);
    /// ```
    #[inline]
    pub fn from_value(value: u64) -> Self {
        assert!(value % 2 == 1, "OddIndex::from_value: {value} is even");
        OddIndex((value / 2) as usize)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The odd number this index represents, `2*i + 1`.
    #[inline]
    pub const fn value(self) -> u64 {
        2 * self.0 as u64 + 1
    }

    /// Index of the square of the represented value, `2*i*(i + 1)`.
    ///
    /// Computed in `u64`: near the top of the index space the product can
    /// exceed `usize` on 32-bit targets.
    #[inline]
    pub const fn square_index(self) -> u64 {
        let i = self.0 as u64;
        2 * i * (i + 1)
    }

    /// Distance in index space between consecutive odd multiples of the
    /// represented value. Numerically equal to the value itself.
    #[inline]
    pub const fn stride(self) -> usize {
        2 * self.0 + 1
    }
}

/// Displays as `OddIndex(raw_index)`.
impl fmt::Debug for OddIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OddIndex").field(&self.0).finish()
    }
}

/// Prints the represented odd value, not the index.
impl fmt::Display for OddIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
