//! Sieve construction: the completed-sieve entity and its two builders.
//!
//! [`Sieve::try_full`] marks the whole odd range in one flat pass;
//! [`Sieve::try_segmented`] produces the identical bitmap block by block,
//! keeping the working set inside one cache-sized scratch buffer. Both end
//! in the same completed form: bit `i` set exactly when `2*i + 1` is prime.

pub mod carry;
mod full;
mod segmented;

use once_cell::sync::OnceCell;

use crate::config::SegmentConfig;
use crate::debug_invariants::DebugInvariants;
use crate::query::PrimeQuery;
use crate::sieve_error::PrimeSieveError;
use crate::storage::OddBitmap;

/// A completed sieve over all values up to an inclusive limit.
///
/// Immutable after construction; all reads go through [`Sieve::query`].
#[derive(Debug)]
pub struct Sieve {
    limit: u64,
    bits: OddBitmap,
    /// Total primes up to the limit, computed on first request.
    prime_count: OnceCell<u64>,
}

impl Sieve {
    /// Builds a sieve by the direct construction.
    ///
    /// # Errors
    /// [`PrimeSieveError::Allocation`] if the bitmap cannot be allocated;
    /// [`PrimeSieveError::LimitOverflow`] if the index space for `limit`
    /// does not fit in `usize` on this target.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use prime_sieve::sieve::Sieve;
    /// # fn main() -> Result<(), prime_sieve::sieve_error::PrimeSieveError> {
    /// let sieve = Sieve::try_full(1000)?;
    /// assert_eq!(sieve.query().count_primes(0, 1000), 168);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_full(limit: u64) -> Result<Self, PrimeSieveError> {
        Self::finish(limit, full::build(limit)?)
    }

    /// Builds a sieve by the cache-blocked construction.
    ///
    /// The result is bit-for-bit identical to [`Sieve::try_full`] for every
    /// valid block size; the block size only changes how the work is
    /// scheduled.
    ///
    /// # Errors
    /// Everything [`Sieve::try_full`] returns, plus
    /// [`PrimeSieveError::ZeroBlockSize`] when `config.block_bytes` is zero.
    pub fn try_segmented(limit: u64, config: &SegmentConfig) -> Result<Self, PrimeSieveError> {
        Self::finish(limit, segmented::build(limit, config)?)
    }

    fn finish(limit: u64, bits: OddBitmap) -> Result<Self, PrimeSieveError> {
        let sieve = Self {
            limit,
            bits,
            prime_count: OnceCell::new(),
        };
        sieve.debug_assert_invariants();
        Ok(sieve)
    }

    /// The inclusive bound this sieve covers.
    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// A read-only query view over the completed sieve.
    #[inline]
    pub fn query(&self) -> PrimeQuery<'_> {
        PrimeQuery::new(&self.bits, self.limit)
    }

    /// Total number of primes up to the limit, computed once and cached.
    pub fn prime_count(&self) -> u64 {
        *self
            .prime_count
            .get_or_init(|| self.query().count_primes(0, self.limit))
    }
}

impl DebugInvariants for Sieve {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Sieve");
    }

    fn validate_invariants(&self) -> Result<(), PrimeSieveError> {
        if self.bits.len() as u64 != self.limit / 2 + 1 {
            return Err(PrimeSieveError::LengthMismatch {
                limit: self.limit,
                len: self.bits.len(),
            });
        }
        if self.bits.get(0) {
            return Err(PrimeSieveError::UnitStillPrime);
        }
        Ok(())
    }
}

/// Number of odd-candidate entries covering `limit`: one per odd value,
/// `limit/2 + 1` in total.
fn index_space(limit: u64) -> Result<usize, PrimeSieveError> {
    usize::try_from(limit / 2 + 1).map_err(|_| PrimeSieveError::LimitOverflow { limit })
}

/// Integer square root, overflow-safe for all `u64` values.
#[inline]
fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && x.checked_mul(x).is_none_or(|sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) {
        x += 1;
    }
    x
}
