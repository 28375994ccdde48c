//! Construction-time tuning knobs.

use static_assertions::const_assert;

/// Default scratch block size for [`Sieve::try_segmented`], in bytes.
///
/// Sized to a common L1 data cache so one block stays resident for the whole
/// marking pass. 32 KiB of byte-per-candidate scratch covers 32,768 odd
/// numbers, about 65,536 consecutive integers per block.
///
/// [`Sieve::try_segmented`]: crate::sieve::Sieve::try_segmented
pub const DEFAULT_BLOCK_BYTES: usize = 32 * 1024;

const_assert!(DEFAULT_BLOCK_BYTES > 0);

/// Configuration for the cache-blocked construction.
///
/// The block size affects construction speed only; the completed sieve is
/// bit-for-bit identical for every valid value.
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Scratch block length in bytes, one byte per odd candidate.
    /// Must be non-zero; [`Sieve::try_segmented`] rejects zero with
    /// [`PrimeSieveError::ZeroBlockSize`].
    ///
    /// [`Sieve::try_segmented`]: crate::sieve::Sieve::try_segmented
    /// [`PrimeSieveError::ZeroBlockSize`]: crate::sieve_error::PrimeSieveError::ZeroBlockSize
    pub block_bytes: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            block_bytes: DEFAULT_BLOCK_BYTES,
        }
    }
}
