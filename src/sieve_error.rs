//! PrimeSieveError: unified error type for prime-sieve public APIs
//!
//! Every fallible operation in this crate returns this type. Out-of-range
//! query bounds are not errors but caller contract violations; the query
//! methods document them under `# Panics`.

use std::collections::TryReserveError;
use thiserror::Error;

/// Unified error type for prime-sieve operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimeSieveError {
    /// The allocator refused the backing storage for a sieve or scratch block.
    #[error("allocation of {bytes} bytes for {what} failed: {source}")]
    Allocation {
        /// Which buffer was being allocated.
        what: &'static str,
        /// Requested size in bytes.
        bytes: usize,
        #[source]
        source: TryReserveError,
    },
    /// The index space for `limit` does not fit in `usize` on this target.
    #[error("limit {limit} exceeds the addressable index space on this target")]
    LimitOverflow { limit: u64 },
    /// The cache-blocked construction was configured with an empty block.
    #[error("segment block size must be non-zero")]
    ZeroBlockSize,
    /// A sieve's bitmap length disagrees with the limit it claims to cover.
    #[error("bitmap holds {len} entries, which does not cover limit {limit}")]
    LengthMismatch { limit: u64, len: usize },
    /// A completed sieve still marks the non-prime value 1.
    #[error("completed sieve still marks 1 as prime")]
    UnitStillPrime,
    /// Carry entries must be appended in increasing prime order.
    #[error("carry list out of order at entry {position}")]
    CarryOutOfOrder { position: usize },
    /// A carried block offset drifted past one stride beyond the block.
    #[error("carry for prime {prime} holds offset {next}, at or beyond bound {bound}")]
    CarryOvershoot {
        prime: u64,
        next: usize,
        bound: usize,
    },
}
