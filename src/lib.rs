#![cfg_attr(docsrs, feature(doc_cfg))]
//! # prime-sieve
//!
//! prime-sieve computes prime numbers with the Sieve of Eratosthenes over a
//! compressed odd-only array, either in one pass over a single allocation or
//! in cache-sized blocks fed by an auxiliary sieve. A completed sieve is
//! immutable and answers count, membership, and enumeration queries over any
//! value range it covers.
//!
//! ## Highlights
//! - Odd-only candidate storage: one bit per odd number, half the memory and
//!   half the strikes of a naive sieve
//! - A segmented construction whose working set is one small block plus the
//!   sieving primes up to the square root of the limit
//! - Range queries answered by masked popcounts, enumeration by a lazy
//!   iterator that never materializes the primes
//! - Built-in self-checks against published prime counts
//!
//! ## Usage
//! ```
//! use prime_sieve::prelude::*;
//!
//! fn main() -> Result<(), PrimeSieveError> {
//!     let sieve = Sieve::try_segmented(10_000, &SegmentConfig::default())?;
//!     let query = sieve.query();
//!
//!     assert_eq!(query.count_primes(0, 10_000), 1_229);
//!     assert!(query.is_prime(9_973));
//!
//!     let small: Vec<u64> = query.primes(0, 20).collect();
//!     assert_eq!(small, vec![2, 3, 5, 7, 11, 13, 17, 19]);
//!     Ok(())
//! }
//! ```
//!
//! ## Invariant checking
//! Debug builds validate internal invariants at construction seams via
//! [`DebugInvariants`]. Enable the `strict-invariants` or `check-invariants`
//! feature to keep those checks in release builds.

pub mod config;
pub mod debug_invariants;
pub mod index;
pub mod query;
pub mod selfcheck;
pub mod sieve;
pub mod sieve_error;
pub mod storage;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::config::{DEFAULT_BLOCK_BYTES, SegmentConfig};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::index::OddIndex;
    pub use crate::query::{PrimeQuery, Primes};
    pub use crate::selfcheck::{CheckOutcome, KNOWN_COUNTS, check_full, check_segmented};
    pub use crate::sieve::Sieve;
    pub use crate::sieve_error::PrimeSieveError;
}
