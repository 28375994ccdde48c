//! Built-in correctness checks against known prime counts.
//!
//! Running both constructions over a fixed table of limits with published
//! prime counts catches gross regressions without an external oracle. The
//! largest entry, 46341, is the first integer whose square exceeds 2^31 and
//! exercises the auxiliary sieve right at the word-width seam.

use crate::config::SegmentConfig;
use crate::sieve::Sieve;
use crate::sieve_error::PrimeSieveError;

/// Limits with their published prime counts, in increasing order.
pub const KNOWN_COUNTS: [(u64, u64); 8] = [
    (96, 24),
    (97, 25),
    (100, 25),
    (101, 26),
    (144, 34),
    (1000, 168),
    (26341, 2894),
    (46341, 4792),
];

/// Result of checking one limit: the count the sieve produced next to the
/// published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub limit: u64,
    pub expected: u64,
    pub counted: u64,
}

impl CheckOutcome {
    /// Whether the sieve agreed with the published count.
    #[inline]
    pub fn passed(&self) -> bool {
        self.counted == self.expected
    }
}

/// Checks the direct construction against every entry of [`KNOWN_COUNTS`].
///
/// # Errors
/// Returns an error if any sieve fails to allocate.
pub fn check_full() -> Result<Vec<CheckOutcome>, PrimeSieveError> {
    KNOWN_COUNTS
        .iter()
        .map(|&(limit, expected)| {
            let sieve = Sieve::try_full(limit)?;
            Ok(outcome(&sieve, limit, expected))
        })
        .collect()
}

/// Checks the segmented construction against every entry of
/// [`KNOWN_COUNTS`] using the given block configuration.
///
/// # Errors
/// Returns an error if any sieve fails to build.
pub fn check_segmented(config: &SegmentConfig) -> Result<Vec<CheckOutcome>, PrimeSieveError> {
    KNOWN_COUNTS
        .iter()
        .map(|&(limit, expected)| {
            let sieve = Sieve::try_segmented(limit, config)?;
            Ok(outcome(&sieve, limit, expected))
        })
        .collect()
}

fn outcome(sieve: &Sieve, limit: u64, expected: u64) -> CheckOutcome {
    CheckOutcome {
        limit,
        expected,
        counted: sieve.query().count_primes(0, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_table_is_increasing() {
        for pair in KNOWN_COUNTS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn both_constructions_pass_every_entry() {
        for outcome in check_full().unwrap() {
            assert!(
                outcome.passed(),
                "direct sieve to {} counted {} primes, expected {}",
                outcome.limit,
                outcome.counted,
                outcome.expected
            );
        }
        let config = SegmentConfig::default();
        for outcome in check_segmented(&config).unwrap() {
            assert!(
                outcome.passed(),
                "segmented sieve to {} counted {} primes, expected {}",
                outcome.limit,
                outcome.counted,
                outcome.expected
            );
        }
    }

    #[test]
    fn tiny_blocks_pass_too() {
        let config = SegmentConfig { block_bytes: 16 };
        assert!(check_segmented(&config).unwrap().iter().all(CheckOutcome::passed));
    }
}
