//! Direct odd-only construction: one flat marking pass over the whole range.

use crate::index::OddIndex;
use crate::sieve_error::PrimeSieveError;
use crate::storage::OddBitmap;

use super::{index_space, isqrt};

/// Builds the completed odd-candidate bitmap for all values up to `limit`.
///
/// Candidates start out presumed prime. For each still-unmarked index `i`,
/// every stride-`2i+1` index from the square index `2*i*(i+1)` onward is
/// cleared; smaller multiples carry a smaller prime factor and were cleared
/// by an earlier candidate. Candidates above `isqrt(limit)` never run a
/// marking pass of their own, since any composite in range has a factor at
/// or below its square root.
pub(super) fn build(limit: u64) -> Result<OddBitmap, PrimeSieveError> {
    let len = index_space(limit)?;
    let mut bits = OddBitmap::try_filled(len)?;
    let bound = len as u64;
    let candidates = (isqrt(limit) / 2 + 1) as usize;
    for i in 1..candidates {
        if bits.get(i) {
            let candidate = OddIndex::new(i);
            let stride = candidate.stride() as u64;
            let mut multiple = candidate.square_index();
            while multiple < bound {
                bits.clear(multiple as usize);
                multiple += stride;
            }
        }
    }
    // 1 is not prime; with its bit cleared the completed array reads
    // directly as "bit i set means 2i+1 is prime".
    bits.clear(0);
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surviving_values(bits: &OddBitmap) -> Vec<u64> {
        bits.ones_in(0, bits.len())
            .map(|index| OddIndex::new(index).value())
            .collect()
    }

    #[test]
    fn small_range_survivors_are_the_odd_primes() {
        let bits = build(25).unwrap();
        assert_eq!(bits.len(), 13);
        assert_eq!(surviving_values(&bits), vec![3, 5, 7, 11, 13, 17, 19, 23]);
    }

    #[test]
    fn squares_of_late_candidates_are_marked() {
        // 25 = 5*5 is the first composite whose factors exceed 3.
        let bits = build(25).unwrap();
        assert!(!bits.get(12));
        // 49 = 7*7 likewise needs the candidate at index 3.
        let bits = build(49).unwrap();
        assert!(!bits.get(24));
    }

    #[test]
    fn unit_bit_is_cleared() {
        for limit in [0u64, 1, 2, 3, 100] {
            let bits = build(limit).unwrap();
            assert!(!bits.get(0), "1 must not survive for limit {limit}");
        }
    }

    #[test]
    fn degenerate_limits_build_single_entry_arrays() {
        for limit in [0u64, 1] {
            let bits = build(limit).unwrap();
            assert_eq!(bits.len(), 1);
            assert_eq!(bits.count_range(0, 1), 0);
        }
    }
}
