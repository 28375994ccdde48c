//! Cache-blocked construction: auxiliary sieve, block marking, survivor
//! commit.

use log::{debug, trace};

use crate::config::SegmentConfig;
use crate::debug_invariants::DebugInvariants;
use crate::sieve_error::PrimeSieveError;
use crate::storage::{BlockBuffer, OddBitmap};

use super::carry::CarryList;
use super::{full, index_space, isqrt};

/// Builds the same completed bitmap as the direct construction, one
/// cache-sized block at a time.
///
/// The auxiliary sieve over `isqrt(limit) + 1` is completed up front and
/// supplies every sieving prime. The result bitmap starts all-clear ("not
/// yet known prime"); each block is marked in the byte-per-candidate scratch
/// and its survivors committed by a monotone cursor, so every index is
/// written at most once and only after the scratch has fully decided it.
pub(super) fn build(limit: u64, config: &SegmentConfig) -> Result<OddBitmap, PrimeSieveError> {
    if config.block_bytes == 0 {
        return Err(PrimeSieveError::ZeroBlockSize);
    }
    let len = index_space(limit)?;
    let aux = full::build(isqrt(limit) + 1)?;
    trace!("auxiliary sieve for limit {limit}: {} candidates", aux.len());
    let mut bits = OddBitmap::try_zeroed(len)?;
    let mut block = BlockBuffer::try_new(config.block_bytes)?;
    let mut carry = CarryList::new(block.len());

    // The block walk and the commit cursor both stop at the last valid
    // index, so a short final block never reaches past the candidates the
    // limit actually covers.
    let last = len - 1;
    let mut commit = 0usize;
    let mut low = 0usize;
    while low <= last {
        let high = (low + (block.len() - 1)).min(last);
        block.reset();
        carry.discover(&aux, low, high);
        carry.strike_block(&mut block);
        carry.debug_assert_invariants();
        while commit <= high {
            if block.survives(commit - low) {
                bits.set(commit);
            }
            commit += 1;
        }
        low += block.len();
    }
    debug!(
        "segmented sieve to {limit}: {} blocks of {} candidates, {} sieving primes",
        len.div_ceil(block.len()),
        block.len(),
        carry.len()
    );

    // Same final step as the direct construction: 1 is not prime.
    bits.clear(0);
    Ok(bits)
}
