//! Cross-block marking state for the cache-blocked construction.

use crate::debug_invariants::DebugInvariants;
use crate::index::OddIndex;
use crate::sieve_error::PrimeSieveError;
use crate::storage::{BlockBuffer, OddBitmap};

/// One sieving prime and where it strikes next.
///
/// `next` is relative to the current block. Between blocks it carries the
/// overshoot of the previous marking pass, so the first multiple inside a
/// block is found without any per-block modular arithmetic.
#[derive(Debug, Clone, Copy)]
struct SievingPrime {
    prime: OddIndex,
    next: usize,
}

/// The sieving primes discovered so far, in increasing order, each with its
/// block-relative next offset.
///
/// Discovery is lazy and monotone: a cursor over the auxiliary sieve
/// advances while the square of the candidate value falls at or below the
/// current block's high index, and never revisits earlier candidates. Each
/// prime therefore joins the list in exactly the block containing its
/// square, with its first offset already inside that block.
pub struct CarryList {
    entries: Vec<SievingPrime>,
    /// Next auxiliary index to examine; starts at 1, the value 3.
    cursor: usize,
    block_len: usize,
}

impl CarryList {
    pub fn new(block_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 1,
            block_len,
        }
    }

    /// Number of sieving primes carried so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances the discovery cursor through every auxiliary prime whose
    /// square index lies at or below `high`, recording its first offset
    /// relative to the block starting at `low`.
    pub fn discover(&mut self, aux: &OddBitmap, low: usize, high: usize) {
        while OddIndex::new(self.cursor).square_index() <= high as u64 {
            let candidate = OddIndex::new(self.cursor);
            self.cursor += 1;
            if aux.get(candidate.get()) {
                let next = (candidate.square_index() - low as u64) as usize;
                self.entries.push(SievingPrime {
                    prime: candidate,
                    next,
                });
            }
        }
    }

    /// Strikes every multiple of every carried prime inside `block`, then
    /// stores each overshoot as the prime's offset into the next block.
    pub fn strike_block(&mut self, block: &mut BlockBuffer) {
        let block_len = block.len();
        debug_assert_eq!(block_len, self.block_len);
        for entry in &mut self.entries {
            let stride = entry.prime.stride();
            let mut offset = entry.next;
            while offset < block_len {
                block.strike(offset);
                offset += stride;
            }
            entry.next = offset - block_len;
        }
    }
}

impl DebugInvariants for CarryList {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "CarryList");
    }

    fn validate_invariants(&self) -> Result<(), PrimeSieveError> {
        if self.is_empty() {
            return Ok(());
        }
        // Primes appear in discovery order, each exactly once.
        for (position, pair) in self.entries.windows(2).enumerate() {
            if pair[1].prime <= pair[0].prime {
                return Err(PrimeSieveError::CarryOutOfOrder {
                    position: position + 1,
                });
            }
        }
        // Offsets never drift: a fresh entry sits inside the block, a
        // processed one within one stride past it.
        for entry in &self.entries {
            let bound = self.block_len + entry.prime.stride();
            if entry.next >= bound {
                return Err(PrimeSieveError::CarryOvershoot {
                    prime: entry.prime.value(),
                    next: entry.next,
                    bound,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Auxiliary bitmap covering values up to 11: primes 3, 5, 7, 11 at
    /// indices 1, 2, 3, 5.
    fn aux_to_eleven() -> OddBitmap {
        let mut aux = OddBitmap::try_filled(6).unwrap();
        aux.clear(0); // 1
        aux.clear(4); // 9
        aux
    }

    #[test]
    fn discovery_waits_for_the_square() {
        let aux = aux_to_eleven();
        let mut carry = CarryList::new(8);
        assert!(carry.is_empty());
        assert!(carry.validate_invariants().is_ok());

        // Block [0, 7]: only 3 qualifies (9 sits at index 4).
        carry.discover(&aux, 0, 7);
        assert!(!carry.is_empty());
        assert_eq!(carry.len(), 1);
        assert_eq!(carry.entries[0].prime.value(), 3);
        assert_eq!(carry.entries[0].next, 4);

        // Block [8, 15]: 5 joins (25 at index 12), 7 not yet (49 at 24).
        carry.discover(&aux, 8, 15);
        assert_eq!(carry.len(), 2);
        assert_eq!(carry.entries[1].prime.value(), 5);
        assert_eq!(carry.entries[1].next, 12 - 8);
        assert!(carry.validate_invariants().is_ok());
    }

    #[test]
    fn strike_carries_the_overshoot() {
        let aux = aux_to_eleven();
        let mut carry = CarryList::new(8);
        let mut block = BlockBuffer::try_new(8).unwrap();

        carry.discover(&aux, 0, 7);
        carry.strike_block(&mut block);
        // Multiples of 3 in the first block: indices 4 (9) and 7 (15).
        assert!(!block.survives(4));
        assert!(!block.survives(7));
        assert!(block.survives(1));
        assert!(block.survives(5));
        // 21 sits at index 10, two past the block edge.
        assert_eq!(carry.entries[0].next, 2);
        assert!(carry.validate_invariants().is_ok());

        // Second block: 3 resumes at its carried offset, 5 starts at 25.
        block.reset();
        carry.discover(&aux, 8, 15);
        carry.strike_block(&mut block);
        for offset in [2usize, 5] {
            assert!(!block.survives(offset), "3 should strike index {}", 8 + offset);
        }
        assert!(!block.survives(4), "5 should strike its square at index 12");
        assert!(block.survives(0)); // 17
        assert!(block.survives(3)); // 23
        assert!(carry.validate_invariants().is_ok());
    }

    #[test]
    fn strides_longer_than_the_block_step_down() {
        // A prime whose stride dwarfs the block: the offset just steps down
        // by one block length per pass until the multiple arrives.
        let mut carry = CarryList::new(4);
        carry.entries.push(SievingPrime {
            prime: OddIndex::from_value(23),
            next: 10,
        });
        let mut block = BlockBuffer::try_new(4).unwrap();

        carry.strike_block(&mut block);
        assert_eq!(carry.entries[0].next, 6);
        assert!((0..4).all(|offset| block.survives(offset)));

        carry.strike_block(&mut block);
        assert_eq!(carry.entries[0].next, 2);

        carry.strike_block(&mut block);
        assert!(!block.survives(2));
        assert_eq!(carry.entries[0].next, 2 + 23 - 4);
    }

    #[test]
    fn validation_reports_disorder_and_drift() {
        let mut carry = CarryList::new(8);
        carry.entries.push(SievingPrime {
            prime: OddIndex::from_value(5),
            next: 0,
        });
        carry.entries.push(SievingPrime {
            prime: OddIndex::from_value(3),
            next: 0,
        });
        assert_eq!(
            carry.validate_invariants(),
            Err(PrimeSieveError::CarryOutOfOrder { position: 1 })
        );

        let mut carry = CarryList::new(8);
        carry.entries.push(SievingPrime {
            prime: OddIndex::from_value(3),
            next: 8 + 3,
        });
        assert_eq!(
            carry.validate_invariants(),
            Err(PrimeSieveError::CarryOvershoot {
                prime: 3,
                next: 11,
                bound: 11,
            })
        );
    }
}
