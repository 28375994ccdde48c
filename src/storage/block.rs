//! Byte-per-candidate scratch for the cache-blocked construction.

use crate::sieve_error::PrimeSieveError;

/// Scratch block reused across segments.
///
/// One byte per odd candidate; a packed-bit block measures noticeably slower
/// under the strided single-cell writes of the marking loop. The buffer is
/// allocated once and [`reset`](BlockBuffer::reset) between segments.
pub struct BlockBuffer {
    cells: Vec<u8>,
}

impl BlockBuffer {
    /// Allocates a block covering `len` candidates, all unmarked.
    ///
    /// # Errors
    /// Returns [`PrimeSieveError::Allocation`] if the allocator refuses.
    pub fn try_new(len: usize) -> Result<Self, PrimeSieveError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| PrimeSieveError::Allocation {
                what: "segment block buffer",
                bytes: len,
                source,
            })?;
        cells.resize(len, 1);
        Ok(Self { cells })
    }

    /// Number of candidates per block.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for the zero-length block.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns every candidate to the unmarked state.
    #[inline]
    pub fn reset(&mut self) {
        self.cells.fill(1);
    }

    /// Marks the candidate at `offset` composite.
    #[inline]
    pub fn strike(&mut self, offset: usize) {
        debug_assert!(offset < self.cells.len());
        self.cells[offset] = 0;
    }

    /// Whether the candidate at `offset` survived the marking pass.
    #[inline]
    pub fn survives(&self, offset: usize) -> bool {
        debug_assert!(offset < self.cells.len());
        self.cells[offset] != 0
    }
}
