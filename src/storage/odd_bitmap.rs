//! Packed bitmap over the odd-only index space.
//!
//! One bit per odd candidate, 8x smaller than a `Vec<bool>` of the same
//! range: a sieve to 2^31 fits in 64 MiB. Range counting runs on word-level
//! `count_ones` (hardware POPCNT where available) and set-bit iteration
//! walks words with `trailing_zeros`, touching only surviving candidates.

use crate::sieve_error::PrimeSieveError;

const WORD_BITS: usize = u64::BITS as usize;

/// Packed bit array indexed by [`OddIndex`](crate::index::OddIndex)
/// positions.
///
/// A set bit means the candidate is (still) considered prime; a clear bit
/// means it has been eliminated. Unused bits past `len` in the last word are
/// kept clear so word-level counting never over-reports.
#[derive(Debug)]
pub struct OddBitmap {
    words: Vec<u64>,
    len: usize,
}

impl OddBitmap {
    /// Creates a bitmap of `len` candidates, all set.
    ///
    /// # Errors
    /// Returns [`PrimeSieveError::Allocation`] if the allocator refuses the
    /// backing words.
    pub fn try_filled(len: usize) -> Result<Self, PrimeSieveError> {
        let num_words = len.div_ceil(WORD_BITS);
        let mut words = try_words(num_words, u64::MAX)?;
        // Clear the unused high bits of the last word.
        let extra = num_words * WORD_BITS - len;
        if extra > 0 {
            if let Some(last) = words.last_mut() {
                *last >>= extra;
            }
        }
        Ok(Self { words, len })
    }

    /// Creates a bitmap of `len` candidates, all clear.
    ///
    /// # Errors
    /// Returns [`PrimeSieveError::Allocation`] if the allocator refuses the
    /// backing words.
    pub fn try_zeroed(len: usize) -> Result<Self, PrimeSieveError> {
        let num_words = len.div_ceil(WORD_BITS);
        let words = try_words(num_words, 0)?;
        Ok(Self { words, len })
    }

    /// Number of candidates this bitmap covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the bitmap covers no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads the bit at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "bitmap index out of bounds: {index} >= {}",
            self.len
        );
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Sets the bit at `index`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(
            index < self.len,
            "bitmap index out of bounds: {index} >= {}",
            self.len
        );
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Clears the bit at `index`.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(
            index < self.len,
            "bitmap index out of bounds: {index} >= {}",
            self.len
        );
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
    }

    /// Counts set bits in the half-open index range `[lo, hi)`.
    pub fn count_range(&self, lo: usize, hi: usize) -> u64 {
        debug_assert!(
            lo <= hi && hi <= self.len,
            "range [{lo}, {hi}) out of bounds for length {}",
            self.len
        );
        if lo >= hi {
            return 0;
        }
        let first = lo / WORD_BITS;
        let last = (hi - 1) / WORD_BITS;
        let head_mask = !0u64 << (lo % WORD_BITS);
        let tail_mask = tail_mask(hi - last * WORD_BITS);
        if first == last {
            return u64::from((self.words[first] & head_mask & tail_mask).count_ones());
        }
        let mut total = u64::from((self.words[first] & head_mask).count_ones());
        for &word in &self.words[first + 1..last] {
            total += u64::from(word.count_ones());
        }
        total + u64::from((self.words[last] & tail_mask).count_ones())
    }

    /// Iterates the indices of set bits in `[lo, hi)`, ascending.
    pub fn ones_in(&self, lo: usize, hi: usize) -> OnesIn<'_> {
        debug_assert!(
            lo <= hi && hi <= self.len,
            "range [{lo}, {hi}) out of bounds for length {}",
            self.len
        );
        if lo >= hi {
            return OnesIn {
                words: &self.words,
                current: 0,
                word_index: 0,
                last_word: 0,
                tail_mask: 0,
            };
        }
        let first = lo / WORD_BITS;
        let last = (hi - 1) / WORD_BITS;
        let mask = tail_mask(hi - last * WORD_BITS);
        let mut current = self.words[first] & (!0u64 << (lo % WORD_BITS));
        if first == last {
            current &= mask;
        }
        OnesIn {
            words: &self.words,
            current,
            word_index: first,
            last_word: last,
            tail_mask: mask,
        }
    }
}

/// Mask keeping the low `bits` bits of a word, `bits` in `1..=64`.
#[inline]
fn tail_mask(bits: usize) -> u64 {
    if bits == WORD_BITS {
        !0
    } else {
        (1u64 << bits) - 1
    }
}

fn try_words(num_words: usize, fill: u64) -> Result<Vec<u64>, PrimeSieveError> {
    let mut words = Vec::new();
    words
        .try_reserve_exact(num_words)
        .map_err(|source| PrimeSieveError::Allocation {
            what: "odd-candidate bitmap",
            bytes: num_words * std::mem::size_of::<u64>(),
            source,
        })?;
    words.resize(num_words, fill);
    Ok(words)
}

/// Iterator over set-bit indices in a half-open range, ascending.
///
/// Walks word by word; within a word, `trailing_zeros` plus clearing the
/// lowest set bit visits only set bits.
pub struct OnesIn<'a> {
    words: &'a [u64],
    current: u64,
    word_index: usize,
    last_word: usize,
    tail_mask: u64,
}

impl Iterator for OnesIn<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + tz);
            }
            if self.word_index >= self.last_word {
                return None;
            }
            self.word_index += 1;
            self.current = self.words[self.word_index];
            if self.word_index == self.last_word {
                self.current &= self.tail_mask;
            }
        }
    }
}
