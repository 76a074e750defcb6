//! Digest contexts and the stream drivers.
//!
//! Two context types share the same compression core and produce the same
//! digest for any input delivered in a single buffer; they differ only in
//! how the pending tail behaves across multiple `update` calls.

use crate::params::{BLOCK_SIZE, DIGEST_SIZE, STATE_WORDS};
use crate::primitives::compress;
use crate::rand::seed_words;

/// A 128-bit FHD digest.
pub type Digest = [u8; DIGEST_SIZE];

/// FHD digest context with the block-replace update rule.
///
/// `update` rewrites the pending tail from byte zero on every call, so a
/// context hashes exactly one logical buffer: call [`update`] once (or not
/// at all, for the empty message), then [`finalize`]. Input arriving in
/// more than one piece belongs in [`FhdStream`], which accumulates.
///
/// [`update`]: Fhd::update
/// [`finalize`]: Fhd::finalize
pub struct Fhd {
    /// Running digest accumulator, rewritten by each compression call.
    pub(crate) words: [u32; STATE_WORDS],
    /// Input tail deferred to finalization, zero-filled past the live bytes.
    pub(crate) pending: [u8; BLOCK_SIZE],
}

impl Fhd {
    /// Create a context in the fixed initial state.
    ///
    /// Initialization is deterministic: every context starts from the same
    /// four state words and a zeroed pending block.
    pub fn new() -> Self {
        Self {
            words: seed_words(),
            pending: [0u8; BLOCK_SIZE],
        }
    }

    /// Restore the fixed initial state, making a finalized context usable
    /// again.
    pub fn reset(&mut self) {
        self.words = seed_words();
        self.pending = [0u8; BLOCK_SIZE];
    }

    /// Absorb one input buffer.
    ///
    /// Whole 16-byte blocks are compressed immediately, except the last:
    /// when `data` ends exactly on a block boundary its final block is held
    /// back for [`finalize`] instead of being compressed here. The tail is
    /// written from byte zero and replaces whatever an earlier call left
    /// pending. Empty input is a no-op.
    ///
    /// [`finalize`]: Fhd::finalize
    pub fn update(&mut self, data: &[u8]) {
        debug_assert!(
            self.words != [0u32; STATE_WORDS],
            "digest context used after finalize without reset"
        );

        let full = data.len() / BLOCK_SIZE;
        let rem = data.len() % BLOCK_SIZE;

        if rem == 0 && full > 0 {
            let (blocks, last) = data.split_at((full - 1) * BLOCK_SIZE);
            for block in blocks.chunks_exact(BLOCK_SIZE) {
                compress(&mut self.words, block.try_into().unwrap());
            }
            self.pending.copy_from_slice(last);
        } else if rem > 0 {
            let (blocks, tail) = data.split_at(full * BLOCK_SIZE);
            for block in blocks.chunks_exact(BLOCK_SIZE) {
                compress(&mut self.words, block.try_into().unwrap());
            }
            self.pending[..rem].copy_from_slice(tail);
        }
    }

    /// Compress the pending block, return the digest, wipe the context.
    ///
    /// The digest is the four state words in little-endian order. After
    /// this call every field is zero; [`reset`] is required before reuse.
    ///
    /// [`reset`]: Fhd::reset
    pub fn finalize(&mut self) -> Digest {
        debug_assert!(
            self.words != [0u32; STATE_WORDS],
            "digest context used after finalize without reset"
        );

        compress(&mut self.words, &self.pending);

        let mut digest = [0u8; DIGEST_SIZE];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        self.words = [0u32; STATE_WORDS];
        self.pending = [0u8; BLOCK_SIZE];
        digest
    }
}

impl Default for Fhd {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental FHD hasher.
///
/// Accepts input in pieces of any size and produces the same digest as a
/// single [`Fhd::update`] over the concatenated bytes: a buffered block is
/// compressed only once a byte beyond it arrives, so the final block is
/// always the one held back for [`finalize`], whatever the chunking.
///
/// [`finalize`]: FhdStream::finalize
pub struct FhdStream {
    pub(crate) words: [u32; STATE_WORDS],
    pub(crate) buf: [u8; BLOCK_SIZE],
    pub(crate) filled: usize,
}

impl FhdStream {
    /// Create a hasher in the fixed initial state.
    pub fn new() -> Self {
        Self {
            words: seed_words(),
            buf: [0u8; BLOCK_SIZE],
            filled: 0,
        }
    }

    /// Restore the fixed initial state.
    pub fn reset(&mut self) {
        self.words = seed_words();
        self.buf = [0u8; BLOCK_SIZE];
        self.filled = 0;
    }

    /// Absorb input, accumulating across calls.
    pub fn update(&mut self, mut data: &[u8]) {
        debug_assert!(
            self.words != [0u32; STATE_WORDS],
            "digest context used after finalize without reset"
        );

        while !data.is_empty() {
            if self.filled == BLOCK_SIZE {
                compress(&mut self.words, &self.buf);
                self.filled = 0;
            }
            let take = (BLOCK_SIZE - self.filled).min(data.len());
            self.buf[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];
        }
    }

    /// Compress the buffered tail, return the digest, wipe the hasher.
    pub fn finalize(&mut self) -> Digest {
        debug_assert!(
            self.words != [0u32; STATE_WORDS],
            "digest context used after finalize without reset"
        );

        // bytes past `filled` may be stale from an earlier block
        self.buf[self.filled..].fill(0);
        compress(&mut self.words, &self.buf);

        let mut digest = [0u8; DIGEST_SIZE];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        self.words = [0u32; STATE_WORDS];
        self.buf = [0u8; BLOCK_SIZE];
        self.filled = 0;
        digest
    }
}

impl Default for FhdStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function for single-buffer hashing.
///
/// Creates a fresh context, digests `input`, and returns the result. For
/// repeated hashing prefer keeping a context and calling [`Fhd::reset`]
/// between messages.
pub fn hash(input: &[u8]) -> Digest {
    let mut ctx = Fhd::new();
    ctx.update(input);
    ctx.finalize()
}
