//! FHD Algorithm Parameters
//!
//! These values define the digest's identity: changing any of them
//! produces a different hash function, not a tuned variant of this one.

/// Digest output size in bytes (128 bits)
pub const DIGEST_SIZE: usize = 16;

/// Input block size in bytes consumed by one compression call
pub const BLOCK_SIZE: usize = 16;

/// Number of 32-bit words in the running state
pub const STATE_WORDS: usize = 4;

/// Outer mixing rounds per compressed block
pub const ROUNDS: usize = 35;

/// Generator outputs discarded before each initial state word is drawn
pub const SEED_WARMUP: usize = 0x1000;

/// Algorithm version
pub const VERSION: u8 = 1;
