//! # FHD Core Algorithm
//!
//! FHD ("fast hash digest") is a fixed-output, iterated-compression message
//! digest: it consumes a byte sequence of any length and produces a
//! deterministic 128-bit digest through block chaining with a custom
//! 35-round compression function.
//!
//! **FHD is a checksum, not a cryptographic hash.** Nothing here claims
//! collision resistance or side-channel hardening; use it where a fast,
//! reproducible 128-bit fingerprint is enough.
//!
//! ## Algorithm Parameters
//!
//! - Four 32-bit state words, seeded deterministically from a fixed
//!   xorshift stream (no entropy input)
//! - 16-byte input blocks; the final block is always deferred to
//!   finalization and zero-padded
//! - 35 mixing rounds per block with four nonlinear mixers and
//!   data-dependent inner repetition
//!
//! ## Contexts
//!
//! [`Fhd`] is the raw context: its `update` replaces the pending tail on
//! every call, so it digests one logical buffer per finalize. [`FhdStream`]
//! accumulates across calls and yields the same digest for any chunking of
//! the same bytes.
//!
//! ## Example
//!
//! ```rust
//! use fhd_core::{FhdStream, hash};
//!
//! // Single-shot hashing
//! let digest = hash(b"input data");
//! assert_eq!(digest.len(), 16);
//!
//! // Incremental hashing, chunking-independent
//! let mut hasher = FhdStream::new();
//! hasher.update(b"input ");
//! hasher.update(b"data");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments (the algorithm is pure
//! integer arithmetic over fixed-size buffers):
//!
//! ```toml
//! [dependencies]
//! fhd-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod fhd;
mod params;
mod primitives;
mod rand;

#[cfg(feature = "std")]
mod ffi;

pub use fhd::{Digest, Fhd, FhdStream, hash};
pub use params::*;

#[cfg(test)]
mod tests;
