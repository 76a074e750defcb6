//! FHD Digest Library
//!
//! FHD ("fast hash digest") is a 128-bit iterated-compression message
//! digest with a deterministic pseudo-random initial state. This crate
//! wraps the core algorithm with file and stream helpers plus the digest
//! manifest format used by the `fhd` command-line tool.
//!
//! **FHD is a checksum, not a cryptographic hash** - use it for integrity
//! fingerprints, not for anything adversarial.
//!
//! # Example
//!
//! ```rust
//! use fhd::{FhdStream, hash};
//!
//! // Single-shot hashing
//! let digest = hash(b"input data");
//! assert_eq!(hex::encode(digest), "4f38389e21cab2970bbc674d7bbe5283");
//!
//! // Incremental hashing over chunks of any size
//! let mut hasher = FhdStream::new();
//! hasher.update(b"input ");
//! hasher.update(b"data");
//! assert_eq!(hasher.finalize(), digest);
//! ```

// Re-export the core algorithm
pub use fhd_core as algorithm;

pub mod checkfile;
pub mod io;

// Convenience re-exports
pub use algorithm::{DIGEST_SIZE, Digest, Fhd, FhdStream, hash};
