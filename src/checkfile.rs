//! Digest manifest parsing and formatting.
//!
//! A manifest is the classic checksum-list format: one entry per line,
//! `<32 hex digits><two spaces><path>`. Blank lines and lines starting
//! with `#` are ignored.

use std::fs;
use std::path::Path;

use fhd_core::{DIGEST_SIZE, Digest};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("line {line}: malformed entry (expected '<digest>  <path>')")]
    MalformedLine { line: usize },

    #[error("line {line}: invalid digest: {source}")]
    InvalidDigest {
        line: usize,
        source: hex::FromHexError,
    },

    #[error("line {line}: digest has wrong length (expected {expected} hex digits)")]
    WrongLength { line: usize, expected: usize },

    #[error("file I/O error: {0}")]
    FileError(#[from] std::io::Error),
}

/// One manifest entry: a hex digest and the path it was computed over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Lowercase hex digest
    pub fhd: String,
    /// Path the digest was computed over
    pub path: String,
}

impl Entry {
    /// Build an entry from a computed digest.
    pub fn new(digest: &Digest, path: impl Into<String>) -> Self {
        Self {
            fhd: hex::encode(digest),
            path: path.into(),
        }
    }

    /// Decode the hex digest field.
    ///
    /// Returns `None` when the field does not hold exactly 16 hex-encoded
    /// bytes; entries produced by [`parse`] or [`Entry::new`] always decode.
    pub fn digest(&self) -> Option<Digest> {
        let bytes = hex::decode(&self.fhd).ok()?;
        bytes.try_into().ok()
    }
}

/// Parse a manifest, validating every digest.
///
/// Error values carry 1-based line numbers pointing at the offending line.
pub fn parse(text: &str) -> Result<Vec<Entry>, ManifestError> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (digest_hex, path) = trimmed
            .split_once("  ")
            .ok_or(ManifestError::MalformedLine { line })?;

        let bytes = hex::decode(digest_hex)
            .map_err(|source| ManifestError::InvalidDigest { line, source })?;
        if bytes.len() != DIGEST_SIZE {
            return Err(ManifestError::WrongLength {
                line,
                expected: DIGEST_SIZE * 2,
            });
        }

        entries.push(Entry {
            fhd: digest_hex.to_ascii_lowercase(),
            path: path.to_string(),
        });
    }

    Ok(entries)
}

/// Read and parse a manifest file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, ManifestError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Format an entry the way [`parse`] expects it back.
pub fn format_entry(digest: &Digest, path: &str) -> String {
    format!("{}  {}", hex::encode(digest), path)
}
