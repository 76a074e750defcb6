//! Streaming digest helpers for readers and files.
//!
//! Everything here goes through [`FhdStream`], so the digest of a file is
//! independent of how the bytes happened to be chunked by the reader.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use fhd_core::{Digest, FhdStream};

/// Read buffer size for streaming digests
const READ_CHUNK: usize = 64 * 1024;

/// Digest everything a reader yields.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = FhdStream::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hasher.finalize())
}

/// Digest a file's contents.
pub fn hash_file<P: AsRef<Path>>(path: P) -> io::Result<Digest> {
    hash_reader(File::open(path)?)
}
