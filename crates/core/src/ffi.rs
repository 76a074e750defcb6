//! C FFI bindings

use crate::params::DIGEST_SIZE;
use crate::{Digest, Fhd};
use core::slice;

/// Opaque digest context handle for FFI
pub struct FhdCtx {
    inner: Fhd,
}

/// Create a new digest context
/// Returns a pointer to the context (caller must free with fhd_free)
#[unsafe(no_mangle)]
pub extern "C" fn fhd_new() -> *mut FhdCtx {
    let ctx = Box::new(FhdCtx { inner: Fhd::new() });
    Box::into_raw(ctx)
}

/// Free a digest context
#[unsafe(no_mangle)]
pub extern "C" fn fhd_free(ctx: *mut FhdCtx) {
    if !ctx.is_null() {
        unsafe {
            let _ = Box::from_raw(ctx);
        }
    }
}

/// Restore a context to the fixed initial state
#[unsafe(no_mangle)]
pub extern "C" fn fhd_reset(ctx: *mut FhdCtx) {
    if !ctx.is_null() {
        unsafe {
            (*ctx).inner.reset();
        }
    }
}

/// Absorb one input buffer
/// - ctx: pointer from fhd_new()
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
///
/// The pending tail is replaced on every call; a context digests one
/// logical buffer between reset and final.
#[unsafe(no_mangle)]
pub extern "C" fn fhd_update(ctx: *mut FhdCtx, input: *const u8, input_len: usize) {
    if ctx.is_null() || (input.is_null() && input_len != 0) {
        return;
    }

    unsafe {
        let ctx = &mut *ctx;
        let input_slice = if input_len == 0 {
            &[]
        } else {
            slice::from_raw_parts(input, input_len)
        };
        ctx.inner.update(input_slice);
    }
}

/// Finalize and write the digest
/// - ctx: pointer from fhd_new(); wiped by this call, reusable after fhd_reset
/// - output: pointer to a 16-byte buffer for the digest
#[unsafe(no_mangle)]
pub extern "C" fn fhd_final(ctx: *mut FhdCtx, output: *mut u8) {
    if ctx.is_null() || output.is_null() {
        return;
    }

    unsafe {
        let ctx = &mut *ctx;
        let digest: Digest = ctx.inner.finalize();

        let output_slice = slice::from_raw_parts_mut(output, DIGEST_SIZE);
        output_slice.copy_from_slice(&digest);
    }
}

/// One-shot digest of a single buffer
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
/// - output: pointer to a 16-byte buffer for the digest
#[unsafe(no_mangle)]
pub extern "C" fn fhd_hash(input: *const u8, input_len: usize, output: *mut u8) {
    if (input.is_null() && input_len != 0) || output.is_null() {
        return;
    }

    unsafe {
        let input_slice = if input_len == 0 {
            &[]
        } else {
            slice::from_raw_parts(input, input_len)
        };
        let digest = crate::hash(input_slice);

        let output_slice = slice::from_raw_parts_mut(output, DIGEST_SIZE);
        output_slice.copy_from_slice(&digest);
    }
}
