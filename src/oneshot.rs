//! Public API Layer
//!
//! Parameter validation, capacity and suffix selection, delegation to the
//! dispatched permutation kernel.

use crate::engine::dispatcher;
use crate::kernels::constants::{rate_bytes, KECCAK_SUFFIX, SHAKE_SUFFIX};
use crate::types::DigestError;
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// =============================================================================
// FIXED-LENGTH DIGESTS
// =============================================================================

/// Compute a fixed-length Keccak digest.
///
/// `md_len` selects the variant and is the digest length in bits: 224, 256,
/// 384 or 512. Capacity is twice `md_len`, so the absorb rate is
/// `200 - md_len / 4` bytes.
///
/// Uses the original Keccak `0x01` suffix; output matches Ethereum's
/// `keccak256`, not FIPS-202 SHA-3.
///
/// # Errors
/// Returns [`DigestError::UnsupportedOutputSize`] for any other `md_len`.
///
/// # Example
/// ```rust
/// let digest = keccak1600::hash(b"abc", 256)?;
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), keccak1600::DigestError>(())
/// ```
pub fn hash(input: &[u8], md_len: usize) -> Result<Vec<u8>, DigestError> {
    match md_len {
        224 | 256 | 384 | 512 => {}
        _ => return Err(DigestError::UnsupportedOutputSize(md_len)),
    }

    let kernel = dispatcher::get_best_kernel();
    Ok(kernel(input, rate_bytes(md_len), KECCAK_SUFFIX, md_len / 8))
}

/// Compute a fixed-length Keccak digest, hex-encoded.
///
/// Lowercase, two characters per byte, no prefix: `md_len / 4` characters.
///
/// # Errors
/// Returns [`DigestError::UnsupportedOutputSize`] for any other `md_len`.
pub fn hash_hex(input: &[u8], md_len: usize) -> Result<String, DigestError> {
    hash(input, md_len).map(hex::encode)
}

// =============================================================================
// EXTENDABLE OUTPUT (SHAKE)
// =============================================================================

/// Compute SHAKE extendable output.
///
/// `security_level` is 128 or 256. `out_len` is the output length in bits
/// and must be a positive multiple of 8; the squeeze re-permutes between
/// rate-sized blocks, so any length is reachable. Uses the FIPS-202 `0x1F`
/// suffix, so outputs match standard SHAKE vectors.
///
/// # Errors
/// Returns [`DigestError::UnsupportedSecurityLevel`] for any other
/// `security_level` and [`DigestError::InvalidOutputLength`] when `out_len`
/// is zero or not a multiple of 8.
///
/// # Example
/// ```rust
/// let xof = keccak1600::shake(b"abc", 128, 512)?;
/// assert_eq!(xof.len(), 64);
/// # Ok::<(), keccak1600::DigestError>(())
/// ```
pub fn shake(input: &[u8], security_level: usize, out_len: usize) -> Result<Vec<u8>, DigestError> {
    match security_level {
        128 | 256 => {}
        _ => return Err(DigestError::UnsupportedSecurityLevel(security_level)),
    }
    if out_len == 0 || out_len % 8 != 0 {
        return Err(DigestError::InvalidOutputLength(out_len));
    }

    let kernel = dispatcher::get_best_kernel();
    Ok(kernel(
        input,
        rate_bytes(security_level),
        SHAKE_SUFFIX,
        out_len / 8,
    ))
}

/// Compute SHAKE extendable output, hex-encoded.
///
/// # Errors
/// Same conditions as [`shake`].
pub fn shake_hex(
    input: &[u8],
    security_level: usize,
    out_len: usize,
) -> Result<String, DigestError> {
    shake(input, security_level, out_len).map(hex::encode)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time (timing attack resistant).
///
/// Recomputes the digest of `input` and compares it against `expected`
/// without early exit. A length mismatch returns `false` immediately; the
/// digest length is public.
///
/// # Errors
/// Returns [`DigestError::UnsupportedOutputSize`] for an invalid `md_len`.
///
/// # Example
/// ```rust
/// let digest = keccak1600::hash(b"data", 256)?;
/// assert!(keccak1600::verify(b"data", 256, &digest)?);
/// assert!(!keccak1600::verify(b"tampered", 256, &digest)?);
/// # Ok::<(), keccak1600::DigestError>(())
/// ```
pub fn verify(input: &[u8], md_len: usize, expected: &[u8]) -> Result<bool, DigestError> {
    let computed = hash(input, md_len)?;
    if computed.len() != expected.len() {
        return Ok(false);
    }
    Ok(computed.as_slice().ct_eq(expected).into())
}
