//! Shared types used across the library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified kernel function signature: `(input, rate_bytes, suffix, out_len) -> output`.
///
/// Both the native 64-bit kernel and the 16-bit limb fallback implement this
/// same signature so the dispatcher can swap them.
pub type SpongeFn = fn(&[u8], usize, u8, usize) -> Vec<u8>;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error returned when entry-point parameters are rejected.
///
/// Validation happens before any state is touched; the permutation and the
/// sponge itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// `md_len` passed to [`hash`](crate::hash) is not one of 224, 256, 384 or 512.
    UnsupportedOutputSize(usize),
    /// `security_level` passed to [`shake`](crate::shake) is not 128 or 256.
    UnsupportedSecurityLevel(usize),
    /// `out_len` passed to [`shake`](crate::shake) is zero or not a multiple of 8.
    InvalidOutputLength(usize),
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOutputSize(bits) => {
                write!(
                    f,
                    "unsupported output size: {bits} (expected 224, 256, 384 or 512)"
                )
            }
            Self::UnsupportedSecurityLevel(bits) => {
                write!(
                    f,
                    "unsupported security level: {bits} (expected 128 or 256)"
                )
            }
            Self::InvalidOutputLength(bits) => {
                write!(
                    f,
                    "invalid output length: {bits} (expected a positive multiple of 8)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for DigestError {}
