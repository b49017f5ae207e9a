#![cfg_attr(not(feature = "std"), no_std)]

//! # keccak1600
//!
//! Keccak-f[1600] sponge construction: fixed-length Keccak-224/256/384/512
//! digests and the SHAKE128/SHAKE256 extendable-output functions.
//!
//! Fixed digests use the original Keccak submission padding (domain suffix
//! `0x01`), not the FIPS-202 SHA-3 suffix `0x06`. Outputs therefore match
//! the Keccak submission vectors and Ethereum's `keccak256`, NOT published
//! SHA-3 vectors. SHAKE uses the standard `0x1F` suffix and does match
//! FIPS-202 SHAKE vectors.
//!
//! # Usage
//! ```rust
//! // 1. Fixed-length digest
//! let digest = keccak1600::hash(b"abc", 256)?;
//! assert_eq!(digest.len(), 32);
//!
//! // 2. Hex-encoded digest
//! let hex = keccak1600::hash_hex(b"abc", 256)?;
//! assert_eq!(
//!     hex,
//!     "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
//! );
//!
//! // 3. Extendable output (out_len in bits)
//! let xof = keccak1600::shake(b"abc", 128, 512)?;
//! assert_eq!(xof.len(), 64);
//! # Ok::<(), keccak1600::DigestError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
// Re-export internal kernels for cross-validation tests, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test use only
mod oneshot;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use oneshot::{hash, hash_hex, shake, shake_hex, verify};
pub use types::DigestError;

/// Returns the name of the permutation backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
