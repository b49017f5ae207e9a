//! Kernel Dispatcher
//!
//! Selects the permutation kernel. Rust guarantees `u64`, so the scalar
//! kernel is always available and the choice is a compile-time fact rather
//! than a CPU probe: the `portable` feature forces the 16-bit limb fallback,
//! everything else gets native 64-bit lanes.

use crate::kernels;
use crate::types::SpongeFn;

/// Returns the sponge kernel for this build.
#[must_use]
pub fn get_best_kernel() -> SpongeFn {
    if cfg!(feature = "portable") {
        kernels::portable::oneshot
    } else {
        kernels::native::oneshot
    }
}

/// Returns the name of the active permutation backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    if cfg!(feature = "portable") {
        "portable (16-bit limbs)"
    } else {
        "native (64-bit lanes)"
    }
}
