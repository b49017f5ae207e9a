//! Permutation kernels.
//!
//! Two interchangeable implementations of the same sponge: `native` keeps
//! each lane as a scalar `u64`, `portable` splits each lane into four
//! 16-bit limbs for targets without reliable native 64-bit arithmetic.

pub mod constants;
pub mod native;
pub mod portable;
