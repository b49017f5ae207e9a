//! Portable kernel: four 16-bit limbs per lane.
//!
//! For targets where native 64-bit integer arithmetic is unavailable or
//! treats high-bit values as floating point. Produces byte-identical output
//! to the native kernel; `tests/consistency.rs` cross-validates the two
//! over every rate boundary and parameter set.

use self::utils::Lane;
use crate::engine::sponge::{self, LaneState};
use crate::kernels::constants::{PI, RC, RHO, STATE_LANES};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

mod utils;

// =============================================================================
// ROUND CONSTANTS
// =============================================================================

/// Iota constants pre-split into limbs. The split runs at compile time, so
/// the round loop itself never touches 64-bit arithmetic.
const RC_LANES: [Lane; 24] = split_rc();

const fn split_rc() -> [Lane; 24] {
    let mut out = [Lane::zero(); 24];
    let mut i = 0;
    while i < 24 {
        let rc = RC[i];
        out[i] = Lane {
            w: [
                (rc >> 48) as u16,
                (rc >> 32) as u16,
                (rc >> 16) as u16,
                rc as u16,
            ],
        };
        i += 1;
    }
    out
}

// =============================================================================
// PERMUTATION
// =============================================================================

/// Keccak-f[1600] over limb lanes. Mirrors the native kernel step for step.
fn f1600(state: &mut [Lane; STATE_LANES]) {
    for rc in RC_LANES {
        // Theta
        let mut parity = [Lane::zero(); 5];
        for x in 0..5 {
            parity[x] = state[x]
                .xor(state[x + 5])
                .xor(state[x + 10])
                .xor(state[x + 15])
                .xor(state[x + 20]);
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5].xor(parity[(x + 1) % 5].rotl(1));
            for y in 0..5 {
                state[x + 5 * y] = state[x + 5 * y].xor(d);
            }
        }

        // Rho and pi
        let mut carry = state[1];
        for i in 0..24 {
            let dst = PI[i];
            let next = state[dst];
            state[dst] = carry.rotl(RHO[i]);
            carry = next;
        }

        // Chi
        for y in 0..5 {
            let base = 5 * y;
            let row = [
                state[base],
                state[base + 1],
                state[base + 2],
                state[base + 3],
                state[base + 4],
            ];
            for x in 0..5 {
                state[base + x] = row[x].xor_andn(row[(x + 1) % 5], row[(x + 2) % 5]);
            }
        }

        // Iota
        state[0] = state[0].xor(rc);
    }
}

// =============================================================================
// SPONGE STATE
// =============================================================================

/// Sponge state backed by the limb kernel.
struct PortableState([Lane; STATE_LANES]);

impl Default for PortableState {
    fn default() -> Self {
        Self([Lane::zero(); STATE_LANES])
    }
}

impl LaneState for PortableState {
    fn absorb_block(&mut self, block: &[u8]) {
        for (lane, chunk) in self.0.iter_mut().zip(block.chunks_exact(8)) {
            *lane = lane.xor(Lane::from_le_bytes(chunk));
        }
        f1600(&mut self.0);
    }

    fn permute(&mut self) {
        f1600(&mut self.0);
    }

    fn extract(&self, out: &mut [u8]) {
        for (chunk, lane) in out.chunks_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes()[..chunk.len()]);
        }
    }
}

// =============================================================================
// PUBLIC ENTRY POINT
// =============================================================================

/// Single-shot sponge over 16-bit limb lanes.
pub fn oneshot(input: &[u8], rate: usize, suffix: u8, out_len: usize) -> Vec<u8> {
    sponge::run::<PortableState>(input, rate, suffix, out_len)
}

// =============================================================================
// TESTS
// =============================================================================
