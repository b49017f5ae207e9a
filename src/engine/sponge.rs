//! Sponge construction shared by both permutation kernels.
//!
//! Absorb XORs rate-sized blocks into the state and permutes, pad10*1 with
//! a domain suffix closes the input, squeeze emits lanes little-endian and
//! re-permutes between output blocks for extendable output.

use crate::kernels::constants::STATE_BYTES;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// A 25-lane Keccak state with a kernel-specific lane representation.
pub trait LaneState: Default {
    /// XOR a block into the leading lanes as little-endian 64-bit words,
    /// then permute. `block.len()` is a multiple of 8 and at most the rate.
    fn absorb_block(&mut self, block: &[u8]);

    /// Apply Keccak-f[1600] to the state.
    fn permute(&mut self);

    /// Copy the leading `out.len()` bytes of the state into `out`, lane by
    /// lane, little-endian. The final lane may be emitted partially.
    fn extract(&self, out: &mut [u8]);
}

/// Single-shot sponge: absorb `input`, pad, squeeze `out_len` bytes.
pub fn run<S: LaneState>(input: &[u8], rate: usize, suffix: u8, out_len: usize) -> Vec<u8> {
    debug_assert!(rate % 8 == 0 && rate < STATE_BYTES);

    let mut state = S::default();

    let mut blocks = input.chunks_exact(rate);
    for block in blocks.by_ref() {
        state.absorb_block(block);
    }
    let tail = blocks.remainder();

    // pad10*1 with the domain suffix. When the tail fills all but one byte,
    // the suffix lands on position rate - 1 and the final 1 bit is OR-ed
    // into the same byte, merging to suffix | 0x80.
    let mut last = [0u8; STATE_BYTES];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = suffix;
    last[rate - 1] |= 0x80;
    state.absorb_block(&last[..rate]);

    let mut out = vec![0u8; out_len];
    let mut offset = 0;
    loop {
        let take = rate.min(out_len - offset);
        state.extract(&mut out[offset..offset + take]);
        offset += take;
        if offset == out_len {
            break;
        }
        state.permute();
    }
    out
}
