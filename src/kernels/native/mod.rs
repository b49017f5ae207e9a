//! Native kernel: one scalar `u64` per lane.

use crate::engine::sponge::{self, LaneState};
use crate::kernels::constants::{PI, RC, RHO, STATE_LANES};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// PERMUTATION
// =============================================================================

/// Keccak-f[1600] over scalar 64-bit lanes.
///
/// Five steps per round: theta mixes column parities into every lane,
/// rho and pi rotate and scatter the 24 off-diagonal lanes in a single
/// traversal, chi is the row-local nonlinearity, iota injects the round
/// constant into lane 0.
pub fn f1600(state: &mut [u64; STATE_LANES]) {
    for &rc in &RC {
        // Theta
        let mut parity = [0u64; 5];
        for x in 0..5 {
            parity[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // Rho and pi: carry one lane through the cycle; lane 0 is untouched.
        let mut carry = state[1];
        for i in 0..24 {
            let dst = PI[i];
            let next = state[dst];
            state[dst] = carry.rotate_left(RHO[i]);
            carry = next;
        }

        // Chi: each row is buffered before writeback (nonlinear step).
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
                state[base + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // Iota
        state[0] ^= rc;
    }
}

// =============================================================================
// SPONGE STATE
// =============================================================================

/// Sponge state backed by the scalar kernel.
struct NativeState([u64; STATE_LANES]);

impl Default for NativeState {
    fn default() -> Self {
        Self([0; STATE_LANES])
    }
}

impl LaneState for NativeState {
    fn absorb_block(&mut self, block: &[u8]) {
        for (lane, chunk) in self.0.iter_mut().zip(block.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(bytes);
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

/// Single-shot sponge over scalar 64-bit lanes.
pub fn oneshot(input: &[u8], rate: usize, suffix: u8, out_len: usize) -> Vec<u8> {
    sponge::run::<NativeState>(input, rate, suffix, out_len)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Zero-state vectors from the Keccak code package.
    #[test]
    fn f1600_zero_state() {
        let mut state = [0u64; STATE_LANES];

        f1600(&mut state);
        assert_eq!(
            state,
            [
                0xF125_8F79_40E1_DDE7,
                0x84D5_CCF9_33C0_478A,
                0xD598_261E_A65A_A9EE,
                0xBD15_4730_6F80_494D,
                0x8B28_4E05_6253_D057,
                0xFF97_A42D_7F8E_6FD4,
                0x90FE_E5A0_A446_47C4,
                0x8C5B_DA0C_D619_2E76,
                0xAD30_A6F7_1B19_059C,
                0x3093_5AB7_D08F_FC64,
                0xEB5A_A93F_2317_D635,
                0xA9A6_E626_0D71_2103,
                0x81A5_7C16_DBCF_555F,
                0x43B8_31CD_0347_C826,
                0x01F2_2F1A_11A5_569F,
                0x05E5_635A_21D9_AE61,
                0x64BE_FEF2_8CC9_70F2,
                0x6136_7095_7BC4_6611,
                0xB87C_5A55_4FD0_0ECB,
                0x8C3E_E88A_1CCF_32C8,
                0x940C_7922_AE3A_2614,
                0x1841_F924_A2C5_09E4,
                0x16F5_3526_E704_65C2,
                0x75F6_44E9_7F30_A13B,
                0xEAF1_FF7B_5CEC_A249,
            ]
        );

        f1600(&mut state);
        assert_eq!(
            state,
            [
                0x2D5C_954D_F96E_CB3C,
                0x6A33_2CD0_7057_B56D,
                0x093D_8D12_70D7_6B6C,
                0x8A20_D9B2_5569_D094,
                0x4F9C_4F99_E5E7_F156,
                0xF957_B9A2_DA65_FB38,
                0x8577_3DAE_1275_AF0D,
                0xFAF4_F247_C3D8_10F7,
                0x1F1B_9EE6_F79A_8759,
                0xE4FE_CC0F_EE98_B425,
                0x68CE_61B6_B9CE_68A1,
                0xDEEA_66C4_BA8F_974F,
                0x33C4_3D83_6EAF_B1F5,
                0xE006_5404_2719_DBD9,
                0x7CF8_A9F0_0983_1265,
                0xFD54_49A6_BF17_4743,
                0x97DD_AD33_D899_4B40,
                0x48EA_D5FC_5D0B_E774,
                0xE3B8_C8EE_55B7_B03C,
                0x91A0_226E_649E_42E9,
                0x900E_3129_E7BA_DD7B,
                0x202A_9EC5_FAA3_CCE8,
                0x5B34_0246_4E1C_3DB6,
                0x609F_4E62_A44C_1059,
                0x20D0_6CD2_6A8F_BF5C,
            ]
        );
    }

    #[test]
    fn extract_truncates_final_lane() {
        let state = NativeState([0x0807_0605_0403_0201; STATE_LANES]);
        let mut out = [0u8; 11];
        state.extract(&mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3]);
    }
}
