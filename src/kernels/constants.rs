//! Keccak-f[1600] constant tables.
//!
//! All three tables are fixed constants of Keccak-f[1600]. The
//! round constants come from a degree-8 LFSR over GF(2), one bit placed at
//! each position `2^j - 1` of lane 0. The rotation offsets and lane
//! destinations are the rho and pi step mappings flattened to the linear
//! lane index `x + 5y`, in the order the combined rho+pi traversal visits
//! them (starting from lane 1; lane 0 is a fixed point of both steps).

// =============================================================================
// STATE GEOMETRY
// =============================================================================

/// Number of permutation rounds.
pub const ROUNDS: usize = 24;

/// 5x5 lanes of 64 bits: 1600 bits of state.
pub const STATE_LANES: usize = 25;

/// State size in bytes.
pub const STATE_BYTES: usize = 200;

// =============================================================================
// DOMAIN SUFFIXES
// =============================================================================

/// Original Keccak submission padding (pre-FIPS-202).
///
/// Matches the Keccak submission vectors and Ethereum's `keccak256`;
/// deliberately NOT the SHA-3 suffix `0x06`.
pub const KECCAK_SUFFIX: u8 = 0x01;

/// FIPS-202 SHAKE padding.
pub const SHAKE_SUFFIX: u8 = 0x1F;

// =============================================================================
// RATE
// =============================================================================

/// Absorb/squeeze rate in bytes for a security level in bits.
///
/// Capacity is twice the security level, so `r = 200 - bits / 4`.
pub const fn rate_bytes(security_bits: usize) -> usize {
    STATE_BYTES - security_bits / 4
}

// =============================================================================
// ROUND TABLES
// =============================================================================

/// Iota round constants, one per round.
pub const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, in traversal order.
pub const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane destinations (linear index `x + 5y`), in traversal order.
pub const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
