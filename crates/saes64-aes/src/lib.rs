//! AES-128 assembled from `saes64` functional-unit invocations.
//!
//! The unit computes one key-schedule step or one half-state round step per
//! call; this crate is the surrounding software loop that sequences those
//! calls into key expansion and whole-block encryption/decryption. It is
//! both a usage reference and the end-to-end validation harness: everything
//! here is checked against the `aes-prims` reference cipher.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use saes64::{Opcode, RconIndex, Saes64};

/// Expanded AES-128 round keys as 64-bit register pairs, low half first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys([[u64; 2]; 11]);

impl RoundKeys {
    /// Returns the register pair for the requested round (0..=10).
    #[inline]
    pub fn pair(&self, round: usize) -> [u64; 2] {
        self.0[round]
    }
}

/// Expands a 128-bit key by driving the unit's KS1/KS2 operations.
pub fn expand_key(unit: &Saes64, key: &[u8; 16]) -> RoundKeys {
    let mut lo = u64::from_le_bytes(key[..8].try_into().expect("half length is eight"));
    let mut hi = u64::from_le_bytes(key[8..].try_into().expect("half length is eight"));

    let mut rk = [[0u64; 2]; 11];
    rk[0] = [lo, hi];
    for round in 1..=10 {
        let idx = RconIndex::new(round as u8 - 1).expect("round selector fits in four bits");
        let temp = unit.execute(Opcode::Ks1(idx), hi, 0);
        // KS2 combines against the swapped half packing, so rotate the
        // incoming register pair halves into place.
        lo = unit.execute(Opcode::Ks2, temp, lo.rotate_left(32));
        hi = unit.execute(Opcode::Ks2, lo, hi.rotate_left(32));
        rk[round] = [lo, hi];
    }
    RoundKeys(rk)
}

/// Encrypts one block: initial AddRoundKey in software, nine ENCSM rounds
/// with the operand pair swapped per half, and a final ENCS round.
pub fn encrypt_block(unit: &Saes64, keys: &RoundKeys, block: &[u8; 16]) -> [u8; 16] {
    let (mut lo, mut hi) = split_block(block);
    let [k_lo, k_hi] = keys.pair(0);
    lo ^= k_lo;
    hi ^= k_hi;

    for round in 1..10 {
        let [k_lo, k_hi] = keys.pair(round);
        let next_lo = unit.execute(Opcode::Encsm, hi, lo) ^ k_lo;
        let next_hi = unit.execute(Opcode::Encsm, lo, hi) ^ k_hi;
        lo = next_lo;
        hi = next_hi;
    }
    let [k_lo, k_hi] = keys.pair(10);
    let final_lo = unit.execute(Opcode::Encs, hi, lo) ^ k_lo;
    let final_hi = unit.execute(Opcode::Encs, lo, hi) ^ k_hi;

    join_block(final_lo, final_hi)
}

/// Decrypts one block via the equivalent inverse cipher: DECSM rounds
/// against IMIX-transformed round keys, then a final DECS round.
///
/// Requires a unit whose decrypt datapath is present; under
/// [`Saes64::encrypt_only`] the gated operations contribute their defined
/// all-zero results and the output is not a decryption.
pub fn decrypt_block(unit: &Saes64, keys: &RoundKeys, block: &[u8; 16]) -> [u8; 16] {
    let (mut lo, mut hi) = split_block(block);
    let [k_lo, k_hi] = keys.pair(10);
    lo ^= k_lo;
    hi ^= k_hi;

    for round in (1..10).rev() {
        let [k_lo, k_hi] = keys.pair(round);
        let next_lo = unit.execute(Opcode::Decsm, hi, lo) ^ unit.execute(Opcode::Imix, k_lo, 0);
        let next_hi = unit.execute(Opcode::Decsm, lo, hi) ^ unit.execute(Opcode::Imix, k_hi, 0);
        lo = next_lo;
        hi = next_hi;
    }
    let [k_lo, k_hi] = keys.pair(0);
    let final_lo = unit.execute(Opcode::Decs, hi, lo) ^ k_lo;
    let final_hi = unit.execute(Opcode::Decs, lo, hi) ^ k_hi;

    join_block(final_lo, final_hi)
}

fn split_block(block: &[u8; 16]) -> (u64, u64) {
    let lo = u64::from_le_bytes(block[..8].try_into().expect("half length is eight"));
    let hi = u64::from_le_bytes(block[8..].try_into().expect("half length is eight"));
    (lo, hi)
}

fn join_block(lo: u64, hi: u64) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..8].copy_from_slice(&lo.to_le_bytes());
    block[8..].copy_from_slice(&hi.to_le_bytes());
    block
}
