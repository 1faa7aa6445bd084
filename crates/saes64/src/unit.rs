//! The functional unit: per-opcode datapath and result selection.

use aes_prims::{inv_mix_column, inv_sbox, mix_column, sbox};

use crate::opcode::{Opcode, RconIndex};
use crate::rcon::round_constant;
use crate::router::{shift_rows_fwd, shift_rows_inv};

/// A single-cycle 64-bit AES functional unit.
///
/// The unit is stateless: [`Saes64::execute`] is a pure function of its
/// arguments, safe to call concurrently without synchronization. The only
/// configuration, fixed at construction, is whether the decrypt datapath
/// (inverse S-box and inverse column mix) exists; see
/// [`Saes64::encrypt_only`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Saes64 {
    decrypt: bool,
}

impl Saes64 {
    /// Builds a unit with both the encrypt and decrypt datapaths present.
    pub const fn new() -> Self {
        Self { decrypt: true }
    }

    /// Builds a unit without the inverse substitution and inverse mix
    /// units. [`Opcode::Decs`], [`Opcode::Decsm`], and [`Opcode::Imix`]
    /// then deterministically return zero; this is defined output, not a
    /// fault.
    pub const fn encrypt_only() -> Self {
        Self { decrypt: false }
    }

    /// Whether the decrypt datapath is present.
    pub const fn decrypt_enabled(&self) -> bool {
        self.decrypt
    }

    /// Executes one operation on an operand pair and returns the 64-bit
    /// result.
    ///
    /// For the cipher operations `op1` supplies the neighboring two state
    /// columns and `op2` the two columns being advanced; the result is the
    /// advanced form of `op2`'s columns. The key-schedule operations read
    /// the operand halves directly. Completion is synchronous with the
    /// call; there is no multi-cycle case.
    pub fn execute(&self, op: Opcode, op1: u64, op2: u64) -> u64 {
        match op {
            Opcode::Ks1(idx) => ks1(op1, idx),
            Opcode::Ks2 => ks2(op1, op2),
            Opcode::Imix => {
                if self.decrypt {
                    inv_mix_halves(op1)
                } else {
                    0
                }
            }
            Opcode::Encs => sub_bytes_fwd(shift_rows_fwd(op1, op2)),
            Opcode::Encsm => mix_halves(sub_bytes_fwd(shift_rows_fwd(op1, op2))),
            Opcode::Decs => {
                if self.decrypt {
                    sub_bytes_inv(shift_rows_inv(op1, op2))
                } else {
                    0
                }
            }
            Opcode::Decsm => {
                if self.decrypt {
                    inv_mix_halves(sub_bytes_inv(shift_rows_inv(op1, op2)))
                } else {
                    // Inverse mix of the zeroed intermediate is itself zero.
                    0
                }
            }
        }
    }
}

impl Default for Saes64 {
    fn default() -> Self {
        Self::new()
    }
}

/// First key-schedule step on the upper word of `op1`: rotate by one byte
/// position unless the selector carries the sentinel, substitute, XOR the
/// round constant into the least significant byte, and duplicate the word
/// into both result halves.
fn ks1(op1: u64, idx: RconIndex) -> u64 {
    let word = (op1 >> 32) as u32;
    let selected = if idx.disables_rotation() {
        word
    } else {
        word.rotate_right(8)
    };
    let substituted = sub_word_fwd(selected) ^ u32::from(round_constant(idx));
    (u64::from(substituted) << 32) | u64::from(substituted)
}

/// Second key-schedule step: pure XOR chaining of the operand halves.
fn ks2(op1: u64, op2: u64) -> u64 {
    let u1 = (op1 >> 32) as u32;
    let u2 = (op2 >> 32) as u32;
    let l2 = op2 as u32;
    let lower = u1 ^ u2;
    let upper = lower ^ l2;
    (u64::from(upper) << 32) | u64::from(lower)
}

fn sub_word_fwd(word: u32) -> u32 {
    let [b0, b1, b2, b3] = word.to_le_bytes();
    u32::from_le_bytes([sbox(b0), sbox(b1), sbox(b2), sbox(b3)])
}

/// All eight forward substitutions of one invocation.
fn sub_bytes_fwd(value: u64) -> u64 {
    let mut bytes = value.to_le_bytes();
    for byte in bytes.iter_mut() {
        *byte = sbox(*byte);
    }
    u64::from_le_bytes(bytes)
}

/// All eight inverse substitutions of one invocation.
fn sub_bytes_inv(value: u64) -> u64 {
    let mut bytes = value.to_le_bytes();
    for byte in bytes.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    u64::from_le_bytes(bytes)
}

fn mix_halves(value: u64) -> u64 {
    let lo = mix_column(value as u32);
    let hi = mix_column((value >> 32) as u32);
    (u64::from(hi) << 32) | u64::from(lo)
}

fn inv_mix_halves(value: u64) -> u64 {
    let lo = inv_mix_column(value as u32);
    let hi = inv_mix_column((value >> 32) as u32);
    (u64::from(hi) << 32) | u64::from(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn idx(value: u8) -> RconIndex {
        RconIndex::new(value).unwrap()
    }

    #[test]
    fn ks1_zero_operand_vector() {
        // sbox(0) = 0x63 in every lane, round constant 0x01 into the low
        // byte, duplicated into both halves.
        let unit = Saes64::new();
        let result = unit.execute(Opcode::Ks1(idx(0)), 0, 0);
        assert_eq!(result, 0x6363_6362_6363_6362);
    }

    #[test]
    fn ks1_rotation_applies_unless_sentinel() {
        let unit = Saes64::new();
        let op1 = 0x0000_0001_0000_0000u64; // upper word 0x00000001

        // Rotated: 0x00000001 -> 0x01000000, lanes sbox(0,0,0,1).
        let rotated = unit.execute(Opcode::Ks1(idx(0)), op1, 0);
        assert_eq!(rotated, 0x7c63_6362_7c63_6362);

        // Sentinel: no rotation, lanes sbox(1,0,0,0), zero constant.
        let plain = unit.execute(Opcode::Ks1(RconIndex::ROTATE_DISABLE), op1, 0);
        assert_eq!(plain, 0x6363_637c_6363_637c);
    }

    #[test]
    fn ks1_reserved_selectors_inject_zero() {
        let unit = Saes64::new();
        for value in 11..16u8 {
            let result = unit.execute(Opcode::Ks1(idx(value)), 0, 0);
            assert_eq!(result, 0x6363_6363_6363_6363);
        }
    }

    #[test]
    fn ks2_is_pure_xor_combination() {
        let unit = Saes64::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let op1: u64 = rng.gen();
            let op2: u64 = rng.gen();
            let result = unit.execute(Opcode::Ks2, op1, op2);
            let u1 = op1 >> 32;
            let u2 = op2 >> 32;
            let l2 = op2 & 0xffff_ffff;
            assert_eq!(result >> 32, u1 ^ u2 ^ l2);
            assert_eq!(result & 0xffff_ffff, u1 ^ u2);
        }
    }

    #[test]
    fn encs_zero_state_saturates_with_sbox_fixed_point() {
        let unit = Saes64::new();
        assert_eq!(unit.execute(Opcode::Encs, 0, 0), 0x6363_6363_6363_6363);
    }

    #[test]
    fn decs_undoes_encs() {
        let unit = Saes64::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let lo: u64 = rng.gen();
            let hi: u64 = rng.gen();
            let enc_lo = unit.execute(Opcode::Encs, hi, lo);
            let enc_hi = unit.execute(Opcode::Encs, lo, hi);
            assert_eq!(unit.execute(Opcode::Decs, enc_hi, enc_lo), lo);
            assert_eq!(unit.execute(Opcode::Decs, enc_lo, enc_hi), hi);
        }
    }

    #[test]
    fn encsm_is_encs_plus_column_mix() {
        let unit = Saes64::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let lo: u64 = rng.gen();
            let hi: u64 = rng.gen();
            let sub = unit.execute(Opcode::Encs, hi, lo);
            let mixed = unit.execute(Opcode::Encsm, hi, lo);
            assert_eq!(mixed as u32, mix_column(sub as u32));
            assert_eq!((mixed >> 32) as u32, mix_column((sub >> 32) as u32));
        }
    }

    #[test]
    fn encsm_round_trips_through_imix_and_decs() {
        let unit = Saes64::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let lo: u64 = rng.gen();
            let hi: u64 = rng.gen();
            let enc_lo = unit.execute(Opcode::Encsm, hi, lo);
            let enc_hi = unit.execute(Opcode::Encsm, lo, hi);
            // Strip the forward mix first, then invert the shift/substitute
            // pair.
            let unmix_lo = unit.execute(Opcode::Imix, enc_lo, 0);
            let unmix_hi = unit.execute(Opcode::Imix, enc_hi, 0);
            assert_eq!(unit.execute(Opcode::Decs, unmix_hi, unmix_lo), lo);
            assert_eq!(unit.execute(Opcode::Decs, unmix_lo, unmix_hi), hi);
        }
    }

    #[test]
    fn decsm_is_decs_plus_inverse_mix() {
        let unit = Saes64::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let op1: u64 = rng.gen();
            let op2: u64 = rng.gen();
            let plain = unit.execute(Opcode::Decs, op1, op2);
            let mixed = unit.execute(Opcode::Decsm, op1, op2);
            assert_eq!(mixed, unit.execute(Opcode::Imix, plain, 0));
        }
    }

    #[test]
    fn imix_inverts_the_forward_mix() {
        let unit = Saes64::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let value: u64 = rng.gen();
            let mixed = mix_halves(value);
            assert_eq!(unit.execute(Opcode::Imix, mixed, 0), value);
        }
    }

    #[test]
    fn gated_operations_return_zero_when_decrypt_is_absent() {
        let unit = Saes64::encrypt_only();
        assert!(!unit.decrypt_enabled());
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let op1: u64 = rng.gen();
            let op2: u64 = rng.gen();
            assert_eq!(unit.execute(Opcode::Decs, op1, op2), 0);
            assert_eq!(unit.execute(Opcode::Decsm, op1, op2), 0);
            assert_eq!(unit.execute(Opcode::Imix, op1, op2), 0);
        }
    }

    #[test]
    fn ungated_operations_ignore_the_feature_flag() {
        let full = Saes64::new();
        let lean = Saes64::encrypt_only();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let op1: u64 = rng.gen();
            let op2: u64 = rng.gen();
            for op in [
                Opcode::Ks1(idx(3)),
                Opcode::Ks2,
                Opcode::Encs,
                Opcode::Encsm,
            ] {
                assert_eq!(full.execute(op, op1, op2), lean.execute(op, op1, op2));
            }
        }
    }
}
