//! MixColumns over a single state column.
//!
//! Columns are carried as `u32` with the row-0 byte in the least significant
//! position, matching the register packing used by the functional unit.

fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

/// Forward MixColumns of one column.
#[inline]
pub fn mix_column(col: u32) -> u32 {
    let [a0, a1, a2, a3] = col.to_le_bytes();
    u32::from_le_bytes([
        xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3),
        (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3),
    ])
}

/// Inverse MixColumns of one column.
#[inline]
pub fn inv_mix_column(col: u32) -> u32 {
    let [a0, a1, a2, a3] = col.to_le_bytes();
    u32::from_le_bytes([
        gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09),
        gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d),
        gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b),
        gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from the FIPS-197 MixColumns discussion: the column
    // db 13 53 45 maps to 8e 4d a1 bc.
    #[test]
    fn fips_example_column() {
        let col = u32::from_le_bytes([0xdb, 0x13, 0x53, 0x45]);
        let mixed = u32::from_le_bytes([0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(mix_column(col), mixed);
        assert_eq!(inv_mix_column(mixed), col);
    }

    #[test]
    fn identity_column_is_fixed() {
        // 01 01 01 01 is a fixed point of both matrices (rows sum to 1).
        let col = u32::from_le_bytes([0x01; 4]);
        assert_eq!(mix_column(col), col);
        assert_eq!(inv_mix_column(col), col);
    }

    #[test]
    fn forward_inverse_round_trip() {
        let mut col = 0x0123_4567u32;
        for _ in 0..1000 {
            assert_eq!(inv_mix_column(mix_column(col)), col);
            assert_eq!(mix_column(inv_mix_column(col)), col);
            col = col.wrapping_mul(0x9e37_79b9).wrapping_add(1);
        }
    }
}
