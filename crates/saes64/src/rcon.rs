//! Round-constant lookup.

use crate::opcode::RconIndex;

/// First ten AES round constants; entries 10–15 read as zero, covering the
/// rotation-disable sentinel and the reserved selector range.
const RCON: [u8; 16] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

/// Returns the round constant selected by `idx`.
#[inline]
pub(crate) fn round_constant(idx: RconIndex) -> u8 {
    RCON[idx.get() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_sequence() {
        let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];
        for (value, want) in expected.into_iter().enumerate() {
            let idx = RconIndex::new(value as u8).unwrap();
            assert_eq!(round_constant(idx), want);
        }
    }

    #[test]
    fn sentinel_and_reserved_read_zero() {
        for value in 10..16u8 {
            let idx = RconIndex::new(value).unwrap();
            assert_eq!(round_constant(idx), 0x00);
        }
    }
}
