//! Operation selection for the functional unit.

use core::fmt;

/// One functional-unit operation.
///
/// The hardware presents the operation as a one-hot bit set and OR-merges
/// the masked result branches, which leaves zero- and multi-assert behavior
/// undefined in practice. Here exactly one operation per invocation is
/// enforced by construction; "no operation issued" is a decoder concern,
/// represented upstream as `Option<Opcode>` where needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// First key-schedule step: rotate (unless the selector disables it),
    /// substitute, and inject the selected round constant.
    Ks1(RconIndex),
    /// Second key-schedule step: XOR-chains the operand halves.
    Ks2,
    /// Inverse-MixColumns of the first operand, for converting forward
    /// round keys into the equivalent inverse-cipher schedule.
    Imix,
    /// Forward round: ShiftRows and SubBytes, no column mix.
    Encs,
    /// Forward round: ShiftRows, SubBytes, and MixColumns.
    Encsm,
    /// Inverse round: inverse ShiftRows and inverse SubBytes, no column mix.
    Decs,
    /// Inverse round: inverse ShiftRows, inverse SubBytes, and inverse
    /// MixColumns.
    Decsm,
}

/// 4-bit round-constant selector.
///
/// Values 0–9 select the ten AES round constants, 10 additionally disables
/// the key-schedule rotation, and 11–15 select a zero constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RconIndex(u8);

impl RconIndex {
    /// The sentinel value that disables rotation in [`Opcode::Ks1`].
    pub const ROTATE_DISABLE: RconIndex = RconIndex(10);

    /// Wraps a selector value, rejecting anything that does not fit in
    /// four bits.
    pub const fn new(value: u8) -> Option<Self> {
        if value < 16 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw selector value (0..=15).
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True exactly when this selector carries the rotation-disable
    /// sentinel.
    pub(crate) const fn disables_rotation(self) -> bool {
        self.0 == Self::ROTATE_DISABLE.0
    }
}

impl TryFrom<u8> for RconIndex {
    type Error = InvalidRconIndex;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidRconIndex(value))
    }
}

/// Error returned when a round-constant selector does not fit in four bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRconIndex(pub(crate) u8);

impl fmt::Display for InvalidRconIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round-constant selector {} exceeds 4 bits", self.0)
    }
}

impl std::error::Error for InvalidRconIndex {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_range() {
        assert_eq!(RconIndex::new(0).map(RconIndex::get), Some(0));
        assert_eq!(RconIndex::new(15).map(RconIndex::get), Some(15));
        assert_eq!(RconIndex::new(16), None);
        assert_eq!(RconIndex::try_from(0xff), Err(InvalidRconIndex(0xff)));
    }

    #[test]
    fn only_ten_is_the_sentinel() {
        for value in 0..16u8 {
            let idx = RconIndex::new(value).unwrap();
            assert_eq!(idx.disables_rotation(), value == 10);
        }
    }
}
