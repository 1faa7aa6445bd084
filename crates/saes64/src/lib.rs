//! Bit-exact model of a single-cycle 64-bit scalar AES functional unit.
//!
//! The unit executes one operation per invocation on a pair of 64-bit
//! register operands: two key-schedule steps ([`Opcode::Ks1`],
//! [`Opcode::Ks2`]), a decrypt key-mix step ([`Opcode::Imix`]), and four
//! cipher round steps covering encrypt/decrypt with and without column
//! mixing. For the cipher steps the operand pair is a window onto a 128-bit
//! AES state: the second operand holds the two columns being advanced, the
//! first their neighboring columns, which row shifting pulls bytes from.
//!
//! Every invocation is a pure, stateless computation — the software
//! equivalent of a combinational datapath whose ready signal tracks valid
//! within the same cycle. The only configuration is whether the decrypt
//! datapath exists at all ([`Saes64::encrypt_only`]); operations that would
//! use an absent inverse S-box or inverse column mix return zero rather
//! than a diagnostic.
//!
//! Byte substitution and column mixing themselves come from the
//! [`aes_prims`] crate; this crate owns the byte-lane routing, key-schedule
//! arithmetic, and per-opcode result selection.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod opcode;
mod rcon;
mod router;
mod unit;

pub use crate::opcode::{InvalidRconIndex, Opcode, RconIndex};
pub use crate::unit::Saes64;
