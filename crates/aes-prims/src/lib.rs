//! AES primitives shared across the `saes64` workspace.
//!
//! This crate provides the pure building blocks the functional unit treats
//! as external collaborators:
//! - Forward and inverse byte substitution (FIPS-197 S-box).
//! - Forward and inverse MixColumns over a single 32-bit column.
//! - A reference AES-128 block cipher used as the oracle when validating
//!   the instruction-level implementation.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod mix;
mod sbox;

pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Block, KeyWords};
pub use crate::mix::{inv_mix_column, mix_column};
pub use crate::sbox::{inv_sbox, sbox};
