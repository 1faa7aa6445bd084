//! Reference AES-128 block cipher.
//!
//! Used as the oracle when cross-checking the instruction-level datapath.
//! The state is held as four little-endian column words, the same packing
//! the 64-bit register pairs of the functional unit use.

use crate::mix::{inv_mix_column, mix_column};
use crate::sbox::{inv_sbox, sbox};

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Expanded AES-128 key schedule: 44 words, 4 per round key.
pub type KeyWords = [u32; 44];

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// RotWord on a little-endian-packed word: the first key byte moves to the
/// end, which is a right rotation of the register image.
#[inline]
fn rot_word(word: u32) -> u32 {
    word.rotate_right(8)
}

fn sub_word(word: u32) -> u32 {
    let [b0, b1, b2, b3] = word.to_le_bytes();
    u32::from_le_bytes([sbox(b0), sbox(b1), sbox(b2), sbox(b3)])
}

/// Expands a 128-bit key into the 44-word AES-128 schedule.
pub fn expand_key(key: &[u8; 16]) -> KeyWords {
    let mut w = [0u32; 44];
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        w[i] = u32::from_le_bytes(chunk.try_into().expect("chunk length is four"));
    }
    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ u32::from(RCON[i / 4 - 1]);
        }
        w[i] = w[i - 4] ^ temp;
    }
    w
}

fn load_columns(block: &Block) -> [u32; 4] {
    let mut cols = [0u32; 4];
    for (col, chunk) in cols.iter_mut().zip(block.chunks_exact(4)) {
        *col = u32::from_le_bytes(chunk.try_into().expect("chunk length is four"));
    }
    cols
}

fn store_columns(cols: &[u32; 4]) -> Block {
    let mut block = [0u8; 16];
    for (chunk, col) in block.chunks_exact_mut(4).zip(cols.iter()) {
        chunk.copy_from_slice(&col.to_le_bytes());
    }
    block
}

fn sub_bytes(cols: &mut [u32; 4]) {
    for col in cols.iter_mut() {
        *col = sub_word(*col);
    }
}

fn inv_sub_bytes(cols: &mut [u32; 4]) {
    for col in cols.iter_mut() {
        let [b0, b1, b2, b3] = col.to_le_bytes();
        *col = u32::from_le_bytes([inv_sbox(b0), inv_sbox(b1), inv_sbox(b2), inv_sbox(b3)]);
    }
}

fn shift_rows(cols: &mut [u32; 4]) {
    let old = *cols;
    for c in 0..4 {
        let mut bytes = [0u8; 4];
        for (r, byte) in bytes.iter_mut().enumerate() {
            *byte = (old[(c + r) % 4] >> (8 * r)) as u8;
        }
        cols[c] = u32::from_le_bytes(bytes);
    }
}

fn inv_shift_rows(cols: &mut [u32; 4]) {
    let old = *cols;
    for c in 0..4 {
        let mut bytes = [0u8; 4];
        for (r, byte) in bytes.iter_mut().enumerate() {
            *byte = (old[(c + 4 - r) % 4] >> (8 * r)) as u8;
        }
        cols[c] = u32::from_le_bytes(bytes);
    }
}

fn add_round_key(cols: &mut [u32; 4], w: &KeyWords, round: usize) {
    for (c, col) in cols.iter_mut().enumerate() {
        *col ^= w[round * 4 + c];
    }
}

/// Encrypts a single block with a pre-expanded key schedule.
pub fn encrypt_block(block: &Block, w: &KeyWords) -> Block {
    let mut cols = load_columns(block);

    add_round_key(&mut cols, w, 0);
    for round in 1..10 {
        sub_bytes(&mut cols);
        shift_rows(&mut cols);
        for col in cols.iter_mut() {
            *col = mix_column(*col);
        }
        add_round_key(&mut cols, w, round);
    }
    sub_bytes(&mut cols);
    shift_rows(&mut cols);
    add_round_key(&mut cols, w, 10);

    store_columns(&cols)
}

/// Decrypts a single block with a pre-expanded key schedule.
pub fn decrypt_block(block: &Block, w: &KeyWords) -> Block {
    let mut cols = load_columns(block);

    add_round_key(&mut cols, w, 10);
    for round in (1..10).rev() {
        inv_shift_rows(&mut cols);
        inv_sub_bytes(&mut cols);
        add_round_key(&mut cols, w, round);
        for col in cols.iter_mut() {
            *col = inv_mix_column(*col);
        }
    }
    inv_shift_rows(&mut cols);
    inv_sub_bytes(&mut cols);
    add_round_key(&mut cols, w, 0);

    store_columns(&cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let w = expand_key(&NIST_KEY);
        assert_eq!(encrypt_block(&NIST_PLAIN, &w), NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let w = expand_key(&NIST_KEY);
        assert_eq!(decrypt_block(&NIST_CIPHER, &w), NIST_PLAIN);
    }

    #[test]
    fn schedule_end_matches_fips_appendix_a() {
        // FIPS-197 appendix A.1 expands 2b7e1516... and ends with word
        // w[43] = b6630ca6 (byte order b6 63 0c a6).
        let key = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let w = expand_key(&key);
        assert_eq!(w[43].to_le_bytes(), [0xb6, 0x63, 0x0c, 0xa6]);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);
            let w = expand_key(&key);
            let ct = encrypt_block(&block, &w);
            assert_eq!(decrypt_block(&ct, &w), block);
        }
    }
}
