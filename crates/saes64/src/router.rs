//! Row/column routing between register pairs and the AES state.
//!
//! Each operand carries two state columns (byte `i` of the register is
//! state byte `i`). Row `r` of the 4x4 state is rebuilt from byte `r` and
//! byte `r + 4` of each operand, rotated per the ShiftRows convention, and
//! the two columns owned by the second operand are reassembled from
//! row-positions 2 and 3 into the 64-bit intermediate.

#[inline]
fn byte(word: u64, index: usize) -> u8 {
    (word >> (8 * index)) as u8
}

fn route(ctx: u64, cur: u64, rotation: [usize; 4]) -> u64 {
    let mut out = [0u8; 8];
    for (r, shift) in rotation.into_iter().enumerate() {
        let row = [
            byte(ctx, r),
            byte(ctx, r + 4),
            byte(cur, r),
            byte(cur, r + 4),
        ];
        // Row rotated left by `shift`; positions 2 and 3 become byte `r` of
        // the low and high output columns.
        out[r] = row[(2 + shift) % 4];
        out[r + 4] = row[(3 + shift) % 4];
    }
    u64::from_le_bytes(out)
}

/// Forward ShiftRows: row `r` rotates left by `r` bytes.
pub(crate) fn shift_rows_fwd(ctx: u64, cur: u64) -> u64 {
    route(ctx, cur, [0, 1, 2, 3])
}

/// Inverse ShiftRows: row `r` rotates right by `r` bytes, i.e. left by
/// `(4 - r) % 4`.
pub(crate) fn shift_rows_inv(ctx: u64, cur: u64) -> u64 {
    route(ctx, cur, [0, 3, 2, 1])
}
