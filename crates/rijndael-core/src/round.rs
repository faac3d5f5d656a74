//! AES round transformations over a column-major state.

use crate::block::{xor_in_place, Block};
use crate::gf::{gmul, xtime};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + row) % 4) * 4 + row];
        }
    }
}

/// Performs the inverse of ShiftRows in place.
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[((col + row) % 4) * 4 + row] = src[col * 4 + row];
        }
    }
}

fn mix_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3),
        (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3),
    ]
}

fn inv_mix_column(col: [u8; 4]) -> [u8; 4] {
    const ROW: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];
    let mut out = [0u8; 4];
    for (i, dst) in out.iter_mut().enumerate() {
        *dst = (0..4).fold(0, |acc, j| acc ^ gmul(col[j], ROW[(4 + j - i) % 4]));
    }
    out
}

fn for_each_column(state: &mut Block, f: fn([u8; 4]) -> [u8; 4]) {
    for column in state.chunks_exact_mut(4) {
        let mixed = f([column[0], column[1], column[2], column[3]]);
        column.copy_from_slice(&mixed);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
