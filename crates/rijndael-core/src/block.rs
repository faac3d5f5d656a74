//! Block and word representations with the byte-wise value operations the
//! key schedule and the round pipeline are built from.

use crate::sbox::sbox;

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// One 4-byte schedule word.
pub type Word = [u8; 4];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// `[b0, b1, b2, b3] -> [b1, b2, b3, b0]`.
#[inline]
pub fn rot_word(word: Word) -> Word {
    let [b0, b1, b2, b3] = word;
    [b1, b2, b3, b0]
}

/// Applies the S-box to each byte of `word`.
#[inline]
pub fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Byte-wise XOR of `rhs` into `dst`.
#[inline]
pub fn xor_word(dst: &mut Word, rhs: &Word) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
