//! GF(2^8) arithmetic under the AES reduction polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial once the `x^8` term is shifted out.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` once.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte > 0x7f {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies `byte` by `x` `count` times, i.e. computes `byte * x^count`.
///
/// A `count` of zero returns `byte` unchanged.
pub fn mult_by_x(byte: u8, count: u8) -> u8 {
    let mut acc = byte;
    for _ in 0..count {
        acc = xtime(acc);
    }
    acc
}

/// Full field product of `a` and `b`.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Round constant for the 1-based round `index`.
///
/// The first constant is `x^0 = 1`; every later one doubles the previous.
/// There is no constant for index 0.
pub fn rcon(index: u8) -> Option<u8> {
    match index {
        0 => None,
        1 => Some(1),
        n => Some(mult_by_x(1, n - 1)),
    }
}
