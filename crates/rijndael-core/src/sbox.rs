//! Rijndael substitution box and its inverse.

const fn gen_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut p = 1u8;
    let mut q = 1u8;

    // `p` walks the multiplicative group by powers of 3 while `q` walks it by
    // powers of 3^-1, so `q` is always the inverse of `p`.
    loop {
        p = p ^ (p << 1) ^ (if p & 0x80 != 0 { 0x1b } else { 0 });

        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        if q & 0x80 != 0 {
            q ^= 0x09;
        }

        table[p as usize] =
            q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4) ^ 0x63;

        if p == 1 {
            break;
        }
    }

    // zero has no inverse
    table[0] = 0x63;
    table
}

const fn gen_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static SBOX: [u8; 256] = gen_sbox();
static INV_SBOX: [u8; 256] = gen_inv_sbox(&gen_sbox());

/// Forward S-box lookup.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Inverse S-box lookup.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xff), 0x16);
        assert_eq!(inv_sbox(0x63), 0x00);
        assert_eq!(inv_sbox(0xed), 0x53);
    }

    #[test]
    fn inverse_undoes_forward() {
        for b in 0..=255u8 {
            assert_eq!(inv_sbox(sbox(b)), b);
        }
    }

    #[test]
    fn no_fixed_points() {
        for b in 0..=255u8 {
            assert_ne!(sbox(b), b);
        }
    }
}
