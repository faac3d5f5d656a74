//! Cipher key and expanded schedule types.

use crate::block::{Block, Word};
use crate::error::Result;
use crate::params::{KeyLength, Params};

/// Cipher key of one of the supported lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherKey {
    length: KeyLength,
    bytes: Vec<u8>,
}

impl CipherKey {
    /// Copies `bytes` into a key, inferring the key length from its size.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let length = KeyLength::from_key_bytes(bytes.len())?;
        Ok(Self {
            length,
            bytes: bytes.to_vec(),
        })
    }

    /// Key length.
    pub fn length(&self) -> KeyLength {
        self.length
    }

    /// Schedule parameters for this key.
    pub fn params(&self) -> Params {
        Params::new(self.length)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

macro_rules! impl_from_array {
    ($len:literal, $variant:ident) => {
        impl From<[u8; $len]> for CipherKey {
            fn from(value: [u8; $len]) -> Self {
                Self {
                    length: KeyLength::$variant,
                    bytes: value.to_vec(),
                }
            }
        }
    };
}

impl_from_array!(16, Aes128);
impl_from_array!(24, Aes192);
impl_from_array!(32, Aes256);

/// Expanded round keys, exactly `4 * Nb * (Nr + 1)` bytes long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    params: Params,
    bytes: Vec<u8>,
}

impl KeySchedule {
    pub(crate) fn from_parts(params: Params, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), params.schedule_bytes());
        Self { params, bytes }
    }

    /// Parameters the schedule was expanded with.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.params.nr()
    }

    /// Schedule length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a schedule holds at least one round key.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The whole schedule in production order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Schedule word `index`, i.e. bytes `[4 * index, 4 * index + 4)`.
    ///
    /// Panics if `index >= Nb * (Nr + 1)`.
    pub fn word(&self, index: usize) -> Word {
        let start = index * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.bytes[start..start + 4]);
        out
    }

    /// Iterates the schedule word by word.
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.bytes
            .chunks_exact(4)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
    }

    /// Round key consumed by round `round` (0..=Nr).
    ///
    /// Panics if `round > Nr`.
    pub fn round_key(&self, round: usize) -> Block {
        let start = round * 16;
        let mut out = [0u8; 16];
        out.copy_from_slice(&self.bytes[start..start + 16]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn new_infers_length() {
        let cases = [
            (16, KeyLength::Aes128),
            (24, KeyLength::Aes192),
            (32, KeyLength::Aes256),
        ];
        for (len, expected) in cases {
            let key = CipherKey::new(&vec![0u8; len]).unwrap();
            assert_eq!(key.length(), expected);
        }
    }

    #[test]
    fn new_rejects_odd_sizes() {
        assert_eq!(
            CipherKey::new(&[0u8; 15]),
            Err(Error::UnsupportedKeySize(15))
        );
        assert_eq!(CipherKey::new(&[]), Err(Error::UnsupportedKeySize(0)));
    }

    #[test]
    fn from_array_matches_new() {
        let bytes = [7u8; 24];
        assert_eq!(CipherKey::from(bytes), CipherKey::new(&bytes).unwrap());
    }

    #[test]
    fn round_key_slices_words() {
        let params = Params::new(KeyLength::Aes128);
        let bytes: Vec<u8> = (0..params.schedule_bytes()).map(|i| i as u8).collect();
        let schedule = KeySchedule::from_parts(params, bytes);
        assert_eq!(schedule.word(5), [20, 21, 22, 23]);
        assert_eq!(schedule.round_key(1)[..4], schedule.word(4));
        assert_eq!(schedule.words().count(), 44);
    }
}
