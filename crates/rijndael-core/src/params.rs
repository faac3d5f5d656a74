//! Key-length configuration: the `(Nb, Nk, Nr)` triple that bounds the schedule.

use crate::error::{Error, Result};

/// Words per 128-bit data block. Fixed for every AES key length.
pub const NB: usize = 4;

/// Supported cipher key lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyLength {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeyLength {
    /// All supported key lengths, shortest first.
    pub const ALL: [KeyLength; 3] = [KeyLength::Aes128, KeyLength::Aes192, KeyLength::Aes256];

    /// Key length in bits.
    pub const fn bits(self) -> u32 {
        match self {
            KeyLength::Aes128 => 128,
            KeyLength::Aes192 => 192,
            KeyLength::Aes256 => 256,
        }
    }

    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Picks the key length matching a key of `len` bytes.
    pub fn from_key_bytes(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeyLength::Aes128),
            24 => Ok(KeyLength::Aes192),
            32 => Ok(KeyLength::Aes256),
            other => Err(Error::UnsupportedKeySize(other)),
        }
    }
}

impl TryFrom<u32> for KeyLength {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(KeyLength::Aes128),
            192 => Ok(KeyLength::Aes192),
            256 => Ok(KeyLength::Aes256),
            other => Err(Error::UnsupportedKeyLength(other)),
        }
    }
}

/// Schedule parameters derived from a [`KeyLength`].
///
/// Built once per key length and passed by value into expansion, so two
/// expansions never observe each other's configuration. The only way to
/// obtain one is from a [`KeyLength`], so `nb == 4` and `nr == nk + 6` always
/// hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    length: KeyLength,
}

impl Params {
    /// Parameters for `length`.
    pub const fn new(length: KeyLength) -> Self {
        Self { length }
    }

    /// Parameters for a key length given in bits.
    ///
    /// Anything other than 128, 192 or 256 is rejected; there is no fallback.
    pub fn from_bits(bits: u32) -> Result<Self> {
        let length = KeyLength::try_from(bits).map_err(|err| {
            log::error!("rejecting key length configuration: {err}");
            err
        })?;
        let params = Self::new(length);
        log::debug!(
            "configured {bits}-bit key: Nb={} Nk={} Nr={}",
            params.nb(),
            params.nk(),
            params.nr()
        );
        Ok(params)
    }

    /// The key length these parameters describe.
    pub const fn key_length(&self) -> KeyLength {
        self.length
    }

    /// Words per data block (`Nb`), always 4.
    pub const fn nb(&self) -> usize {
        NB
    }

    /// Words per cipher key (`Nk`).
    pub const fn nk(&self) -> usize {
        match self.length {
            KeyLength::Aes128 => 4,
            KeyLength::Aes192 => 6,
            KeyLength::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(&self) -> usize {
        self.nk() + 6
    }

    /// Bytes of cipher key consumed (`4 * Nk`).
    pub const fn key_bytes(&self) -> usize {
        4 * self.nk()
    }

    /// Number of round keys (`Nr + 1`).
    pub const fn round_keys(&self) -> usize {
        self.nr() + 1
    }

    /// Words in the expanded schedule (`Nb * (Nr + 1)`).
    pub const fn schedule_words(&self) -> usize {
        self.nb() * self.round_keys()
    }

    /// Bytes in the expanded schedule (`4 * Nb * (Nr + 1)`).
    pub const fn schedule_bytes(&self) -> usize {
        4 * self.schedule_words()
    }
}

impl From<KeyLength> for Params {
    fn from(length: KeyLength) -> Self {
        Self::new(length)
    }
}
