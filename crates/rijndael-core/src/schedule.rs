//! Key-schedule expansion for 128-, 192- and 256-bit keys.

use crate::block::{rot_word, sub_word, xor_word, Word};
use crate::error::{Error, Result};
use crate::gf::rcon;
use crate::key::{CipherKey, KeySchedule};
use crate::params::Params;

/// Round constant injected at schedule word `word` under `params`.
///
/// Only derived words with `word % Nk == 0` carry a constant; every other
/// index, including the seed words and anything past the end of the
/// schedule, yields `None`.
pub fn round_constant(word: usize, params: Params) -> Option<u8> {
    let nk = params.nk();
    if word < nk || word >= params.schedule_words() || word % nk != 0 {
        return None;
    }
    rcon(u8::try_from(word / nk).ok()?)
}

/// Expands `key` under `params` into a freshly allocated schedule.
///
/// `key` must be exactly `params.key_bytes()` long.
pub fn expand_key(key: &[u8], params: Params) -> Result<KeySchedule> {
    if key.len() != params.key_bytes() {
        log::warn!(
            "refusing to expand a {}-byte key with Nk={}",
            key.len(),
            params.nk()
        );
        return Err(Error::KeyLengthMismatch {
            expected: params.key_bytes(),
            actual: key.len(),
        });
    }
    Ok(expand_unchecked(key, params))
}

impl CipherKey {
    /// Expands this key into its full schedule.
    pub fn expand(&self) -> KeySchedule {
        expand_unchecked(self.as_bytes(), self.params())
    }
}

fn expand_unchecked(key: &[u8], params: Params) -> KeySchedule {
    let nk = params.nk();
    let total_words = params.schedule_words();
    log::debug!(
        "expanding {}-bit key into {} words",
        params.key_length().bits(),
        total_words
    );

    let mut schedule = vec![0u8; params.schedule_bytes()];
    schedule[..key.len()].copy_from_slice(key);

    // `temp` always holds schedule word `word - 1`.
    let mut temp: Word = read_word(&schedule, nk - 1);

    for word in nk..total_words {
        if let Some(rc) = round_constant(word, params) {
            temp = sub_word(rot_word(temp));
            log::trace!("word {word}: rcon {rc:#04x}");
            temp[0] ^= rc;
        } else if nk > 6 && word % nk == 4 {
            temp = sub_word(temp);
        }

        xor_word(&mut temp, &read_word(&schedule, word - nk));
        schedule[word * 4..word * 4 + 4].copy_from_slice(&temp);
    }

    KeySchedule::from_parts(params, schedule)
}

fn read_word(bytes: &[u8], index: usize) -> Word {
    let start = index * 4;
    [
        bytes[start],
        bytes[start + 1],
        bytes[start + 2],
        bytes[start + 3],
    ]
}
