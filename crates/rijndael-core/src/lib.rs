//! Rijndael (AES) key-schedule expansion.
//!
//! Derives the full round-key sequence for 128-, 192- and 256-bit cipher keys
//! following FIPS-197 section 5.2. The crate provides:
//! - GF(2^8) doubling used to produce round constants.
//! - Key-length configuration as explicit, immutable [`Params`].
//! - The expander itself, which returns a freshly owned [`KeySchedule`].
//! - A single-block round pipeline that consumes the schedule, used to check
//!   expansions against published known-answer vectors.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod params;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{rot_word, sub_word, xor_word, Block, Word};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::error::{Error, Result};
pub use crate::gf::{gmul, mult_by_x, rcon, xtime};
pub use crate::key::{CipherKey, KeySchedule};
pub use crate::params::{KeyLength, Params, NB};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::schedule::{expand_key, round_constant};
