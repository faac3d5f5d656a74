//! Block encryption/decryption driven by an expanded key schedule.

use crate::block::Block;
use crate::key::KeySchedule;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Encrypts a single 16-byte block with a pre-expanded schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let nr = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, &schedule.round_key(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &schedule.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &schedule.round_key(nr));

    state
}

/// Decrypts a single 16-byte block with a pre-expanded schedule.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let nr = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, &schedule.round_key(nr));
    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &schedule.round_key(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &schedule.round_key(0));

    state
}
