//! Rijndael key expansion and block encryption/decryption.

use crate::block::BlockSize;
use crate::error::Result;
use crate::gf::xtime;
use crate::key::{KeyExpansion, KeySchedule, KeySize};
use crate::params::rounds;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;
use crate::state::State;

/// Enough constants for the longest schedule (Nb = 8, Nk = 4 needs 29).
const RCON_LEN: usize = 30;

const RCON: [u8; RCON_LEN] = build_rcon();

const fn build_rcon() -> [u8; RCON_LEN] {
    let mut table = [0u8; RCON_LEN];
    let mut value = 0x01u8;
    let mut i = 0;
    while i < RCON_LEN {
        table[i] = value;
        value = xtime(value);
        i += 1;
    }
    table
}

fn rcon(index: usize) -> u32 {
    u32::from(RCON[index]) << 24
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands `master_key` for blocks of `block_words` columns using
/// [`KeyExpansion::Compact`].
pub fn expand_key(master_key: &[u8], block_words: usize) -> Result<KeySchedule> {
    expand_key_with(master_key, block_words, KeyExpansion::default())
}

/// Expands `master_key` into `rounds + 1` round keys for blocks of
/// `block_words` columns.
///
/// Fails with [`Error::InvalidParameter`](crate::Error::InvalidParameter) when
/// the key is not 16, 24 or 32 bytes or `block_words` is outside `4..=8`.
pub fn expand_key_with(
    master_key: &[u8],
    block_words: usize,
    expansion: KeyExpansion,
) -> Result<KeySchedule> {
    let key_size = KeySize::from_len(master_key.len())?;
    let block_size = BlockSize::from_words(block_words)?;
    let nk = key_size.words();
    let nb = block_size.words();
    let rounds = rounds(key_size, block_size);
    let total = nb * (rounds + 1);

    let mut w: Vec<u32> = Vec::with_capacity(total);
    for chunk in master_key.chunks_exact(4) {
        w.push(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ rcon(i / nk - 1);
        } else if expansion == KeyExpansion::Standard && nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w.push(w[i - nk] ^ temp);
    }

    let round_keys = w
        .chunks_exact(nb)
        .map(|words| State::from_words(block_size, words))
        .collect();

    Ok(KeySchedule::new(block_size, key_size, expansion, round_keys))
}

fn encrypt_state(state: &mut State, schedule: &KeySchedule) {
    let rounds = schedule.rounds();

    add_round_key(state, schedule.round_key(0));

    for round in 1..rounds {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, schedule.round_key(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, schedule.round_key(rounds));
}

fn decrypt_state(state: &mut State, schedule: &KeySchedule) {
    let rounds = schedule.rounds();

    add_round_key(state, schedule.round_key(rounds));
    for round in (1..rounds).rev() {
        inv_sub_bytes(state);
        inv_shift_rows(state);
        add_round_key(state, schedule.round_key(round));
        inv_mix_columns(state);
    }
    inv_sub_bytes(state);
    inv_shift_rows(state);
    add_round_key(state, schedule.round_key(0));
}

/// Encrypts `block` in place.
///
/// `block` must be exactly `schedule.block_size().bytes()` long; otherwise
/// [`Error::InvalidBlockSize`](crate::Error::InvalidBlockSize) is returned and
/// the buffer is left untouched.
pub fn encrypt_in_place(block: &mut [u8], schedule: &KeySchedule) -> Result<()> {
    let mut state = State::from_bytes(schedule.block_size(), block)?;
    encrypt_state(&mut state, schedule);
    state.write_bytes(block);
    Ok(())
}

/// Decrypts `block` in place. Length rules match [`encrypt_in_place`].
pub fn decrypt_in_place(block: &mut [u8], schedule: &KeySchedule) -> Result<()> {
    let mut state = State::from_bytes(schedule.block_size(), block)?;
    decrypt_state(&mut state, schedule);
    state.write_bytes(block);
    Ok(())
}

/// Encrypts a single block with a pre-expanded key schedule.
pub fn encrypt_block(block: &[u8], schedule: &KeySchedule) -> Result<Vec<u8>> {
    let mut state = State::from_bytes(schedule.block_size(), block)?;
    encrypt_state(&mut state, schedule);
    Ok(state.to_bytes())
}

/// Decrypts a single block with a pre-expanded key schedule.
pub fn decrypt_block(block: &[u8], schedule: &KeySchedule) -> Result<Vec<u8>> {
    let mut state = State::from_bytes(schedule.block_size(), block)?;
    decrypt_state(&mut state, schedule);
    Ok(state.to_bytes())
}
