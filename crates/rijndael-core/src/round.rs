//! Rijndael round transformations over a [`State`].

use crate::gf::multiply;
use crate::sbox::{inv_sbox, sbox};
use crate::state::{State, ROWS};

/// Forward MixColumns matrix.
const MIX: [[u8; ROWS]; ROWS] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse MixColumns matrix.
const INV_MIX: [[u8; ROWS]; ROWS] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.cells_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.cells_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place. Row 0 never moves.
pub fn shift_rows(state: &mut State) {
    let shifts = state.block_size().row_shifts();
    for (row, shift) in (1..ROWS).zip(shifts) {
        state.rotate_row_left(row, shift);
    }
}

/// Performs the inverse of ShiftRows in place.
pub fn inv_shift_rows(state: &mut State) {
    let columns = state.columns();
    let shifts = state.block_size().row_shifts();
    for (row, shift) in (1..ROWS).zip(shifts) {
        state.rotate_row_left(row, columns - shift);
    }
}

fn mix_single_column(col: [u8; ROWS], matrix: &[[u8; ROWS]; ROWS]) -> [u8; ROWS] {
    let mut out = [0u8; ROWS];
    for (value, coefficients) in out.iter_mut().zip(matrix.iter()) {
        for (byte, coefficient) in col.iter().zip(coefficients.iter()) {
            *value ^= multiply(*byte, *coefficient);
        }
    }
    out
}

fn mix_with(state: &mut State, matrix: &[[u8; ROWS]; ROWS]) {
    for column in 0..state.columns() {
        let mixed = mix_single_column(state.column(column), matrix);
        state.set_column(column, mixed);
    }
}

/// MixColumns over every column.
#[inline]
pub fn mix_columns(state: &mut State) {
    mix_with(state, &MIX);
}

/// Inverse MixColumns over every column.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    mix_with(state, &INV_MIX);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_in_place(round_key);
}
