//! Generalized Rijndael block cipher.
//!
//! Supports every block size from 128 to 256 bits in 32-bit steps and keys of
//! 128, 192 or 256 bits. The crate provides:
//! - Key expansion into a reusable, read-only [`KeySchedule`].
//! - Single-block encryption and decryption.
//! - The state grid, round transforms and GF(2^8) helpers they are built from.
//!
//! With 128-bit blocks this is AES. Blocks are processed independently; there
//! is no chaining mode or padding. The implementation aims for clarity and
//! testability rather than constant-time guarantees; it should not be treated
//! as side-channel hardened.
//!
//! ```
//! use rijndael_core::{decrypt_block, encrypt_block, expand_key};
//!
//! let key: Vec<u8> = (0..16).collect();
//! let schedule = expand_key(&key, 4).unwrap();
//! let block = *b"sixteen byte blk";
//! let ct = encrypt_block(&block, &schedule).unwrap();
//! assert_eq!(decrypt_block(&ct, &schedule).unwrap(), block);
//! ```

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
mod state;

pub use crate::block::BlockSize;
pub use crate::cipher::{
    decrypt_block, decrypt_in_place, encrypt_block, encrypt_in_place, expand_key,
    expand_key_with,
};
pub use crate::error::{Error, Parameter, Result};
pub use crate::gf::multiply as gf_multiply;
pub use crate::key::{KeyExpansion, KeySchedule, KeySize};
pub use crate::params::rounds;
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::state::{State, ROWS};
