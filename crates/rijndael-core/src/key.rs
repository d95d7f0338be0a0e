//! Key sizes and the expanded key schedule.

use crate::block::BlockSize;
use crate::error::{Error, Parameter, Result};
use crate::state::State;

/// Master key size, expressed through the number of 32-bit words `Nk`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key (`Nk = 4`).
    Bits128,
    /// 192-bit key (`Nk = 6`).
    Bits192,
    /// 256-bit key (`Nk = 8`).
    Bits256,
}

impl KeySize {
    /// Every supported key size, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256];

    /// Looks up the key size for a master key of `len` bytes.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeySize::Bits128),
            24 => Ok(KeySize::Bits192),
            32 => Ok(KeySize::Bits256),
            other => Err(Error::InvalidParameter(Parameter::KeyLength(other))),
        }
    }

    /// Number of 32-bit words in the master key (`Nk`).
    pub const fn words(self) -> usize {
        match self {
            KeySize::Bits128 => 4,
            KeySize::Bits192 => 6,
            KeySize::Bits256 => 8,
        }
    }

    /// Master key length in bytes.
    pub const fn bytes(self) -> usize {
        self.words() * 4
    }

    pub(crate) const fn class(self) -> usize {
        (self.words() - 4) / 2
    }
}

/// Selects how words are derived for keys longer than six words.
///
/// The variants only differ for 256-bit keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyExpansion {
    /// Only words at `i mod Nk == 0` go through `SubWord(RotWord(..)) ^ Rcon`.
    #[default]
    Compact,
    /// Also applies `SubWord` at `i mod Nk == 4` when `Nk > 6`, as FIPS-197 does.
    Standard,
}

/// Expanded round keys for one (master key, block size) pair.
///
/// Holds `rounds + 1` round keys shaped like the cipher state. Immutable once
/// built and safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    block_size: BlockSize,
    key_size: KeySize,
    expansion: KeyExpansion,
    round_keys: Vec<State>,
}

impl KeySchedule {
    pub(crate) fn new(
        block_size: BlockSize,
        key_size: KeySize,
        expansion: KeyExpansion,
        round_keys: Vec<State>,
    ) -> Self {
        debug_assert!(round_keys.len() >= 2);
        Self {
            block_size,
            key_size,
            expansion,
            round_keys,
        }
    }

    /// Block size the schedule was expanded for.
    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    /// Size of the master key the schedule was derived from.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Expansion rule used to derive the schedule.
    pub fn expansion(&self) -> KeyExpansion {
        self.expansion
    }

    /// Number of cipher rounds.
    pub fn rounds(&self) -> usize {
        self.round_keys.len() - 1
    }

    /// Returns the round key at the requested index (`0..=rounds`).
    #[inline]
    pub fn round_key(&self, round: usize) -> &State {
        &self.round_keys[round]
    }

    /// All round keys in round order.
    pub fn round_keys(&self) -> &[State] {
        &self.round_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_len_accepts_aes_key_lengths() {
        for key_size in KeySize::ALL {
            assert_eq!(KeySize::from_len(key_size.bytes()), Ok(key_size));
        }
    }

    #[test]
    fn from_len_rejects_other_lengths() {
        for len in [0, 15, 17, 20, 31, 33, 64] {
            assert_eq!(
                KeySize::from_len(len),
                Err(Error::InvalidParameter(Parameter::KeyLength(len)))
            );
        }
    }

    #[test]
    fn schedule_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeySchedule>();
    }
}
