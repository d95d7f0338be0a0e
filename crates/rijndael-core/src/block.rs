//! Block size classes.

use crate::error::{Error, Parameter, Result};
use crate::params;

/// Rijndael block size, expressed as the number of 32-bit columns `Nb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockSize {
    /// 128-bit block (`Nb = 4`), the AES profile.
    #[default]
    Bits128,
    /// 160-bit block (`Nb = 5`).
    Bits160,
    /// 192-bit block (`Nb = 6`).
    Bits192,
    /// 224-bit block (`Nb = 7`).
    Bits224,
    /// 256-bit block (`Nb = 8`).
    Bits256,
}

impl BlockSize {
    /// Every supported block size, smallest first.
    pub const ALL: [BlockSize; 5] = [
        BlockSize::Bits128,
        BlockSize::Bits160,
        BlockSize::Bits192,
        BlockSize::Bits224,
        BlockSize::Bits256,
    ];

    /// Looks up the block size for `words` columns.
    pub fn from_words(words: usize) -> Result<Self> {
        match words {
            4 => Ok(BlockSize::Bits128),
            5 => Ok(BlockSize::Bits160),
            6 => Ok(BlockSize::Bits192),
            7 => Ok(BlockSize::Bits224),
            8 => Ok(BlockSize::Bits256),
            other => Err(Error::InvalidParameter(Parameter::BlockWords(other))),
        }
    }

    /// Number of 32-bit columns (`Nb`).
    pub const fn words(self) -> usize {
        match self {
            BlockSize::Bits128 => 4,
            BlockSize::Bits160 => 5,
            BlockSize::Bits192 => 6,
            BlockSize::Bits224 => 7,
            BlockSize::Bits256 => 8,
        }
    }

    /// Block length in bytes.
    pub const fn bytes(self) -> usize {
        self.words() * 4
    }

    /// Left-rotation amounts applied to rows 1, 2 and 3 by ShiftRows.
    pub const fn row_shifts(self) -> [usize; 3] {
        params::row_shifts(self)
    }

    pub(crate) const fn class(self) -> usize {
        self.words() - 4
    }
}
