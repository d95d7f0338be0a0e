//! Round count and ShiftRows offset tables.

use crate::block::BlockSize;
use crate::key::KeySize;

/// Rounds indexed by `[key class][block class]`.
const ROUNDS: [[usize; 5]; 3] = [
    [10, 11, 12, 13, 14],
    [12, 12, 12, 13, 14],
    [14, 14, 14, 14, 14],
];

/// Row 1..=3 left-rotation amounts indexed by block class.
const SHIFTS: [[usize; 3]; 5] = [[1, 2, 3], [1, 2, 3], [1, 2, 3], [1, 2, 4], [1, 3, 4]];

/// Number of rounds for a key/block size pair.
pub const fn rounds(key_size: KeySize, block_size: BlockSize) -> usize {
    ROUNDS[key_size.class()][block_size.class()]
}

pub(crate) const fn row_shifts(block_size: BlockSize) -> [usize; 3] {
    SHIFTS[block_size.class()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_follow_max_of_nk_nb_plus_six() {
        for key_size in KeySize::ALL {
            for block_size in BlockSize::ALL {
                let expected = key_size.words().max(block_size.words()) + 6;
                assert_eq!(rounds(key_size, block_size), expected);
            }
        }
    }

    #[test]
    fn aes_profile_uses_ten_twelve_fourteen() {
        assert_eq!(rounds(KeySize::Bits128, BlockSize::Bits128), 10);
        assert_eq!(rounds(KeySize::Bits192, BlockSize::Bits128), 12);
        assert_eq!(rounds(KeySize::Bits256, BlockSize::Bits128), 14);
    }

    #[test]
    fn shifts_stay_below_column_count() {
        for block_size in BlockSize::ALL {
            for shift in row_shifts(block_size) {
                assert!(shift > 0 && shift < block_size.words());
            }
        }
        assert_eq!(row_shifts(BlockSize::Bits224), [1, 2, 4]);
        assert_eq!(row_shifts(BlockSize::Bits256), [1, 3, 4]);
    }
}
