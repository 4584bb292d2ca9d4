//! Bit addressing and per-byte population count helpers.

/// Returns a byte where every bit except the one at `bit_idx` is unset.
/// Does not check whether `bit_idx` is in the interval `[0, 8)`.
/// Index starts from the right.
/// `byte_set_at(2) == 0b0000_0100`
#[inline(always)]
pub(crate) fn byte_set_at(bit_idx: usize) -> u8 {
    1u8 << bit_idx
}

/// Returns the index of the byte holding the bit at `bit_idx`.
#[inline(always)]
pub(crate) fn byte_index(bit_idx: usize) -> usize {
    bit_idx / 8
}

/// Returns the number of set bits in a byte.
#[cfg(not(feature = "popcount-table"))]
#[inline(always)]
pub(crate) fn byte_popcount(byte: u8) -> usize {
    byte.count_ones() as usize
}

/// Returns the number of set bits in a byte.
#[cfg(feature = "popcount-table")]
#[inline(always)]
pub(crate) fn byte_popcount(byte: u8) -> usize {
    U8_POPCOUNT_TABLE[byte as usize] as usize
}

// U8_POPCOUNT_TABLE[byte] -> amount of set bits in the byte.
// U8_POPCOUNT_TABLE[3] == 2 (number 3 has two set bits).
#[cfg(any(feature = "popcount-table", test))]
static U8_POPCOUNT_TABLE: [u8; 256] = [
    0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4, //
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 5, //
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 5, //
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 6, //
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 5, //
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 6, //
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 6, //
    3, 4, 4, 5, 4, 5, 5, 6, 4, 5, 5, 6, 5, 6, 6, 7, //
    1, 2, 2, 3, 2, 3, 3, 4, 2, 3, 3, 4, 3, 4, 4, 5, //
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 6, //
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 6, //
    3, 4, 4, 5, 4, 5, 5, 6, 4, 5, 5, 6, 5, 6, 6, 7, //
    2, 3, 3, 4, 3, 4, 4, 5, 3, 4, 4, 5, 4, 5, 5, 6, //
    3, 4, 4, 5, 4, 5, 5, 6, 4, 5, 5, 6, 5, 6, 6, 7, //
    3, 4, 4, 5, 4, 5, 5, 6, 4, 5, 5, 6, 5, 6, 6, 7, //
    4, 5, 5, 6, 5, 6, 6, 7, 5, 6, 6, 7, 6, 7, 7, 8, //
];
