//! Fixed-length packed bit container.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::new(10).expect("failed to create bit array");
//! bits.set(0);
//! bits.set(9);
//!
//! assert!(bits.get(0));
//! assert!(bits.get(9));
//! assert_eq!(bits.popcount(), 2);
//! ```
//!
//! ## Bulk operations and aggregate queries
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::new(5).expect("failed to create bit array");
//! assert!(bits.none());
//!
//! bits.fill();
//! assert!(bits.all());
//! assert_eq!(bits.popcount(), 5);
//!
//! bits.clear();
//! assert!(bits.none());
//! ```

use crate::BitArrayError;
use crate::bit_ops;
use raw_bits::ByteBuf;

/// A compact, fixed-size array of bit values, packed eight to a byte.
///
/// The logical length in bits is chosen at construction and never changes.
/// Backing storage is rounded up to whole bytes, so for lengths that are not
/// a multiple of 8 the final byte contains *padding bits* beyond the logical
/// length. Padding bits are not addressable through the index-based
/// operations and are kept unset by [`fill`](BitArray::fill) and
/// [`clear`](BitArray::clear); the aggregate queries
/// ([`all`](BitArray::all), [`any`](BitArray::any),
/// [`none`](BitArray::none), [`popcount`](BitArray::popcount)) scan whole
/// bytes and rely on them reading zero.
///
/// Every bit index passed to [`get`](BitArray::get), [`set`](BitArray::set),
/// [`unset`](BitArray::unset) and [`flip`](BitArray::flip) must be in
/// `[0, len)`. With the `checked` feature enabled each call asserts this;
/// without it only a debug assertion guards the contract.
#[derive(Debug)]
pub struct BitArray {
    length_in_bits: usize,
    bytes: ByteBuf,
}

impl BitArray {
    /// Creates a bit array of `length_in_bits` bits, all unset.
    ///
    /// `length_in_bits` must be positive; the storage is rounded up to whole
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::new(12).expect("failed to create bit array");
    /// assert_eq!(bits.len(), 12);
    /// assert_eq!(bits.capacity(), 16);
    /// assert!(bits.none());
    /// ```
    pub fn new(length_in_bits: usize) -> Result<Self, BitArrayError> {
        #[cfg(feature = "checked")]
        assert!(length_in_bits > 0, "length must be positive");
        #[cfg(not(feature = "checked"))]
        debug_assert!(length_in_bits > 0, "length must be positive");

        let bytes = ByteBuf::zeroed(length_in_bits.div_ceil(8))?;
        Ok(BitArray {
            length_in_bits,
            bytes,
        })
    }

    /// Returns the logical length in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length_in_bits
    }

    /// Returns `true` if the array holds no bits. Always `false` for an
    /// array constructed with a positive length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length_in_bits == 0
    }

    /// Returns the number of bits the backing bytes can hold.
    ///
    /// Always a multiple of 8 and at least [`len`](BitArray::len); equal to
    /// it only when the length is a multiple of 8.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Returns an immutable view of the backing bytes.
    ///
    /// Bit 0 is the least significant bit of the first byte.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Checks if the bit at `bit_idx` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new(8).expect("failed to create bit array");
    /// bits.set(2);
    /// assert!(bits.get(2));
    /// assert!(!bits.get(3));
    /// ```
    pub fn get(&self, bit_idx: usize) -> bool {
        self.check_index(bit_idx);
        self.bytes[bit_ops::byte_index(bit_idx)] & bit_ops::byte_set_at(bit_idx % 8) != 0
    }

    /// Sets the bit at `bit_idx`.
    pub fn set(&mut self, bit_idx: usize) {
        self.check_index(bit_idx);
        self.bytes[bit_ops::byte_index(bit_idx)] |= bit_ops::byte_set_at(bit_idx % 8);
    }

    /// Unsets the bit at `bit_idx`.
    pub fn unset(&mut self, bit_idx: usize) {
        self.check_index(bit_idx);
        self.bytes[bit_ops::byte_index(bit_idx)] &= !bit_ops::byte_set_at(bit_idx % 8);
    }

    /// Flips the bit at `bit_idx`.
    /// If the bit is set, it's unset. If the bit is unset, it's set.
    pub fn flip(&mut self, bit_idx: usize) {
        self.check_index(bit_idx);
        self.bytes[bit_ops::byte_index(bit_idx)] ^= bit_ops::byte_set_at(bit_idx % 8);
    }

    /// Sets every bit in `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new(5).expect("failed to create bit array");
    /// bits.fill();
    /// assert!(bits.all());
    /// assert_eq!(bits.popcount(), 5);
    /// ```
    pub fn fill(&mut self) {
        let last = self.bytes.len() - 1;
        let filled_last = self.filled_last_byte();
        let bytes = self.bytes.as_mut_slice();
        bytes[..last].fill(0xFF);
        // Must not set padding bits, or the whole-byte scans in
        // all/any/none/popcount report wrong results.
        bytes[last] = filled_last;
    }

    /// Unsets every bit in `[0, len)`.
    pub fn clear(&mut self) {
        self.bytes.fill(0x00);
    }

    /// Checks if all the bits are set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new(9).expect("failed to create bit array");
    /// bits.fill();
    /// assert!(bits.all());
    ///
    /// bits.unset(4);
    /// assert!(!bits.all());
    /// ```
    pub fn all(&self) -> bool {
        debug_assert!(self.padding_bits_unset());
        let bytes = self.bytes.as_slice();
        let last = bytes.len() - 1;

        // check the array byte by byte, excluding the last byte.
        for &byte in &bytes[..last] {
            if byte != 0xFF {
                return false;
            }
        }

        bytes[last] == self.filled_last_byte()
    }

    /// Checks if any bit is set.
    pub fn any(&self) -> bool {
        debug_assert!(self.padding_bits_unset());
        self.bytes.as_slice().iter().any(|&byte| byte != 0)
    }

    /// Checks if all the bits are unset.
    pub fn none(&self) -> bool {
        debug_assert!(self.padding_bits_unset());
        for &byte in self.bytes.as_slice() {
            if byte != 0 {
                return false;
            }
        }
        true
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new(10).expect("failed to create bit array");
    /// bits.set(0);
    /// bits.set(3);
    /// bits.set(7);
    /// assert_eq!(bits.popcount(), 3);
    /// ```
    pub fn popcount(&self) -> usize {
        debug_assert!(self.padding_bits_unset());
        self.bytes
            .as_slice()
            .iter()
            .map(|&byte| bit_ops::byte_popcount(byte))
            .sum()
    }

    /// The value of the last byte when every logical bit is set: all ones
    /// for a full byte, only the low `len % 8` bits otherwise.
    #[inline]
    fn filled_last_byte(&self) -> u8 {
        match self.length_in_bits % 8 {
            0 => 0xFF,
            loose_bits => bit_ops::byte_set_at(loose_bits) - 1,
        }
    }

    // Padding bits never become set through the public interface: the
    // index-based operations are bounds-limited to the logical length and
    // fill/clear write the last byte explicitly. The aggregates depend on
    // that, so verify it in debug builds.
    fn padding_bits_unset(&self) -> bool {
        match self.length_in_bits % 8 {
            0 => true,
            loose_bits => {
                let padding_mask = !(bit_ops::byte_set_at(loose_bits) - 1);
                self.bytes[self.bytes.len() - 1] & padding_mask == 0
            }
        }
    }

    #[inline(always)]
    fn check_index(&self, bit_idx: usize) {
        #[cfg(feature = "checked")]
        assert!(
            bit_idx < self.length_in_bits,
            "bit index {} out of range for length {}",
            bit_idx,
            self.length_in_bits
        );
        #[cfg(not(feature = "checked"))]
        debug_assert!(
            bit_idx < self.length_in_bits,
            "bit index {} out of range for length {}",
            bit_idx,
            self.length_in_bits
        );
    }
}
