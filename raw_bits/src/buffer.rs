//! Fixed-size owned byte buffer with fallible allocation.

use crate::BufError;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

/// A zero-initialized byte buffer whose size is fixed at construction.
///
/// `ByteBuf` owns its bytes exclusively and never grows or shrinks. The
/// allocation itself is fallible: running out of memory is reported as an
/// error instead of aborting.
///
/// # Examples
///
/// ```
/// use raw_bits::ByteBuf;
///
/// let mut buf = ByteBuf::zeroed(4).expect("failed to allocate buffer");
/// assert_eq!(buf.len(), 4);
/// assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
///
/// buf[2] = 0xAB;
/// assert_eq!(buf[2], 0xAB);
/// ```
#[derive(Debug)]
pub struct ByteBuf {
    bytes: Box<[u8]>,
}

impl ByteBuf {
    /// Allocates a buffer of `len` zeroed bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::Alloc`] if the allocation cannot be satisfied.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bits::ByteBuf;
    ///
    /// let buf = ByteBuf::zeroed(16).expect("failed to allocate buffer");
    /// assert!(buf.as_slice().iter().all(|&b| b == 0));
    /// ```
    pub fn zeroed(len: usize) -> Result<Self, BufError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| BufError::Alloc(len))?;
        bytes.resize(len, 0);
        Ok(ByteBuf {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Returns the size of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns an immutable view of all bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a mutable view of all bytes.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Writes `value` into every byte of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bits::ByteBuf;
    ///
    /// let mut buf = ByteBuf::zeroed(3).expect("failed to allocate buffer");
    /// buf.fill(0xFF);
    /// assert_eq!(buf.as_slice(), &[0xFF, 0xFF, 0xFF]);
    /// ```
    pub fn fill(&mut self, value: u8) {
        self.bytes.fill(value);
    }
}

impl core::ops::Index<usize> for ByteBuf {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.bytes[index]
    }
}

impl core::ops::IndexMut<usize> for ByteBuf {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.bytes[index]
    }
}
