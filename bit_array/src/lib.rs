//! # bit_array
//!
//! A `no_std` compatible fixed-length packed bit container.
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! // A set of 10 boolean markers stored in 2 bytes
//! let mut bits = BitArray::new(10).expect("failed to create bit array");
//! bits.set(3);
//! bits.set(7);
//!
//! assert!(bits.get(3));
//! assert!(!bits.get(4));
//! assert_eq!(bits.popcount(), 2);
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! // Standard Vec<bool>: 1000 flags × 1 byte = 1000 bytes
//! let standard: Vec<bool> = vec![false; 1000];
//!
//! // BitArray: 1000 flags packed eight to a byte = 125 bytes
//! let packed = BitArray::new(1000).expect("failed to create bit array");
//!
//! assert_eq!(packed.as_bytes().len(), 125);
//! // 87.5% memory savings!
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitArrayError;

mod bit_ops;

pub mod container;
pub use container::BitArray;
