// tests/proptest.rs

#![cfg(test)]

use bit_array::BitArray;
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// Mirrors a sequence of single-bit operations onto a plain Vec<bool> model.
fn apply_ops(bits: &mut BitArray, model: &mut Vec<bool>, ops: &[(u8, usize)]) {
    let len = model.len();
    for &(op, raw_idx) in ops {
        let idx = raw_idx % len;
        match op % 3 {
            0 => {
                bits.set(idx);
                model[idx] = true;
            }
            1 => {
                bits.unset(idx);
                model[idx] = false;
            }
            _ => {
                bits.flip(idx);
                model[idx] = !model[idx];
            }
        }
    }
}

//
// -----------------------------------------------------------------------------
// Single-Bit Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_then_get_roundtrip(
        len in 1usize..512,
        raw_indices in prop::collection::vec(0usize..512, 0..64)
    ) {
        let mut bits = BitArray::new(len).unwrap();
        let mut model = vec![false; len];

        for &raw_idx in &raw_indices {
            let idx = raw_idx % len;
            bits.set(idx);
            model[idx] = true;
        }

        for (i, &expected) in model.iter().enumerate() {
            prop_assert_eq!(bits.get(i), expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_matches_boolean_model(
        len in 1usize..512,
        ops in prop::collection::vec((0u8..3, 0usize..512), 0..200)
    ) {
        let mut bits = BitArray::new(len).unwrap();
        let mut model = vec![false; len];

        apply_ops(&mut bits, &mut model, &ops);

        for (i, &expected) in model.iter().enumerate() {
            prop_assert_eq!(bits.get(i), expected);
        }

        let set_count = model.iter().filter(|&&b| b).count();
        prop_assert_eq!(bits.popcount(), set_count);
        prop_assert_eq!(bits.all(), set_count == len);
        prop_assert_eq!(bits.any(), set_count > 0);
        prop_assert_eq!(bits.none(), set_count == 0);
    }
}

proptest! {
    #[test]
    fn prop_flip_twice_restores(
        len in 1usize..256,
        raw_idx in 0usize..256,
        seed_ops in prop::collection::vec((0u8..3, 0usize..256), 0..50)
    ) {
        let mut bits = BitArray::new(len).unwrap();
        let mut model = vec![false; len];
        apply_ops(&mut bits, &mut model, &seed_ops);

        let idx = raw_idx % len;
        let before = bits.get(idx);
        bits.flip(idx);
        prop_assert_eq!(bits.get(idx), !before);
        bits.flip(idx);
        prop_assert_eq!(bits.get(idx), before);
    }
}

//
// -----------------------------------------------------------------------------
// Bulk Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_fill_sets_every_logical_bit(len in 1usize..2048) {
        let mut bits = BitArray::new(len).unwrap();
        bits.fill();

        prop_assert!(bits.all());
        prop_assert!(bits.any());
        prop_assert!(!bits.none());
        prop_assert_eq!(bits.popcount(), len);

        for i in 0..len {
            prop_assert!(bits.get(i));
        }
    }
}

proptest! {
    #[test]
    fn prop_clear_resets_any_state(
        len in 1usize..512,
        ops in prop::collection::vec((0u8..3, 0usize..512), 0..100),
        fill_first in any::<bool>()
    ) {
        let mut bits = BitArray::new(len).unwrap();
        let mut model = vec![false; len];
        apply_ops(&mut bits, &mut model, &ops);
        if fill_first {
            bits.fill();
        }

        bits.clear();

        prop_assert!(bits.none());
        prop_assert!(!bits.any());
        prop_assert_eq!(bits.popcount(), 0);
        prop_assert!(bits.as_bytes().iter().all(|&b| b == 0));
    }
}

//
// -----------------------------------------------------------------------------
// Padding Bits
// -----------------------------------------------------------------------------

proptest! {
    // Padding bits of the final byte must read zero no matter which
    // sequence of operations ran, or the whole-byte aggregate scans
    // would report wrong results.
    #[test]
    fn prop_padding_bits_stay_unset(
        len in 1usize..512,
        ops in prop::collection::vec((0u8..3, 0usize..512), 0..100),
        bulk in 0u8..3
    ) {
        let mut bits = BitArray::new(len).unwrap();
        let mut model = vec![false; len];
        apply_ops(&mut bits, &mut model, &ops);
        match bulk {
            0 => bits.fill(),
            1 => bits.clear(),
            _ => {}
        }

        let loose_bits = len % 8;
        if loose_bits != 0 {
            let last = bits.as_bytes()[bits.as_bytes().len() - 1];
            let padding_mask = !((1u8 << loose_bits) - 1);
            prop_assert_eq!(last & padding_mask, 0);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Length and Capacity
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_capacity_rounds_up_to_bytes(len in 1usize..4096) {
        let bits = BitArray::new(len).unwrap();

        prop_assert_eq!(bits.len(), len);
        prop_assert_eq!(bits.capacity(), len.div_ceil(8) * 8);
        prop_assert!(bits.capacity() >= len);
        prop_assert!(bits.capacity() - len < 8);
        prop_assert_eq!(bits.capacity() == len, len % 8 == 0);
    }
}

proptest! {
    #[test]
    fn prop_fresh_array_is_empty_of_set_bits(len in 1usize..1024) {
        let bits = BitArray::new(len).unwrap();

        prop_assert!(bits.none());
        prop_assert!(!bits.any());
        prop_assert!(!bits.all());
        prop_assert_eq!(bits.popcount(), 0);
    }
}
