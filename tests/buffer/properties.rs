//! Property Tests
//!
//! Property-based coverage of the sequential contract: whatever goes in
//! comes back out, once, in order.

use proptest::collection::vec;
use proptest::prelude::*;
use transactional_buffer::TransactionalBuffer;

proptest! {
    /// A drain returns exactly the pushed values, in insertion order
    #[test]
    fn consume_returns_pushes_in_order(values in vec(any::<i64>(), 0..512)) {
        let buffer = TransactionalBuffer::new();
        for v in &values {
            buffer.push_back(*v);
        }

        prop_assert_eq!(buffer.consume(), values);
        prop_assert!(buffer.is_empty());
    }

    /// len() tracks every push; is_empty() iff len() == 0
    #[test]
    fn len_tracks_push_count(values in vec(any::<u8>(), 0..256)) {
        let buffer = TransactionalBuffer::new();
        for (i, v) in values.iter().enumerate() {
            buffer.push_back(*v);
            prop_assert_eq!(buffer.len(), i + 1);
            prop_assert!(!buffer.is_empty());
        }

        if values.is_empty() {
            prop_assert!(buffer.is_empty());
        }
    }

    /// The second of two back-to-back drains is always empty
    #[test]
    fn drain_is_idempotent(values in vec(any::<i64>(), 1..128)) {
        let buffer = TransactionalBuffer::new();
        buffer.extend(values.clone());

        prop_assert_eq!(buffer.consume(), values);
        prop_assert!(buffer.consume().is_empty());
        prop_assert_eq!(buffer.len(), 0);
    }

    /// Alternating accumulate/drain rounds deliver each round's values to
    /// that round's drain and nothing else
    #[test]
    fn rounds_are_isolated(rounds in vec(vec(any::<i64>(), 0..32), 0..16)) {
        let buffer = TransactionalBuffer::new();
        for round in &rounds {
            buffer.extend(round.clone());
            prop_assert_eq!(&buffer.consume(), round);
        }

        prop_assert!(buffer.is_empty());
    }
}
