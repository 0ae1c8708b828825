use driftwatch_volatility::{Buffer, Reservoir};
use proptest::prelude::*;

// ── Reservoir capacity ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn reservoir_holds_exactly_size_once_overfilled(
        size in 1usize..64,
        extra in 1usize..500,
        seed in any::<u64>(),
    ) {
        let mut reservoir = Reservoir::seeded(size, seed);
        for i in 0..size + extra {
            reservoir.add(i as f64);
            prop_assert!(reservoir.get_count() <= size);
        }
        prop_assert_eq!(reservoir.get_count(), size);
        prop_assert!(reservoir.is_full());
        prop_assert!(reservoir.stddev() > 0.0);
    }

    #[test]
    fn reservoir_mean_matches_its_elements(
        values in prop::collection::vec(-1e3f64..1e3, 1..300),
        size in 1usize..32,
    ) {
        let mut reservoir = Reservoir::seeded(size, 5);
        for v in &values {
            reservoir.add(*v);
        }
        let elements = reservoir.elements();
        let direct = elements.iter().sum::<f64>() / elements.len() as f64;
        prop_assert!((reservoir.mean() - direct).abs() < 1e-6);
    }
}

// ── Buffer wrap-around ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn buffer_evicts_only_after_wrapping(
        values in prop::collection::vec(-1e3f64..1e3, 2..200),
        size in 1usize..64,
    ) {
        let mut buffer = Buffer::new(size);
        for (i, v) in values.iter().enumerate() {
            let evicted = buffer.add(*v);
            if i < size {
                prop_assert!(evicted.is_none());
                prop_assert!(!buffer.is_full());
            } else {
                prop_assert_eq!(evicted, Some(values[i - size]));
                prop_assert!(buffer.is_full());
            }
        }
    }

    #[test]
    fn buffer_mean_covers_most_recent_window(
        values in prop::collection::vec(-1e3f64..1e3, 1..200),
        size in 1usize..64,
    ) {
        let mut buffer = Buffer::new(size);
        for v in &values {
            buffer.add(*v);
        }
        let window = &values[values.len().saturating_sub(size)..];
        let direct = window.iter().sum::<f64>() / window.len() as f64;
        prop_assert!((buffer.mean() - direct).abs() < 1e-6);
        prop_assert!(buffer.stddev() > 0.0);
    }
}
