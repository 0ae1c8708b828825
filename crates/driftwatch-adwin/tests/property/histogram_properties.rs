use driftwatch_adwin::{AdaptiveWindow, ExponentialHistogram};
use driftwatch_core::config::AdwinConfig;
use proptest::prelude::*;

/// ceil(log2(n + 1)), i.e. the bit length of `n`.
fn log2_ceil_plus_one(n: u64) -> u64 {
    (u64::BITS - n.leading_zeros()) as u64
}

fn arb_stream() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![-100.0f64..100.0, Just(0.0), Just(1.0), 1_000.0f64..2_000.0],
        1..600,
    )
}

// ── Conservation: width equals Σ 2^row over stored buckets ───────────────

proptest! {
    #[test]
    fn window_width_matches_histogram(
        values in arb_stream(),
        max_buckets in 2usize..8,
        delta in 0.001f64..0.3,
    ) {
        let config = AdwinConfig {
            delta,
            max_buckets,
            min_window_length: 10,
            ..AdwinConfig::default()
        };
        let mut window = AdaptiveWindow::from_config(&config).unwrap();
        for v in values {
            window.update(v);
            prop_assert_eq!(window.width(), window.histogram().total_observations());
            prop_assert!(window.variance() >= 0.0);
        }
    }
}

// ── Bounded memory ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn histogram_bucket_count_is_logarithmic(
        n in 1usize..5_000,
        max_buckets in 2usize..8,
    ) {
        let mut histogram = ExponentialHistogram::new(max_buckets);
        for i in 1..=n {
            histogram.push_front(i as f64, 0.0);
            histogram.compress();
            let bound = (max_buckets + 1) as u64 * log2_ceil_plus_one(i as u64);
            prop_assert!(
                histogram.bucket_count() as u64 <= bound,
                "{} buckets after {} inserts exceeds {}",
                histogram.bucket_count(),
                i,
                bound
            );
        }
        prop_assert_eq!(histogram.total_observations(), n as u64);
        for row in 0..histogram.row_count() {
            prop_assert!(histogram.row_len(row) <= max_buckets + 1);
        }
    }

    #[test]
    fn window_bucket_count_is_logarithmic(values in arb_stream()) {
        let mut window = AdaptiveWindow::new(0.01);
        for (i, v) in values.into_iter().enumerate() {
            window.update(v);
            let bound = 6 * log2_ceil_plus_one(i as u64 + 1);
            prop_assert!(window.bucket_count() as u64 <= bound);
        }
    }
}

// ── Estimate stays inside the observed range ─────────────────────────────

proptest! {
    #[test]
    fn estimate_is_a_mean_of_seen_values(values in arb_stream()) {
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mut window = AdaptiveWindow::new(0.01);
        for v in &values {
            window.update(*v);
        }
        let tol = 1e-6 * (1.0 + hi.abs().max(lo.abs()));
        prop_assert!(window.estimate() >= lo - tol && window.estimate() <= hi + tol);
        prop_assert!(window.width() >= 1);
    }
}
