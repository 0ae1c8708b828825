use driftwatch_adwin::AdaptiveWindow;
use driftwatch_core::config::VolatilityConfig;
use driftwatch_core::IDriftDetector;
use driftwatch_ddm::Ddm;
use driftwatch_volatility::VolatilityDetector;

/// Inner detector that fires after a scripted number of samples, cycling
/// through `intervals`.
struct Scripted {
    intervals: Vec<u64>,
    next: usize,
    since: u64,
}

impl Scripted {
    fn new(intervals: &[u64]) -> Self {
        Self {
            intervals: intervals.to_vec(),
            next: 0,
            since: 0,
        }
    }

    fn switch_to(&mut self, intervals: &[u64]) {
        self.intervals = intervals.to_vec();
        self.next = 0;
    }
}

impl IDriftDetector for Scripted {
    fn update(&mut self, _value: f64) -> bool {
        self.since += 1;
        if self.since == self.intervals[self.next] {
            self.since = 0;
            self.next = (self.next + 1) % self.intervals.len();
            true
        } else {
            false
        }
    }

    fn estimate(&self) -> f64 {
        0.0
    }

    fn reset(&mut self) {
        self.next = 0;
        self.since = 0;
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

fn seeded(size: usize) -> VolatilityConfig {
    VolatilityConfig {
        size,
        seed: Some(1),
        ..VolatilityConfig::default()
    }
}

/// Feed samples until the inner detector has fired `drifts` times,
/// returning how many of those steps reported a volatility shift.
fn run_drifts<D: IDriftDetector>(vd: &mut VolatilityDetector<D>, drifts: usize) -> usize {
    let mut seen = 0;
    let mut shifts = 0;
    while seen < drifts {
        if vd.update(0.0) {
            shifts += 1;
        }
        if vd.drift_found() {
            seen += 1;
        }
    }
    shifts
}

// ── Steady drift rate ────────────────────────────────────────────────────

#[test]
fn steady_intervals_never_shift() {
    let mut vd = VolatilityDetector::from_config(Scripted::new(&[10]), &seeded(4)).unwrap();
    assert_eq!(run_drifts(&mut vd, 100), 0);
    assert_eq!(vd.relative_variance(), Some(1.0));
    assert!(vd.recent_intervals().iter().all(|&i| i == 10.0));
    assert_eq!(vd.samples(), 1_000);
    assert_eq!(vd.last_drift_at(), Some(1_000));
}

#[test]
fn non_drift_steps_report_false() {
    let mut vd = VolatilityDetector::from_config(Scripted::new(&[5]), &seeded(4)).unwrap();
    for _ in 0..4 {
        assert!(!vd.update(0.0));
        assert!(!vd.drift_found());
    }
    assert!(!vd.update(0.0));
    assert!(vd.drift_found());
    assert_eq!(vd.buffer().len(), 1);
    assert_eq!(vd.buffer().mean(), 5.0);
}

// ── Filling buffer and reservoir ─────────────────────────────────────────

#[test]
fn no_comparison_until_buffer_and_reservoir_fill() {
    let mut vd = VolatilityDetector::from_config(Scripted::new(&[2, 50]), &seeded(4)).unwrap();
    // Buffer wraps on drift 5; reservoir receives evictions from drift 6 on.
    assert_eq!(run_drifts(&mut vd, 8), 0);
    assert!(vd.relative_variance().is_none());
    assert_eq!(vd.reservoir().get_count(), 3);

    // Both sides hold alternating 2/50 intervals: same spread, no shift.
    assert_eq!(run_drifts(&mut vd, 1), 0);
    let relative = vd.relative_variance().unwrap();
    assert!((relative - 1.0).abs() < 1e-12);
}

// ── Rate change ──────────────────────────────────────────────────────────

#[test]
fn erratic_intervals_after_steady_ones_shift() {
    let mut vd = VolatilityDetector::from_config(Scripted::new(&[10]), &seeded(4)).unwrap();
    assert_eq!(run_drifts(&mut vd, 50), 0);

    vd.detector_mut().switch_to(&[3, 30]);
    let mut shifted_after = None;
    for drift in 1..=4 {
        if run_drifts(&mut vd, 1) > 0 {
            shifted_after = Some(drift);
            break;
        }
    }
    assert_eq!(shifted_after, Some(1));
    assert!(vd.volatility_found());
    assert!(vd.relative_variance().unwrap() > 1.05);
    assert!(vd.buffer().is_empty(), "buffer is cleared on a shift");
}

#[test]
fn calmer_intervals_after_erratic_ones_shift() {
    let mut vd = VolatilityDetector::from_config(Scripted::new(&[3, 30]), &seeded(8)).unwrap();
    run_drifts(&mut vd, 60);

    vd.detector_mut().switch_to(&[15]);
    // Drain the buffer's erratic intervals, then a full calm buffer compares low.
    let shifts = run_drifts(&mut vd, 20);
    assert!(shifts >= 1);
}

// ── Ownership and composition ────────────────────────────────────────────

#[test]
fn borrowed_inner_detector_stays_with_caller() {
    let mut adwin = AdaptiveWindow::new(0.01);
    {
        let mut vd = VolatilityDetector::new(&mut adwin, 8);
        for i in 0..4_000 {
            let value = if (i / 500) % 2 == 0 { 0.0 } else { 10.0 };
            vd.update(value);
        }
        assert!(vd.last_drift_at().is_some());
        assert!(vd.recent_intervals().iter().any(|&i| i > 0.0));
    }
    assert!(adwin.width() < 4_000, "inner ADWIN kept cutting its window");
}

#[test]
fn wraps_ddm_behind_a_box() {
    let inner: Box<dyn IDriftDetector> = Box::new(Ddm::new());
    let mut vd = VolatilityDetector::from_config(inner, &seeded(4)).unwrap();
    assert_eq!(vd.name(), "volatility");
    for _ in 0..50 {
        vd.update(0.0);
    }
    assert_eq!(vd.estimate(), 0.0);
    vd.update(1.0);
    assert!(vd.drift_found());
}

#[test]
fn marks_itself_as_a_volatility_reporter() {
    let vd = VolatilityDetector::from_config(AdaptiveWindow::default(), &seeded(4)).unwrap();
    assert!(vd.reports_volatility());
    assert!(!vd.detector().reports_volatility());

    let boxed: Box<dyn IDriftDetector> = Box::new(vd);
    assert!(boxed.reports_volatility());
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut vd = VolatilityDetector::from_config(Scripted::new(&[4, 9, 2, 17, 6]), &seeded(4))
            .unwrap();
        (0..2_000).map(|_| vd.update(0.0)).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn reset_clears_components_and_inner_detector() {
    let mut vd = VolatilityDetector::from_config(Scripted::new(&[3]), &seeded(2)).unwrap();
    run_drifts(&mut vd, 10);
    vd.reset();
    assert_eq!(vd.samples(), 0);
    assert!(vd.buffer().is_empty());
    assert!(vd.reservoir().is_empty());
    assert!(vd.last_drift_at().is_none());
    assert_eq!(vd.detector().since, 0);
}

#[test]
fn invalid_config_is_rejected() {
    let config = VolatilityConfig {
        confidence: 1.5,
        ..VolatilityConfig::default()
    };
    assert!(VolatilityDetector::from_config(Scripted::new(&[1]), &config).is_err());
}
