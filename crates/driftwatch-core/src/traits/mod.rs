//! The detector capability shared by ADWIN, DDM, and the volatility detector.

/// A streaming change detector fed one observation at a time.
///
/// Implementations are single-threaded per instance: callers serialize
/// `update` calls on one detector. Distinct instances are independent and
/// may be driven from different threads, hence the `Send` bound.
pub trait IDriftDetector: Send {
    /// Feed one observation. Returns `true` if a change was detected at this step.
    fn update(&mut self, value: f64) -> bool;

    /// Current estimate tracked by the detector (windowed mean, error rate, ...).
    fn estimate(&self) -> f64;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Whether the detector currently sits between its warning and drift levels.
    fn in_warning_zone(&self) -> bool {
        false
    }

    /// Whether `update` reports shifts in the rate of some inner detector's
    /// drifts rather than drifts in the stream itself.
    fn reports_volatility(&self) -> bool {
        false
    }

    /// Short stable identifier used in logs and reports.
    fn name(&self) -> &'static str;
}

impl<T: IDriftDetector + ?Sized> IDriftDetector for &mut T {
    fn update(&mut self, value: f64) -> bool {
        (**self).update(value)
    }

    fn estimate(&self) -> f64 {
        (**self).estimate()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn in_warning_zone(&self) -> bool {
        (**self).in_warning_zone()
    }

    fn reports_volatility(&self) -> bool {
        (**self).reports_volatility()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: IDriftDetector + ?Sized> IDriftDetector for Box<T> {
    fn update(&mut self, value: f64) -> bool {
        (**self).update(value)
    }

    fn estimate(&self) -> f64 {
        (**self).estimate()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn in_warning_zone(&self) -> bool {
        (**self).in_warning_zone()
    }

    fn reports_volatility(&self) -> bool {
        (**self).reports_volatility()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
