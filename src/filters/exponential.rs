/// Single exponential smoothing step: `prev * (1 - alpha) + next * alpha`
#[must_use]
pub fn blend(prev: f64, next: f64, alpha: f64) -> f64 {
    prev * (1.0 - alpha) + next * alpha
}

/// Exponential smoothing filter over 2D positions
#[derive(Debug, Clone)]
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<(f64, f64)>,
}

impl ExponentialFilter {
    /// Create a filter with smoothing factor `alpha`
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside `(0, 1]`.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, last: None }
    }

    /// Create a filter whose state starts at `(x, y)`
    #[must_use]
    pub fn seeded(alpha: f64, x: f64, y: f64) -> Self {
        let mut filter = Self::new(alpha);
        filter.seed(x, y);
        filter
    }

    /// Move toward `(x, y)` and return the smoothed position
    pub fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        let next = match self.last {
            Some((last_x, last_y)) => (blend(last_x, x, self.alpha), blend(last_y, y, self.alpha)),
            None => (x, y),
        };
        self.last = Some(next);
        next
    }

    /// Overwrite the filter state without smoothing
    pub fn seed(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    /// Forget the filter state; the next sample passes through
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Last smoothed position
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.last
    }

    /// Smoothing factor
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
