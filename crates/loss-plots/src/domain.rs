// File: crates/loss-plots/src/domain.rs
// Summary: The fixed sample points every loss is evaluated at.

use chart_core::linspace;

/// Number of samples in the standard domain.
pub const SAMPLES: usize = 1000;
/// Lower bound of the standard domain (inclusive).
pub const MIN: f64 = -5.0;
/// Upper bound of the standard domain (inclusive).
pub const MAX: f64 = 5.0;

/// Ordered, evenly spaced sample points. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    xs: Vec<f64>,
}

impl Domain {
    pub fn new(min: f64, max: f64, samples: usize) -> Self {
        Self { xs: linspace(min, max, samples) }
    }

    /// 1000 points spanning [-5, 5], both ends included.
    pub fn standard() -> Self {
        Self::new(MIN, MAX, SAMPLES)
    }

    pub fn samples(&self) -> &[f64] {
        &self.xs
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// `(x, f(x))` for every sample, in order.
    pub fn evaluate(&self, f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
        self.xs.iter().map(|&x| (x, f(x))).collect()
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::standard()
    }
}
