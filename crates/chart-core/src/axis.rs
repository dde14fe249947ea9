// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick layout.

use crate::grid::{format_tick, nice_step, ticks};

/// Roughly how many ticks an axis aims for.
pub const TARGET_TICKS: usize = 8;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("x", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("y", 0.0, 1.0) }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Tick values paired with their formatted labels.
    pub fn ticks(&self) -> Vec<(f64, String)> {
        let step = nice_step(self.span(), TARGET_TICKS);
        ticks(self.min, self.max, TARGET_TICKS)
            .into_iter()
            .map(|v| (v, format_tick(v, step)))
            .collect()
    }
}
