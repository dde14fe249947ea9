// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

/// Maps a data interval `[vmin, vmax]` linearly onto a pixel interval.
/// `px_at_min` may be greater than `px_at_max` (Y axes grow upwards).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_at_min: f32,
    pub px_at_max: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_at_min: f32, px_at_max: f32) -> Self {
        let mut s = Self { vmin, vmax, px_at_min, px_at_max };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale: `min` at the left edge, `max` at the right edge.
    pub fn horizontal(vmin: f64, vmax: f64, left_px: f32, right_px: f32) -> Self {
        Self::new(vmin, vmax, left_px, right_px)
    }

    /// Vertical scale: `min` at the bottom edge, `max` at the top edge.
    pub fn vertical(vmin: f64, vmax: f64, top_px: f32, bottom_px: f32) -> Self {
        Self::new(vmin, vmax, bottom_px, top_px)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_at_min + t as f32 * (self.px_at_max - self.px_at_min)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span_px = self.px_at_max - self.px_at_min;
        if span_px.abs() < f32::EPSILON { return self.vmin; }
        self.vmin + ((px - self.px_at_min) / span_px) as f64 * (self.vmax - self.vmin)
    }
}
