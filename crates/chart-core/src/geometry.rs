// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area left over after removing `insets` from a `width` x `height` surface.
    /// Degenerate sizes collapse to an empty rect instead of inverting.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = (insets.left as i32).min(width);
        let top = (insets.top as i32).min(height);
        let right = (width - insets.right as i32).max(left);
        let bottom = (height - insets.bottom as i32).max(top);
        Self::from_ltrb(left, top, right, bottom)
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_subtracts_insets() {
        let r = RectI32::plot_area(640, 480, &Insets::new(72, 20, 40, 56));
        assert_eq!(r, RectI32::from_ltrb(72, 40, 620, 424));
        assert_eq!(r.width(), 548);
        assert_eq!(r.height(), 384);
    }

    #[test]
    fn plot_area_never_inverts() {
        let r = RectI32::plot_area(50, 30, &Insets::new(40, 40, 20, 20));
        assert!(r.width() >= 0);
        assert!(r.height() >= 0);
    }
}
