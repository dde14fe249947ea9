// File: crates/chart-core/src/series.rs
// Summary: Labeled line series with color, stroke width and dash style.

use skia_safe as skia;

/// Closed line palette, named after the classic plotting short codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineColor {
    Black,
    Red,
    Magenta,
    Cyan,
    Green,
    Blue,
}

impl LineColor {
    pub fn to_skia(self) -> skia::Color {
        match self {
            LineColor::Black => skia::Color::from_argb(255, 0, 0, 0),
            LineColor::Red => skia::Color::from_argb(255, 255, 0, 0),
            LineColor::Magenta => skia::Color::from_argb(255, 191, 0, 191),
            LineColor::Cyan => skia::Color::from_argb(255, 0, 191, 191),
            LineColor::Green => skia::Color::from_argb(255, 0, 128, 0),
            LineColor::Blue => skia::Color::from_argb(255, 0, 0, 255),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    /// On/off dash intervals in pixels for a stroke of `width`, or `None` when solid.
    pub fn intervals(self, width: f32) -> Option<[f32; 2]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some([3.7 * width.max(1.0), 1.6 * width.max(1.0)]),
        }
    }
}

/// Default stroke width in pixels.
pub const DEFAULT_WIDTH: f32 = 2.0;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub color: LineColor,
    pub width: f32,
    pub style: LineStyle,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            data_xy: data,
            color: LineColor::Blue,
            width: DEFAULT_WIDTH,
            style: LineStyle::Solid,
        }
    }

    /// Sample `f` at every point of `xs`.
    pub fn from_fn(label: impl Into<String>, xs: &[f64], f: impl Fn(f64) -> f64) -> Self {
        Self::line(label, xs.iter().map(|&x| (x, f(x))).collect())
    }

    pub fn with_color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Smallest and largest finite y value, if any.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.data_xy
            .iter()
            .map(|&(_, y)| y)
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}
