// File: crates/chart-core/src/legend.rs
// Summary: Boxed legend anchored at a corner of the plot area.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;

pub const FONT_SIZE: f32 = 12.0;
const PAD: f32 = 6.0;
const MARGIN: f32 = 8.0;
const SAMPLE_LEN: f32 = 28.0;
const GAP: f32 = 8.0;
const ROW_HEIGHT: f32 = FONT_SIZE * 1.45;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendPosition {
    /// Top-left corner of a `w` x `h` legend box inside `plot`.
    pub fn anchor(self, plot: &RectI32, w: f32, h: f32) -> (f32, f32) {
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        match self {
            LegendPosition::UpperRight => (r - MARGIN - w, t + MARGIN),
            LegendPosition::UpperLeft => (l + MARGIN, t + MARGIN),
            LegendPosition::LowerLeft => (l + MARGIN, b - MARGIN - h),
            LegendPosition::LowerRight => (r - MARGIN - w, b - MARGIN - h),
        }
    }
}

/// Width and height of the legend box for `series`.
/// Without a shaper, label widths are estimated from their character count.
pub fn box_size(series: &[Series], shaper: Option<&TextShaper>) -> (f32, f32) {
    let label_w = series
        .iter()
        .map(|s| match shaper {
            Some(sh) => sh.measure_width(&s.label, FONT_SIZE),
            None => s.label.chars().count() as f32 * FONT_SIZE * 0.55,
        })
        .fold(0.0f32, f32::max);
    let w = PAD + SAMPLE_LEN + GAP + label_w + PAD;
    let h = PAD * 2.0 + ROW_HEIGHT * series.len() as f32;
    (w, h)
}

/// Paint the legend box, one row per series in insertion order.
pub fn draw_legend(
    canvas: &skia::Canvas,
    plot: &RectI32,
    position: LegendPosition,
    series: &[Series],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    if series.is_empty() {
        return;
    }
    let (w, h) = box_size(series, shaper);
    let (x, y) = position.anchor(plot, w, h);
    let rect = skia::Rect::from_xywh(x, y, w, h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    for (i, s) in series.iter().enumerate() {
        let row_mid = y + PAD + ROW_HEIGHT * (i as f32 + 0.5);
        let x0 = x + PAD;
        let x1 = x0 + SAMPLE_LEN;

        let stroke = crate::chart::stroke_paint(s);
        canvas.draw_line((x0, row_mid), (x1, row_mid), &stroke);

        if let Some(sh) = shaper {
            sh.draw_left(canvas, &s.label, x1 + GAP, row_mid + FONT_SIZE * 0.35, FONT_SIZE, theme.axis_label);
        }
    }
}
