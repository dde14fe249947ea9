// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::grid::GridStyle;
use crate::legend::{draw_legend, LegendPosition};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

const TICK_LEN: f32 = 3.5;
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 13.0;
const TITLE_FONT: f32 = 15.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text (title, axis labels, ticks, legend labels).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// One figure: axes, a title, and line series painted in insertion order.
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: GridStyle,
    pub legend: Option<LegendPosition>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            grid: GridStyle::default(),
            legend: Some(LegendPosition::UpperRight),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Render into a fresh raster surface and return the PNG bytes.
    /// The surface lives only for the duration of this call.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;

        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;

        let bytes = data.as_bytes().to_vec();
        debug!(title = %self.title, series = self.series.len(), bytes = bytes.len(), "rendered chart");
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating or overwriting it.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
        std::fs::write(path, &bytes).map_err(|e| ChartError::io(path, e))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let xs = LinearScale::horizontal(self.x_axis.min, self.x_axis.max, plot.left as f32, plot.right as f32);
        let ys = LinearScale::vertical(self.y_axis.min, self.y_axis.max, plot.top as f32, plot.bottom as f32);
        let shaper = opts.draw_labels.then(TextShaper::new);

        let x_ticks = self.x_axis.ticks();
        let y_ticks = self.y_axis.ticks();

        if self.grid.visible {
            draw_grid(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, &self.grid);
        }

        // Series, clipped to the plot rect; later series paint over earlier ones.
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &xs, &ys, s);
        }
        canvas.restore();

        draw_frame(canvas, &plot, &opts.theme);
        draw_ticks(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, &opts.theme, shaper.as_ref());

        if let Some(sh) = &shaper {
            let theme = &opts.theme;
            let cx = (plot.left + plot.right) as f32 * 0.5;
            let cy = (plot.top + plot.bottom) as f32 * 0.5;
            if !self.title.is_empty() {
                sh.draw_centered(canvas, &self.title, cx, plot.top as f32 - 12.0, TITLE_FONT, theme.axis_label);
            }
            sh.draw_centered(canvas, &self.x_axis.label, cx, opts.height as f32 - 12.0, LABEL_FONT, theme.axis_label);
            sh.draw_vertical(canvas, &self.y_axis.label, 16.0, cy, LABEL_FONT, theme.axis_label);
        }

        if let Some(position) = self.legend {
            draw_legend(canvas, &plot, position, &self.series, &opts.theme, shaper.as_ref());
        }
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

/// Stroke paint for a series: color, width and dash pattern.
pub(crate) fn stroke_paint(series: &Series) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(series.color.to_skia());
    if let Some(intervals) = series.style.intervals(series.width) {
        stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    stroke
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    style: &GridStyle,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(style.color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(style.width);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    let (l, r) = (plot.left as f32, plot.right as f32);

    // verticals
    for (v, _) in x_ticks {
        let x = xs.to_px(*v);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals
    for (v, _) in y_ticks {
        let y = ys.to_px(*v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(plot.to_skia(), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_ticks(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);

    let (l, b) = (plot.left as f32, plot.bottom as f32);

    for (v, label) in x_ticks {
        let x = xs.to_px(*v);
        canvas.draw_line((x, b), (x, b + TICK_LEN), &tick);
        if let Some(sh) = shaper {
            sh.draw_centered(canvas, label, x, b + TICK_LEN + TICK_FONT + 2.0, TICK_FONT, theme.tick);
        }
    }
    for (v, label) in y_ticks {
        let y = ys.to_px(*v);
        canvas.draw_line((l - TICK_LEN, y), (l, y), &tick);
        if let Some(sh) = shaper {
            sh.draw_right(canvas, label, l - TICK_LEN - 3.0, y + TICK_FONT * 0.35, TICK_FONT, theme.tick);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    // Non-finite samples break the line instead of being connected through.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in data {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (xs.to_px(x), ys.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    canvas.draw_path(&path, &stroke_paint(series));
}
