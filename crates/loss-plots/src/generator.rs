// File: crates/loss-plots/src/generator.rs
// Summary: Builds the classification and regression loss charts and writes them as PNGs.

use std::path::{Path, PathBuf};

use chart_core::{Axis, Chart, GridStyle, LegendPosition, RenderOptions, Result, Series};
use tracing::{debug, info};

use crate::domain::Domain;
use crate::losses::Loss;

pub const CLASSIFICATION_FILE: &str = "plot_losses_classification.png";
pub const REGRESSION_FILE: &str = "plot_losses_regression.png";

/// Visible x range shared by both charts.
pub const X_RANGE: (f64, f64) = (-5.0, 5.0);
/// Visible y range shared by both charts.
pub const Y_RANGE: (f64, f64) = (-0.3, 8.0);

/// Evaluates the losses over a fixed domain and renders one chart per family.
///
/// Each chart is built, rendered and dropped inside a single call, so nothing
/// drawn for one chart can leak into the next.
pub struct ChartGenerator {
    domain: Domain,
    output_dir: PathBuf,
    options: RenderOptions,
}

impl ChartGenerator {
    /// Writes into the current working directory.
    pub fn new() -> Self {
        Self {
            domain: Domain::standard(),
            output_dir: PathBuf::new(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Six classification losses of the edge `target * output`.
    pub fn classification_chart(&self) -> Chart {
        let mut chart = framed("classification loss functions", "edge = target * output", "loss(edge)");
        for loss in Loss::CLASSIFICATION {
            chart.add_series(self.curve(loss));
        }
        chart
    }

    /// Three regression losses of the diff `target - output`.
    pub fn regression_chart(&self) -> Chart {
        let mut chart = framed("regression loss functions", "diff = target - output", "loss (diff)");
        for loss in Loss::REGRESSION {
            chart.add_series(self.curve(loss));
        }
        chart
    }

    pub fn build_classification_chart(&self) -> Result<PathBuf> {
        self.write(self.classification_chart(), CLASSIFICATION_FILE)
    }

    pub fn build_regression_chart(&self) -> Result<PathBuf> {
        self.write(self.regression_chart(), REGRESSION_FILE)
    }

    /// Classification first, then regression. Stops at the first failure.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        Ok(vec![self.build_classification_chart()?, self.build_regression_chart()?])
    }

    fn curve(&self, loss: Loss) -> Series {
        let series = Series::line(loss.label(), self.domain.evaluate(|x| loss.value(x)))
            .with_color(loss.color())
            .with_width(loss.width())
            .with_style(loss.style());
        if let Some((lo, hi)) = series.y_range() {
            debug!(
                loss = loss.label(),
                samples = series.len(),
                min = lo,
                max = hi,
                convex = loss.is_convex(),
                smooth = loss.is_smooth(),
                "evaluated curve"
            );
        }
        series
    }

    // Takes the chart by value: it is dropped once the file is written.
    fn write(&self, chart: Chart, file_name: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        chart.render_to_png(&self.options, &path)?;
        info!(title = %chart.title, curves = chart.series.len(), path = %path.display(), "chart done");
        Ok(path)
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn framed(title: &str, x_label: &str, y_label: &str) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::new(x_label, X_RANGE.0, X_RANGE.1);
    chart.y_axis = Axis::new(y_label, Y_RANGE.0, Y_RANGE.1);
    chart.grid = GridStyle::light();
    chart.legend = Some(LegendPosition::UpperRight);
    chart
}
