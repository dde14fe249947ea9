// File: crates/loss-plots/src/lib.rs
// Summary: Loss functions and the generator that plots them; used by the `plot-losses` binary.

pub mod domain;
pub mod generator;
pub mod losses;

pub use chart_core::{Chart, ChartError, LegendPosition, Series};
pub use domain::Domain;
pub use generator::{ChartGenerator, CLASSIFICATION_FILE, REGRESSION_FILE};
pub use losses::{sign, Family, Loss};
