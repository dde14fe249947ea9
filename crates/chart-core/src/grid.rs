// File: crates/chart-core/src/grid.rs
// Summary: Grid styling and tick layout helpers.

use skia_safe as skia;

/// `steps` evenly spaced values over `[start, end]`. Both endpoints are exact.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    out[steps - 1] = end;
    out
}

/// Round `span / target` up to the nearest 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = span.abs();
    if span == 0.0 || !span.is_finite() || target == 0 { return 1.0; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions: multiples of a nice step that fall inside `[min, max]`.
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(hi - lo, target);
    let tol = step * 1e-9;
    let first = ((lo - tol) / step).ceil() as i64;
    let last = ((hi + tol) / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < tol { 0.0 } else { v }
        })
        .collect()
}

/// Format a tick value with as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let v = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}

/// Grid line appearance.
#[derive(Clone, Copy, Debug)]
pub struct GridStyle {
    pub visible: bool,
    pub color: skia::Color,
    pub width: f32,
}

impl GridStyle {
    /// Thin light grey lines at 25% opacity.
    pub fn light() -> Self {
        Self {
            visible: true,
            color: skia::Color::from_argb(64, 128, 128, 128),
            width: 0.5,
        }
    }

    pub fn hidden() -> Self {
        Self { visible: false, ..Self::light() }
    }
}

impl Default for GridStyle {
    fn default() -> Self { Self::light() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_pins_both_ends() {
        let v = linspace(-5.0, 5.0, 1000);
        assert_eq!(v.len(), 1000);
        assert_eq!(v[0], -5.0);
        assert_eq!(v[999], 5.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 8), 2.0);
        assert_eq!(nice_step(8.3, 8), 2.0);
        assert_eq!(nice_step(100.0, 10), 10.0);
        assert_eq!(nice_step(40.0, 8), 5.0);
    }

    #[test]
    fn ticks_stay_inside_range() {
        assert_eq!(ticks(-5.0, 5.0, 8), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
        assert_eq!(ticks(-0.3, 8.0, 8), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(-4.0, 2.0), "-4");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
