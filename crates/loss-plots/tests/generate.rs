// File: crates/loss-plots/tests/generate.rs
// Purpose: End-to-end chart generation: curve content, framing, files on disk, idempotence.

use std::path::{Path, PathBuf};

use loss_plots::{Chart, ChartError, ChartGenerator, LegendPosition, Series, CLASSIFICATION_FILE, REGRESSION_FILE};

const TOL: f64 = 1e-9;

/// Same 1000 samples over [-5, 5], derived independently of the crate.
fn rederived_domain() -> Vec<f64> {
    (0..1000).map(|i| -5.0 + 10.0 * i as f64 / 999.0).collect()
}

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out").join(name);
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

fn assert_curve(series: &Series, f: impl Fn(f64) -> f64) {
    let xs = rederived_domain();
    assert_eq!(series.data_xy.len(), xs.len(), "{}", series.label);
    for (&(x, y), &want_x) in series.data_xy.iter().zip(&xs) {
        assert!((x - want_x).abs() < TOL, "{}: x {x} vs {want_x}", series.label);
        let want = f(want_x);
        assert!((y - want).abs() < TOL, "{}: f({x}) = {y}, expected {want}", series.label);
    }
}

fn labels(chart: &Chart) -> Vec<&str> {
    chart.series.iter().map(|s| s.label.as_str()).collect()
}

fn png_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("list dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "png"))
        .count()
}

#[test]
fn classification_curves_match_formulas() {
    let chart = ChartGenerator::new().classification_chart();
    let curves = &chart.series;
    assert_eq!(labels(&chart), ["0-1 loss", "hinge", "savage", "tangent", "logistic", "exponential"]);

    let sign = |x: f64| if x > 0.0 { 1.0 } else if x < 0.0 { -1.0 } else { 0.0 };
    assert_curve(&curves[0], |x| (1.0 - sign(x)) / 2.0);
    assert_curve(&curves[1], |x| (1.0 - x).max(0.0));
    assert_curve(&curves[2], |x| 1.0 / (1.0 + x.exp()).powi(2));
    assert_curve(&curves[3], |x| (2.0 * x.atan() - 1.0).powi(2));
    assert_curve(&curves[4], |x| (1.0 + (-x).exp()).ln());
    assert_curve(&curves[5], |x| (-x).exp());
}

#[test]
fn regression_curves_match_formulas() {
    let chart = ChartGenerator::new().regression_chart();
    let curves = &chart.series;
    assert_eq!(labels(&chart), ["absolute", "squared", "cauchy"]);

    assert_curve(&curves[0], f64::abs);
    assert_curve(&curves[1], |x| x * x / 2.0);
    assert_curve(&curves[2], |x| (1.0 + x * x).ln() / 2.0);
}

#[test]
fn chart_framing() {
    use loss_plots::losses::Loss;

    let g = ChartGenerator::new();
    let c = g.classification_chart();
    assert_eq!(c.title, "classification loss functions");
    assert_eq!(c.x_axis.label, "edge = target * output");
    assert_eq!(c.y_axis.label, "loss(edge)");

    let r = g.regression_chart();
    assert_eq!(r.title, "regression loss functions");
    assert_eq!(r.x_axis.label, "diff = target - output");
    assert_eq!(r.y_axis.label, "loss (diff)");

    for chart in [&c, &r] {
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (-5.0, 5.0));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (-0.3, 8.0));
        assert!(chart.grid.visible);
        assert_eq!(chart.grid.color.a(), 64, "grid at 25% opacity");
        assert!(chart.grid.width <= 1.0, "thin grid");
        assert_eq!(chart.legend, Some(LegendPosition::UpperRight));
    }

    for (s, loss) in c.series.iter().zip(Loss::CLASSIFICATION).chain(r.series.iter().zip(Loss::REGRESSION)) {
        assert_eq!(s.color, loss.color(), "{}", s.label);
        assert_eq!(s.style, loss.style(), "{}", s.label);
        assert_eq!(s.width, 2.0, "{}", s.label);
    }
}

#[test]
fn run_writes_exactly_two_pngs() {
    let dir = fresh_dir("generate_run");
    let paths = ChartGenerator::new().with_output_dir(&dir).run().expect("run");

    assert_eq!(paths, vec![dir.join(CLASSIFICATION_FILE), dir.join(REGRESSION_FILE)]);
    assert_eq!(png_count(&dir), 2);
    for p in &paths {
        let bytes = std::fs::read(p).expect("read png");
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{} is a PNG", p.display());
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!((img.width(), img.height()), (640, 480));
    }
}

#[test]
fn rerun_overwrites_with_identical_pixels() {
    let dir = fresh_dir("generate_idempotent");
    let g = ChartGenerator::new().with_output_dir(&dir);

    let first: Vec<Vec<u8>> = g.run().expect("first run").iter().map(|p| std::fs::read(p).unwrap()).collect();
    let second: Vec<Vec<u8>> = g.run().expect("second run").iter().map(|p| std::fs::read(p).unwrap()).collect();

    assert_eq!(png_count(&dir), 2);
    for (a, b) in first.iter().zip(&second) {
        let a = image::load_from_memory(a).expect("decode first").to_rgba8();
        let b = image::load_from_memory(b).expect("decode second").to_rgba8();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}

#[test]
fn charts_differ_from_each_other() {
    let dir = fresh_dir("generate_distinct");
    let paths = ChartGenerator::new().with_output_dir(&dir).run().expect("run");
    let a = image::open(&paths[0]).expect("open classification").to_rgba8();
    let b = image::open(&paths[1]).expect("open regression").to_rgba8();
    assert_ne!(a.as_raw(), b.as_raw());
}

#[test]
fn unwritable_output_dir_fails_with_io_error() {
    let base = fresh_dir("generate_blocked");
    // a regular file where the output directory should be
    let blocker = base.join("not_a_dir");
    std::fs::write(&blocker, b"x").expect("write blocker");

    let err = ChartGenerator::new()
        .with_output_dir(&blocker)
        .build_classification_chart()
        .expect_err("cannot write below a file");
    assert!(matches!(err, ChartError::Io { .. }), "unexpected error: {err}");
    assert!(!blocker.join(CLASSIFICATION_FILE).exists());
}
