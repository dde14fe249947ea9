// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, LineColor, LineStyle, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new().with_title("smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::line(
        "zigzag",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));
    chart.add_series(
        Series::line("diagonal", vec![(0.0, 0.0), (4.0, 4.0)])
            .with_color(LineColor::Black)
            .with_style(LineStyle::Dashed),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn zero_sized_surface_is_an_error() {
    let chart = Chart::new();
    let opts = RenderOptions { width: 0, height: 0, ..RenderOptions::default() };
    let err = chart.render_to_png_bytes(&opts).expect_err("empty surface");
    assert!(matches!(err, chart_core::ChartError::Surface { .. }));
}

#[test]
fn unwritable_target_reports_path() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    // a directory cannot be overwritten by a file
    let dir = std::path::PathBuf::from("target/test_out/occupied.png");
    std::fs::create_dir_all(&dir).unwrap();
    let err = chart.render_to_png(&opts, &dir).expect_err("write into a directory");
    match err {
        chart_core::ChartError::Io { path, .. } => assert_eq!(path, dir),
        other => panic!("unexpected error: {other}"),
    }
}
