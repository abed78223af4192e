// File: crates/skycast-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNG and SVG.

use skycast_chart::{ChartOptions, ChartRenderer, ChartSeries, Document};

#[test]
fn render_smoke_png() {
    let mut doc = Document::new();
    doc.add_canvas("rainChart", 800, 400).expect("allocate canvas");

    let chart = ChartRenderer::render(
        &mut doc,
        "rainChart",
        &ChartSeries::rain_probability(),
        &ChartOptions::rain_forecast(),
    )
    .expect("render should succeed");
    assert_eq!(chart.target, "rainChart");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let surface = doc.surface_mut("rainChart").expect("surface still attached");
    surface.save_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = surface.to_png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_svg() {
    let mut doc = Document::new();
    doc.add_canvas("rainChart", 600, 300).expect("allocate canvas");
    let mut opts = ChartOptions::rain_forecast();
    opts.draw_labels = false;
    let chart = ChartRenderer::render(&mut doc, "rainChart", &ChartSeries::rain_probability(), &opts)
        .expect("render");

    let svg = String::from_utf8(chart.to_svg_bytes()).expect("utf8 svg");
    assert!(svg.contains("<svg"), "svg root element");

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.save_svg(&out).expect("write svg");
    assert!(std::fs::metadata(&out).expect("svg exists").len() > 0);
}
