// File: crates/skycast-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the rain chart (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the golden comparison to ease first run.
// - Theme signature pixels (background, fill, empty plot) are always checked.

use skycast_chart::{ChartOptions, ChartRenderer, ChartSeries, Document, RenderedChart, Rgba, Theme};

fn render(theme: &str) -> (Vec<u8>, RenderedChart) {
    let mut doc = Document::new();
    doc.add_canvas("rainChart", 640, 320).expect("allocate canvas");
    let mut opts = ChartOptions::rain_forecast();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts.theme = theme.to_string();
    let chart = ChartRenderer::render(&mut doc, "rainChart", &ChartSeries::rain_probability(), &opts).expect("render");
    let bytes = doc.surface_mut("rainChart").unwrap().to_png_bytes().expect("png bytes");
    (bytes, chart)
}

fn render_bytes(theme: &str) -> Vec<u8> {
    render(theme).0
}

fn assert_near(got: &[u8], want: [u8; 3], tol: i32, what: &str) {
    let ok = (0..3).all(|i| (got[i] as i32 - want[i] as i32).abs() <= tol);
    assert!(ok, "{what}: got {got:?}, want ~{want:?}");
}

/// Check the pixels that identify a theme: page background, area fill and empty plot.
fn assert_theme_pixels(bytes: &[u8], chart: &RenderedChart, theme: &Theme) {
    let img = image::load_from_memory(bytes).expect("decode png").to_rgba8();
    let bg = theme.background;
    let at = |x: f32, y: f32| img.get_pixel(x.round() as u32, y.round() as u32).0;

    let corner = img.get_pixel(0, 0).0;
    assert_eq!(corner, [bg.r, bg.g, bg.b, 255], "background corner");

    // Between 11AM and 12PM at value 10: under the curve, between grid lines
    let x = (chart.points[1].position.x + chart.points[2].position.x) * 0.5;
    let fill = at(x, chart.value_to_px(10.0));
    assert_near(&fill, Rgba::rgba(41, 182, 246, 0.3).over(bg), 4, "area fill");

    // Just right of 10AM at value 70: above the curve
    let empty = at(chart.points[0].position.x + 6.0, chart.value_to_px(70.0));
    assert_near(&empty, [bg.r, bg.g, bg.b], 0, "plot above curve");
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);

    if bless_mode() {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).expect("create snapshots dir"); }
        std::fs::write(&snap_path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn golden_rain_chart() {
    let (bytes, chart) = render("light");
    assert_theme_pixels(&bytes, &chart, &Theme::light());
    write_or_compare("rain_chart.png", &bytes);
}

#[test]
fn golden_rain_chart_dark() {
    let (bytes, chart) = render("dark");
    assert_eq!(chart.theme, Theme::dark());
    assert_theme_pixels(&bytes, &chart, &Theme::dark());
    write_or_compare("rain_chart_dark.png", &bytes);
}

#[test]
fn themes_differ_on_the_surface() {
    assert_ne!(render_bytes("light"), render_bytes("dark"));
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_bytes("light"), render_bytes("light"));
}
