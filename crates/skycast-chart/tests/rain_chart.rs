// File: crates/skycast-chart/tests/rain_chart.rs
// Purpose: Observable properties of the hourly rain chart (axis, alignment, legend, colors, errors).

use skycast_chart::{ChartError, ChartOptions, ChartRenderer, ChartSeries, Document, RenderedChart, Rgba};

const LABELS: [&str; 6] = ["10AM", "11AM", "12PM", "1PM", "2PM", "3PM"];
const VALUES: [f64; 6] = [20.0, 50.0, 80.0, 60.0, 40.0, 30.0];

fn render(width: i32, height: i32) -> RenderedChart {
    let mut doc = Document::new();
    doc.add_canvas("rainChart", width, height).expect("allocate canvas");
    ChartRenderer::render(&mut doc, "rainChart", &ChartSeries::rain_probability(), &ChartOptions::rain_forecast())
        .expect("render")
}

#[test]
fn y_axis_starts_at_zero_with_step_twenty() {
    for (w, h) in [(800, 400), (320, 240), (1200, 300)] {
        let chart = render(w, h);
        assert_eq!(chart.y_min(), 0.0);
        assert_eq!(chart.tick_step(), 20.0);
        let ticks: Vec<f64> = chart.y_ticks.iter().map(|t| t.value).collect();
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
        let labels: Vec<&str> = chart.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "20", "40", "60", "80"]);
        assert_eq!(chart.y_ticks[0].px, chart.plot_area.bottom);
    }
}

#[test]
fn points_are_index_aligned() {
    let chart = render(800, 400);
    assert_eq!(chart.points.len(), 6);
    for (i, p) in chart.points.iter().enumerate() {
        assert_eq!(p.index, i);
        assert_eq!(p.label, LABELS[i]);
        assert_eq!(p.value, VALUES[i]);
        assert_eq!(chart.x_ticks[i].label, LABELS[i]);
        assert_eq!(chart.x_ticks[i].px, p.position.x);
        assert_eq!(chart.value_to_px(VALUES[i]), p.position.y);
    }
    // strictly left to right
    assert!(chart.points.windows(2).all(|w| w[0].position.x < w[1].position.x));
}

#[test]
fn legend_is_hidden() {
    assert!(render(800, 400).legend.is_none());
}

#[test]
fn colors_match_style() {
    let chart = render(800, 400);
    assert_eq!(chart.style.stroke, Rgba::parse("#29B6F6").unwrap());
    assert_eq!(chart.style.fill, Rgba::parse("rgba(41,182,246,0.3)").unwrap());
    assert_eq!(chart.style.stroke.to_string(), "#29B6F6");
    assert_eq!(chart.style.fill.to_string(), "rgba(41,182,246,0.3)");
    assert!(chart.style.fill_under);
    assert_eq!(chart.style.tension, 0.4);
}

#[test]
fn peak_and_minimum() {
    let chart = render(800, 400);
    let peak = chart.peak().unwrap();
    assert_eq!((peak.label.as_str(), peak.value), ("12PM", 80.0));
    let low = chart.trough().unwrap();
    assert_eq!((low.label.as_str(), low.value), ("10AM", 20.0));
    // higher values sit higher on screen
    assert!(peak.position.y < low.position.y);
}

#[test]
fn responsive_chart_follows_surface() {
    assert_eq!((render(800, 800).width, render(800, 800).height), (800, 400));
    let wide = render(1000, 300);
    assert_eq!((wide.width, wide.height), (1000, 300));
}

#[test]
fn missing_target_fails_without_drawing() {
    let mut doc = Document::new();
    doc.add_canvas("otherCanvas", 64, 32).unwrap();

    let err = ChartRenderer::render(&mut doc, "rainChart", &ChartSeries::rain_probability(), &ChartOptions::rain_forecast())
        .unwrap_err();
    assert!(matches!(&err, ChartError::TargetNotFound { id } if id == "rainChart"));
    assert_eq!(err.to_string(), "draw surface 'rainChart' not found in document");

    let (px, _, _, _) = doc.surface_mut("otherCanvas").unwrap().to_rgba8().unwrap();
    assert!(px.iter().all(|&b| b == 0), "untouched surface stays transparent");
    assert!(!doc.contains("rainChart"));
}

#[test]
fn detached_surface_is_not_found() {
    let mut doc = Document::new();
    doc.add_canvas("rainChart", 200, 100).unwrap();
    let removed = doc.remove("rainChart").expect("was attached");
    assert_eq!(removed.id(), "rainChart");
    let err = ChartRenderer::render(&mut doc, "rainChart", &ChartSeries::rain_probability(), &ChartOptions::rain_forecast());
    assert!(matches!(err, Err(ChartError::TargetNotFound { .. })));
}
