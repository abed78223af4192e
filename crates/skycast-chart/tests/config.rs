// File: crates/skycast-chart/tests/config.rs
// Purpose: Chart.js-shaped JSON configs map onto the same chart as the built-in sample.

use skycast_chart::{ChartConfig, ChartError, ChartOptions, ChartSeries};

const RAIN_JSON: &str = r#"{
  "type": "line",
  "data": {
    "labels": ["10AM","11AM","12PM","1PM","2PM","3PM"],
    "datasets": [{
      "label": "Rain %",
      "data": [20, 50, 80, 60, 40, 30],
      "borderColor": "#29B6F6",
      "backgroundColor": "rgba(41,182,246,0.3)",
      "fill": true,
      "tension": 0.4
    }]
  },
  "options": {
    "responsive": true,
    "plugins": { "legend": { "display": false } },
    "scales": {
      "y": { "beginAtZero": true, "ticks": { "stepSize": 20 } }
    }
  }
}"#;

#[test]
fn page_config_matches_builtin_sample() {
    let cfg = ChartConfig::from_json_str(RAIN_JSON).expect("parse");
    assert_eq!(cfg, ChartConfig::rain_forecast());
    let (series, options) = cfg.build().expect("build");
    assert_eq!(series, ChartSeries::rain_probability());
    assert_eq!(options, ChartOptions::rain_forecast());
}

#[test]
fn config_loads_from_file() -> anyhow::Result<()> {
    let path = std::path::PathBuf::from("target/test_out/rain_config.json");
    std::fs::create_dir_all(path.parent().unwrap())?;
    std::fs::write(&path, RAIN_JSON)?;
    let cfg = ChartConfig::from_path(&path)?;
    assert_eq!(cfg.data.datasets[0].label, "Rain %");
    Ok(())
}

#[test]
fn missing_options_fall_back_to_defaults() {
    let cfg = ChartConfig::from_json_str(
        r#"{"type":"line","data":{"labels":["a","b"],"datasets":[{"data":[1,2]}]}}"#,
    )
    .unwrap();
    let (series, options) = cfg.build().unwrap();
    assert_eq!(series.len(), 2);
    assert!(!series.style().fill_under);
    assert_eq!(options, ChartOptions::default());
}

#[test]
fn rejects_unsupported_shapes() {
    let bar = RAIN_JSON.replace(r#""type": "line""#, r#""type": "bar""#);
    assert!(matches!(ChartConfig::from_json_str(&bar).unwrap().build(), Err(ChartError::Config(_))));

    let mut two = ChartConfig::rain_forecast();
    two.data.datasets.push(two.data.datasets[0].clone());
    assert!(matches!(two.build(), Err(ChartError::Config(_))));

    let mut short = ChartConfig::rain_forecast();
    short.data.datasets[0].data.pop();
    assert!(matches!(short.build(), Err(ChartError::LengthMismatch { labels: 6, values: 5 })));
}

#[test]
fn rejects_bad_colors_and_json() {
    let bad = RAIN_JSON.replace("#29B6F6", "sky-blue");
    assert!(matches!(ChartConfig::from_json_str(&bad), Err(ChartError::Config(_))));
    assert!(matches!(ChartConfig::from_json_str("{"), Err(ChartError::Config(_))));
}
