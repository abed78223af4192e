// File: crates/skycast/src/main.rs
// Summary: Renders the hourly rain-probability chart (built-in or from a Chart.js JSON config) to PNG and SVG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skycast_chart::{telemetry, ChartConfig, ChartRenderer, Document};
use tracing::{info, warn};

/// Id of the canvas the chart is drawn on.
const CANVAS_ID: &str = "rainChart";

#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the hourly rain-probability chart to an image")]
struct Cli {
    /// Chart.js-style JSON config; defaults to the built-in rain sample
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// PNG output path
    #[arg(short, long, default_value = "target/out/rain_chart.png")]
    out: PathBuf,

    /// Also write an SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = skycast_chart::types::WIDTH)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = skycast_chart::types::HEIGHT)]
    height: i32,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Skip tick labels (font-independent output)
    #[arg(long)]
    no_labels: bool,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ChartConfig::from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::rain_forecast(),
    };

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let (series, mut options) = config.build().context("invalid chart config")?;
    options.theme = cli.theme.clone();
    options.draw_labels = !cli.no_labels;
    if skycast_chart::theme::find(&cli.theme).name != cli.theme.to_ascii_lowercase() {
        warn!(theme = %cli.theme, "unknown theme; using light");
    }

    let mut document = Document::new();
    document
        .add_canvas(CANVAS_ID, cli.width, cli.height)
        .with_context(|| format!("cannot allocate {}x{} canvas", cli.width, cli.height))?;

    let chart = ChartRenderer::render(&mut document, CANVAS_ID, &series, &options)?;
    if let (Some(peak), Some(low)) = (chart.peak(), chart.trough()) {
        info!(
            points = chart.points.len(),
            peak = %format!("{} {}", peak.label, peak.value),
            low = %format!("{} {}", low.label, low.value),
            y_max = chart.y_max(),
            "chart summary"
        );
    }

    document
        .surface_mut(CANVAS_ID)
        .context("canvas detached after render")?
        .save_png(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;
    println!("Wrote {}", cli.out.display());

    if let Some(svg) = &cli.svg {
        chart.save_svg(svg).with_context(|| format!("writing {}", svg.display()))?;
        println!("Wrote {}", svg.display());
    }

    Ok(())
}
