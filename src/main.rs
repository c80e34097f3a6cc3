use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use stolpe_chart::{ChartTheme, Histogram, HistogramRecord};
use stolpe_svg::SvgSurface;

#[derive(Parser, Debug)]
#[command(
    name = "stolpe",
    about = "Render labeled records as a horizontal bar chart (SVG)"
)]
struct Cli {
    /// TOML file with [[record]] tables (label, sublabel, value).
    input: PathBuf,
    /// Output SVG path.
    #[arg(short, long, default_value = "chart.svg")]
    out: PathBuf,
    /// Surface width in pixels.
    #[arg(long, default_value_t = 900.0)]
    width: f32,
    /// Surface height in pixels.
    #[arg(long, default_value_t = 480.0)]
    height: f32,
}

#[derive(Debug, Deserialize)]
struct RecordsFile {
    #[serde(default)]
    record: Vec<RecordDef>,
}

#[derive(Debug, Deserialize)]
struct RecordDef {
    label: String,
    #[serde(default)]
    sublabel: String,
    value: f64,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let raw = fs::read_to_string(&cli.input)?;
    let file: RecordsFile = toml::from_str(&raw)?;
    let records: Vec<HistogramRecord> = file
        .record
        .into_iter()
        .map(|r| HistogramRecord::new(r.label, r.sublabel, r.value))
        .collect();
    if records.is_empty() {
        log::warn!(
            "no records in {}; rendering an axis-only chart",
            cli.input.display()
        );
    }

    let mut svg = SvgSurface::new(cli.width, cli.height);
    let surface = Histogram::render(&svg, &ChartTheme::default(), &records);
    surface.draw(&mut svg);
    fs::write(&cli.out, svg.finish())?;
    log::info!("wrote {} ({} bars)", cli.out.display(), records.len());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
