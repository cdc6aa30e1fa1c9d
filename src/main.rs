//! hurdat-tracks - command line entry point
//!
//! Reads a HURDAT2 archive (file or URL), optionally keeps a single season,
//! prints a per-storm summary and writes the track table as CSV and the
//! storm paths as GeoJSON.
//!
//! Usage:
//! ```bash
//! RUST_LOG=info hurdat-tracks hurdat2.txt --year 2005 --csv tracks.csv --geojson tracks.geojson
//! hurdat-tracks --url https://www.nhc.noaa.gov/data/hurdat/hurdat2-1851-2023-051124.txt --year 2021
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use hurdat_tracks::config::{load_overrides, TrackConfig};
use hurdat_tracks::hurdat::{archive, table, LogProgress, RawStormRecord};
use hurdat_tracks::pipeline::{process_records_with_progress, TrackSet};
use hurdat_tracks::render::{render_tracks, GeoJsonRenderer};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Parse HURDAT2 hurricane tracks and export them for mapping.")]
struct Cli {
    /// Archive file path, or URL when --url is given
    input: String,
    /// Treat INPUT as a URL and download it
    #[arg(long)]
    url: bool,
    /// Only keep storms from this season
    #[arg(long, env = "HURDAT_YEAR")]
    year: Option<i32>,
    /// Write the annotated observation table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write storm paths as a GeoJSON FeatureCollection
    #[arg(long)]
    geojson: Option<PathBuf>,
    /// JSON file with property overrides (colors, line weight, ...)
    #[arg(long, env = "HURDAT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            let overrides = load_overrides(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            TrackConfig::from_properties(Some(&overrides))
        }
        None => TrackConfig::default(),
    };

    let records = load_records(&cli)?;
    let records = match cli.year.or(config.season) {
        Some(year) => archive::filter_by_year(records, year),
        None => records,
    };

    let mut progress = LogProgress::new("Parsing storms");
    let set = process_records_with_progress(&records, &mut progress)
        .context("processing archive")?;

    print_summary(&set);

    if let Some(path) = &cli.csv {
        table::write_csv(&set.rows, path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("✓ Table written to {}", path.display());
    }

    if let Some(path) = &cli.geojson {
        let mut renderer = GeoJsonRenderer::new();
        render_tracks(&set.tracks(), &config.palette, &config.style, &mut renderer)?;
        renderer
            .write(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!(
            "✓ {} path segments written to {}",
            renderer.len(),
            path.display()
        );
    }

    Ok(())
}

fn load_records(cli: &Cli) -> Result<Vec<RawStormRecord>> {
    if cli.url {
        download_records(&cli.input)
    } else {
        archive::read_archive(&cli.input).with_context(|| format!("reading {}", cli.input))
    }
}

#[cfg(feature = "download")]
fn download_records(url: &str) -> Result<Vec<RawStormRecord>> {
    let text = archive::download(url)?;
    Ok(archive::group_records(&text)?)
}

#[cfg(not(feature = "download"))]
fn download_records(url: &str) -> Result<Vec<RawStormRecord>> {
    anyhow::bail!(
        "cannot fetch {}: built without the 'download' feature",
        url
    )
}

fn print_summary(set: &TrackSet) {
    let summaries = set.summaries();
    if summaries.is_empty() {
        println!("No storms found");
        return;
    }

    println!(
        "{:<10} {:<12} {:>5} {:>12}",
        "ID", "NAME", "PEAK", "OBSERVATIONS"
    );
    for summary in &summaries {
        println!(
            "{:<10} {:<12} {:>5} {:>12}",
            summary.storm_id, summary.name, summary.peak_category, summary.observation_count
        );
    }
    println!(
        "\n{} storms, {} observations",
        summaries.len(),
        set.rows.len()
    );
}
