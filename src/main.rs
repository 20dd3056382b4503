use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use volcamap::color::{ColorMap, Palette};
use volcamap::loader::{LoadOptions, load_dataset};
use volcamap::scene::DEFAULT_TITLE;
use volcamap::summary::DatasetSummary;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Interactive map of volcanoes from a CSV table",
    long_about = None
)]
struct Cli {
    /// CSV file with "Volcano Name", "Type", "Longitude" and "Latitude" columns
    #[arg(value_name = "CSV_FILE")]
    csv_file: Utf8PathBuf,

    /// Title drawn at the top of the map
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Field delimiter of the CSV file
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// JSON file overriding the type colors
    #[arg(short, long, value_name = "JSON_FILE")]
    palette: Option<Utf8PathBuf>,

    /// Print a JSON summary of the dataset instead of opening a window
    #[arg(long)]
    dump: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = LoadOptions::with_delimiter(cli.delimiter)?;
    let dataset = load_dataset(&cli.csv_file, options)?;
    let palette = match &cli.palette {
        Some(path) => Palette::from_json_file(path)?,
        None => Palette::default(),
    };

    if cli.dump {
        let colors = ColorMap::assign(dataset.records(), &palette);
        let json = serde_json::to_string_pretty(&DatasetSummary::new(&dataset, &colors))
            .context("Failed to serialize summary")?;
        println!("{}", json);
        return Ok(());
    }

    run_viewer(dataset, &palette, cli.title)
}

#[cfg(feature = "egui")]
fn run_viewer(dataset: volcamap::model::Dataset, palette: &Palette, title: String) -> Result<()> {
    volcamap::egui_app::VolcanoApp::new(dataset, palette, title).run()
}

#[cfg(not(feature = "egui"))]
fn run_viewer(
    _dataset: volcamap::model::Dataset,
    _palette: &Palette,
    _title: String,
) -> Result<()> {
    anyhow::bail!("This build has no viewer; use --dump or rebuild with --features egui")
}
