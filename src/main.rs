use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loto6_predictor::app::LottoApp;
use loto6_predictor::chart;
use loto6_predictor::report::display_report;
use loto6_predictor::source::{CsvLayout, DrawSource, DEFAULT_SOURCE_URL};
use loto6_predictor::{Analysis, AnalysisConfig};

#[derive(Parser, Debug)]
#[command(name = "loto6_predictor", about = "Loto6 number predictions from past draws")]
struct Cli {
    /// URL or path of the draw history CSV
    #[arg(short, long, default_value = DEFAULT_SOURCE_URL)]
    source: String,

    /// Print the results to the terminal instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Also write the frequency chart to this PNG file
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let history = DrawSource::parse(&cli.source)
        .load(&CsvLayout::default())
        .with_context(|| format!("Could not load draw history from {}", cli.source))?;

    let analysis = Analysis::run(&history, &AnalysisConfig::default());

    if let Some(path) = &cli.chart {
        chart::write_png(path, &analysis.stats.counts, analysis.stats.window)
            .with_context(|| format!("Could not write chart to {}", path.display()))?;
    }

    if cli.headless {
        display_report(&analysis);
        return Ok(());
    }

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Loto6 Predictor",
        options,
        Box::new(move |cc| Ok(Box::new(LottoApp::new(cc, analysis)))),
    )
    .map_err(|e| anyhow!("Dashboard failed: {e}"))
}
