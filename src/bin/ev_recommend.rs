// EV recommendation CLI
//
// Usage: ev_recommend --data ev_specs.csv --filter drivetrain=AWD,RWD --format json
//
// Always exits 0 once arguments parse: failures are printed as a single
// diagnostic line in the requested format.

use anyhow::Context;
use clap::Parser;
use ev_recommender::filters::filter_options;
use ev_recommender::{
    diagnostic, render_or_diagnostic, FilterClause, FilterSelection, OutputFormat,
    RecommendationReport, Recommender, RecommenderConfig, VehicleData,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "ev_recommend")]
#[command(about = "Per-category electric vehicle recommendations", long_about = None)]
#[command(version)]
struct Cli {
    /// Vehicle spec CSV
    #[arg(long, env = "EV_DATA")]
    data: PathBuf,

    /// Optional JSON config (top_n, cutoff_percentile, filter_columns)
    #[arg(long, env = "EV_CONFIG")]
    config: Option<PathBuf>,

    /// Vehicles per category; overrides the config value
    #[arg(long)]
    top: Option<usize>,

    /// Categorical filter as column=value[,value...] (repeatable)
    #[arg(long = "filter", value_name = "COLUMN=VALUES")]
    filters: Vec<FilterClause>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Print the selectable values of each filter column and exit
    #[arg(long)]
    list_options: bool,
}

fn main() {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ev_recommender=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = if cli.list_options {
        list_options(&cli).unwrap_or_else(|err| {
            tracing::error!("Listing filter options failed: {:#}", err);
            diagnostic(&err, cli.format)
        })
    } else {
        render_or_diagnostic(run(&cli), cli.format)
    };

    println!("{}", output);
}

fn load_config(cli: &Cli) -> anyhow::Result<RecommenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RecommenderConfig::load(path)?,
        None => RecommenderConfig::default(),
    };

    if let Some(top) = cli.top {
        config.top_n = top;
    }

    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<RecommendationReport> {
    let config = load_config(cli)?;
    let data = VehicleData::load(&cli.data)?;
    let selection: FilterSelection = cli.filters.iter().cloned().collect();

    let recommender = Recommender::new(config)?;
    let report = recommender
        .recommend_filtered(&data, &selection)
        .with_context(|| format!("Failed to recommend from {:?}", cli.data))?;

    Ok(report)
}

fn list_options(cli: &Cli) -> anyhow::Result<String> {
    let config = load_config(cli)?;
    let data = VehicleData::load(&cli.data)?;
    let options = filter_options(data.frame(), &config.filter_columns)?;

    let text = match cli.format {
        OutputFormat::Markdown => {
            let mut md = String::from("# Filter Options\n\n");
            for (column, values) in &options {
                md.push_str(&format!("**{}**: {}\n", column, values.join(", ")));
            }
            md
        }
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = options
                .into_iter()
                .map(|(column, values)| (column, serde_json::Value::from(values)))
                .collect();
            serde_json::to_string_pretty(&map)?
        }
    };

    Ok(text)
}
