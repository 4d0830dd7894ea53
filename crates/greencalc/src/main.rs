mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use greencalc_core::calculator::{calculate, carbon_intensity, effective_pue};
use greencalc_core::loader::{load_tables, FsTableSource, LoadedTables};
use greencalc_core::GreencalcConfig;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, EstimateArgs, ListArgs};
use crate::render::EstimateOutput;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing(cli.log_json);

    let config =
        GreencalcConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    info!(data_dir = %config.data_dir.display(), "Loading reference tables");
    let loaded = load_tables(&FsTableSource::new(config)).await;

    match cli.command {
        Command::Estimate(args) => handle_estimate(args, &loaded),
        Command::List(args) => handle_list(args, &loaded),
    }
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// `RUST_LOG` directives, or warnings only so unavailable tables are still reported.
fn log_filter(directives: Option<String>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn handle_estimate(args: EstimateArgs, loaded: &LoadedTables) -> Result<()> {
    let mut request = args.build_request()?;
    if request.fill_default_model(&loaded.tables) {
        info!(
            core_type = %request.core_type,
            model = request.model().unwrap_or_default(),
            "No model given; using preset"
        );
    }

    let result = calculate(&request, &loaded.tables);
    let output = EstimateOutput {
        pue: effective_pue(&request, &loaded.tables),
        carbon_intensity: carbon_intensity(&request.location, &loaded.tables),
        request: &request,
        result: &result,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&output).context("failed to serialize result")?;
        println!("{json}");
    } else {
        println!("{}", render::estimate_table(&output));
    }
    Ok(())
}

fn handle_list(args: ListArgs, loaded: &LoadedTables) -> Result<()> {
    println!("{}", render::list_table(args.table, &loaded.tables));
    Ok(())
}
