use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use timescape::{
    config::ConfigLoader,
    geology::{analyze_location, ElevationSource, OfflineElevation, OpenElevation},
    scene::{compose_scene, SceneReport, ViewAnalysis},
    web, ServiceConfig,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Historical landscape reconstruction for Swedish coordinates")]
struct Cli {
    /// Path to the service configuration YAML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the geological reconstruction for a coordinate
    Geology(Lookup),
    /// Print the composed scene and image prompt for a coordinate
    Prompt(Lookup),
}

#[derive(Debug, Args)]
struct Lookup {
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,
    /// Period id; defaults differ per command
    #[arg(long)]
    period: Option<String>,
    /// Skip the elevation service and use regional estimates
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfigLoader::new(".").load_or_default(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(config).await
        }
        Command::Geology(lookup) => {
            let period = lookup.period.clone().unwrap_or_else(|| "atlantic_early".into());
            if lookup.offline {
                print_geology(&OfflineElevation, &lookup, &period).await
            } else {
                print_geology(&online_source(&config)?, &lookup, &period).await
            }
        }
        Command::Prompt(lookup) => {
            let period = lookup.period.clone().unwrap_or_default();
            if lookup.offline {
                print_scene(&OfflineElevation, &lookup, &period).await
            } else {
                print_scene(&online_source(&config)?, &lookup, &period).await
            }
        }
    }
}

fn online_source(config: &ServiceConfig) -> Result<OpenElevation> {
    OpenElevation::new(config.elevation.url.clone(), config.elevation.timeout())
        .context("Failed to build elevation client")
}

async fn print_geology<E: ElevationSource>(source: &E, lookup: &Lookup, period: &str) -> Result<()> {
    let analysis = analyze_location(source, lookup.lat, lookup.lng, period).await;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

async fn print_scene<E: ElevationSource>(source: &E, lookup: &Lookup, period: &str) -> Result<()> {
    let view = ViewAnalysis::default();
    let scene = compose_scene(source, lookup.lat, lookup.lng, period, &view).await;
    println!("{}", serde_json::to_string_pretty(&SceneReport::new(&scene, &view))?);
    Ok(())
}
