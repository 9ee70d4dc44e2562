//! HTTP server for the reskilling ROI calculator.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use reskilling_roi::api::{AppState, create_router};
use reskilling_roi::config::{ConfigLoader, ReferenceTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reskilling-roi")]
#[command(about = "Serve the reskilling ROI calculator over HTTP", version)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "RESKILLING_ROI_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// YAML file replacing the built-in reference data
    #[arg(long, env = "RESKILLING_ROI_REFERENCE_DATA", value_name = "PATH")]
    reference_data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let table = match &cli.reference_data {
        Some(path) => ConfigLoader::load(path)?.into_table(),
        None => ReferenceTable::embedded(),
    };
    info!(
        version = table.version(),
        source = %cli
            .reference_data
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        "Reference data loaded"
    );

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Listening");

    axum::serve(listener, create_router(AppState::new(table))).await?;
    Ok(())
}
