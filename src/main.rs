use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imager::{config::Config, renderer::PngRenderer, stats::StatsStore, web::WebServer};

#[derive(Parser)]
#[command(name = "imager")]
#[command(version)]
#[command(about = "Placeholder image server with rolling in-memory usage statistics")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port (overrides the PORT environment variable)
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("imager={},tower_http=trace", cli.log_level)
    } else {
        format!("imager={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting imager v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with environment and CLI arguments
    config.apply_env_overrides();
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    let stats = StatsStore::new(config.stats.clone());
    info!(
        top_limit = config.stats.top_limit,
        windows = config.stats.hit_windows.len(),
        "Stats store initialized"
    );

    let web_server = WebServer::new(config, stats, Arc::new(PngRenderer::new()))?;

    info!(
        "Listening on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
