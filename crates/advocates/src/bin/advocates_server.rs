//! Advocates REST Server
//!
//! Serves the advocate directory over HTTP.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use advocates::server::{config::ServerConfig, startup::start_server};

#[derive(Parser)]
#[command(name = "advocates_server")]
#[command(about = "Advocates REST API Server")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), ", courtesy of Kernelle Software"))]
struct Args {
  #[command(flatten)]
  config: ServerConfig,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // RUST_LOG wins over the flag when set
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if args.verbose {
      EnvFilter::new("advocates=debug,tower_http=debug,info")
    } else {
      EnvFilter::new("advocates=info,tower_http=warn,warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  tracing::info!("Starting Advocates REST Server v{}", env!("CARGO_PKG_VERSION"));
  tracing::info!("Binding to address: {}", args.config.bind);

  start_server(args.config).await
}
