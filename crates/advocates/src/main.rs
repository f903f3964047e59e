use std::path::PathBuf;

use advocates::cli::{client::ClientConfig, commands};
use advocates::server::config::default_database_path;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "advocates")]
#[command(about = "Advocates - browse the advocate directory from the terminal")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), ", courtesy of Kernelle Software"))]
struct Cli {
  /// Base URL of the advocates server
  #[arg(long, global = true, env = "ADVOCATES_SERVER_URL")]
  server_url: Option<String>,

  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Fetch the directory and print one page of it
  List {
    /// Case-insensitive search across name, city, degree, specialties and years
    #[arg(short, long)]
    search: Option<String>,
    /// Only show advocates in this city
    #[arg(short, long)]
    location: Option<String>,
    /// Page to show, starting at 1
    #[arg(short, long, default_value = "1")]
    page: usize,
  },
  /// List the cities advocates can be filtered by
  Cities,
  /// Interactive listing view; type `help` once it starts
  Browse,
  /// Check that the server is reachable
  Status,
  /// Write the built-in seed advocates into a SQLite database
  Seed {
    /// SQLite database file [default: ~/.advocates/advocates.db]
    #[arg(long, env = "ADVOCATES_DATABASE")]
    database: Option<PathBuf>,
    /// Delete existing advocates first
    #[arg(long)]
    reset: bool,
  },
}

fn client_config(server_url: Option<String>) -> ClientConfig {
  let config = ClientConfig::from_env();
  match server_url {
    Some(url) => config.with_base_url(url),
    None => config,
  }
}

async fn handle(cli: Cli) -> Result<()> {
  let config = client_config(cli.server_url);

  match cli.command {
    Command::List { search, location, page } => {
      commands::list(config, search.as_deref(), location.as_deref(), page).await
    }
    Command::Cities => commands::cities(config).await,
    Command::Browse => commands::browse(config).await,
    Command::Status => commands::status(config).await,
    Command::Seed { database, reset } => {
      commands::seed(&database.unwrap_or_else(default_database_path), reset)
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_filter = if cli.verbose { "advocates=debug,info" } else { "advocates=warn,error" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

  handle(cli).await
}
