use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::browse::{parse_command, BrowseCommand, HELP};
use crate::cli::client::{AdvocatesClient, ClientConfig};
use crate::cli::display::{render_cities, render_error, render_loading, render_view};
use crate::cli::view::{AdvocateSource, ListingView, ViewState};
use crate::store::{seed::seed_advocates, SqliteStore};

fn connect(config: ClientConfig) -> Result<ListingView<AdvocatesClient>> {
  Ok(ListingView::new(AdvocatesClient::new(config)?))
}

/// Print the loading skeleton, then fetch
async fn load<S: AdvocateSource>(view: &mut ListingView<S>, show_loading: bool) {
  if show_loading {
    print!("{}", render_loading());
  }
  view.load().await;
}

fn failure<S: AdvocateSource>(view: &ListingView<S>) -> Option<String> {
  match view.state() {
    ViewState::Failed(message) => Some(message.clone()),
    _ => None,
  }
}

/// Fetch once and print a single filtered page
pub async fn list(
  config: ClientConfig,
  search: Option<&str>,
  location: Option<&str>,
  page: usize,
) -> Result<()> {
  let mut view = connect(config)?;
  load(&mut view, false).await;

  if let Some(message) = failure(&view) {
    eprint!("{}", render_error(&message));
    return Err(anyhow!(message));
  }

  if let Some(term) = search {
    view.search(term);
  }
  view.select_location(location.map(str::to_string));
  if !view.go_to_page(page) {
    return Err(anyhow!("Page {page} is out of range (1-{})", view.directory().total_pages().max(1)));
  }

  print!("{}", render_view(&view));
  Ok(())
}

/// Print the location selector entries
pub async fn cities(config: ClientConfig) -> Result<()> {
  let mut view = connect(config)?;
  load(&mut view, false).await;

  if let Some(message) = failure(&view) {
    eprint!("{}", render_error(&message));
    return Err(anyhow!(message));
  }

  print!("{}", render_cities(&view.directory().unique_cities()));
  Ok(())
}

/// Check that the server is up
pub async fn status(config: ClientConfig) -> Result<()> {
  let client = AdvocatesClient::new(config)?;
  let status = client.health_check().await?;

  println!("{} Server at {} is {} (v{})", "✓".green(), client.config().base_url.cyan(), status.status, status.version);
  Ok(())
}

/// Write the seed collection into a SQLite database
pub fn seed(database: &Path, reset: bool) -> Result<()> {
  let store = SqliteStore::open(database)?;

  if reset {
    let removed = store.clear()?;
    println!("{} Removed {} existing advocates", "✓".green(), removed);
  }

  let written = store.insert_many(&seed_advocates())?;
  println!("{} Seeded {} advocates into {}", "✓".green(), written, database.display().to_string().cyan());
  Ok(())
}

/// Interactive listing view driven by line commands on stdin
pub async fn browse(config: ClientConfig) -> Result<()> {
  let mut view = connect(config)?;
  load(&mut view, true).await;
  print!("{}", render_view(&view));

  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  loop {
    print!("{} ", ">".cyan());
    std::io::stdout().flush()?;

    let Some(line) = lines.next_line().await? else {
      break;
    };

    let command = match parse_command(&line) {
      Ok(command) => command,
      Err(e) => {
        println!("{}", e.to_string().yellow());
        continue;
      }
    };

    match command {
      BrowseCommand::Quit => break,
      BrowseCommand::Help => {
        println!("{HELP}");
        continue;
      }
      BrowseCommand::Cities => {
        print!("{}", render_cities(&view.directory().unique_cities()));
        continue;
      }
      BrowseCommand::Search(term) => view.search(term),
      BrowseCommand::Location(city) => view.select_location(city),
      BrowseCommand::Next => {
        if !view.next_page() {
          println!("{}", "Already on the last page".dimmed());
          continue;
        }
      }
      BrowseCommand::Previous => {
        if !view.previous_page() {
          println!("{}", "Already on the first page".dimmed());
          continue;
        }
      }
      BrowseCommand::Page(page) => {
        if !view.go_to_page(page) {
          println!("{}", format!("No page {page}").yellow());
          continue;
        }
      }
      BrowseCommand::Clear => {
        print!("{}", render_loading());
        view.clear().await;
      }
      BrowseCommand::Retry => load(&mut view, true).await,
      BrowseCommand::Show => {}
    }

    print!("{}", render_view(&view));
  }

  Ok(())
}
