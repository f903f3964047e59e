//! Line commands for the interactive `browse` session

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
  /// Replace the search term; empty clears it
  Search(String),
  /// Select a city, `None` for all locations
  Location(Option<String>),
  Next,
  Previous,
  Page(usize),
  Clear,
  Retry,
  Cities,
  Help,
  /// Re-render the current page
  Show,
  Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
Commands:
  search <text>     filter by name, city, degree, specialty or years (no text clears)
  location [city]   show one city only (no city shows all locations)
  next | prev       move between pages
  page <n>          jump to page n
  clear             reset search and location and fetch again ([Clear])
  retry             fetch again
  cities            list the available locations
  help              show this help
  quit              leave";

/// Parse one input line. Arguments keep their inner spacing and case.
pub fn parse_command(line: &str) -> Result<BrowseCommand, ParseError> {
  let line = line.trim();
  let (verb, rest) = match line.split_once(char::is_whitespace) {
    Some((verb, rest)) => (verb, rest.trim()),
    None => (line, ""),
  };

  let command = match verb.to_lowercase().as_str() {
    "" => BrowseCommand::Show,
    "search" | "s" | "/" => BrowseCommand::Search(rest.to_string()),
    "location" | "l" => BrowseCommand::Location(Some(rest.to_string()).filter(|c| !c.is_empty())),
    "next" | "n" => BrowseCommand::Next,
    "prev" | "previous" | "p" => BrowseCommand::Previous,
    "page" => {
      let page = rest.parse::<usize>().map_err(|_| ParseError(format!("Not a page number: '{rest}'")))?;
      BrowseCommand::Page(page)
    }
    "clear" => BrowseCommand::Clear,
    "retry" | "r" => BrowseCommand::Retry,
    "cities" => BrowseCommand::Cities,
    "help" | "h" | "?" => BrowseCommand::Help,
    "quit" | "q" | "exit" => BrowseCommand::Quit,
    other => return Err(ParseError(format!("Unknown command '{other}', type `help` for a list"))),
  };

  Ok(command)
}
