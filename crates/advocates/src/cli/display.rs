//! Terminal rendering for the listing view

use colored::*;

use crate::cli::view::{AdvocateSource, ListingView, ViewState};
use crate::directory::Directory;
use crate::format::{format_phone_number, page_of, years_experience};
use crate::model::Advocate;
use crate::text;

const SKELETON_CARDS: usize = 6;
const CARD_WIDTH: usize = 48;

/// Render whatever the view's current state calls for
pub fn render_view<S: AdvocateSource>(view: &ListingView<S>) -> String {
  match view.state() {
    ViewState::Failed(message) => render_error(message),
    ViewState::Loading => render_loading(),
    ViewState::Idle | ViewState::Ready => render_listing(view.directory(), &view.visible()),
  }
}

/// Error banner with the retry affordance
pub fn render_error(message: &str) -> String {
  format!("{} {}\n  [{}] type `retry` to try again\n", "✗".red().bold(), message.red(), text::RETRY_BUTTON.bold())
}

/// Title and placeholder cards shown while a fetch is in flight
pub fn render_loading() -> String {
  let mut out = format!("{}\n{}\n\n", text::TITLE.bold(), text::LOADING.dimmed());
  for _ in 0..SKELETON_CARDS {
    out.push_str(&format!("{}\n", "░".repeat(CARD_WIDTH).dimmed()));
  }
  out
}

fn render_listing(directory: &Directory, page: &[&Advocate]) -> String {
  let mut out = format!("{}\n", text::TITLE.bold());
  out.push_str(&render_filters(directory));
  out.push('\n');

  if page.is_empty() {
    out.push_str(&format!("{}\n", text::NO_RESULTS.dimmed()));
  }

  for advocate in page {
    out.push_str(&render_card(advocate));
    out.push('\n');
  }

  out.push_str(&render_pagination(directory.page(), directory.total_pages()));
  out
}

fn render_filters(directory: &Directory) -> String {
  let search = if directory.search_term().is_empty() {
    text::SEARCH_PLACEHOLDER.dimmed().to_string()
  } else {
    directory.search_term().yellow().to_string()
  };
  let location = directory.location().unwrap_or(text::LOCATION_PLACEHOLDER);

  let mut out = format!("{} {}  {} {}", "🔍".cyan(), search, "📍".cyan(), location.blue());
  if !directory.search_term().is_empty() || directory.location().is_some() {
    out.push_str(&format!("  {}", format!("[{}]", text::CLEAR_BUTTON).bold()));
  }
  out.push('\n');
  out
}

/// One advocate card
pub fn render_card(advocate: &Advocate) -> String {
  let specialties = advocate.specialties.iter().map(|s| format!("[{s}]")).collect::<Vec<_>>().join(" ");

  format!(
    "=== {} ===\n{}\n{}\n{}: {}\n{}  {}\n",
    advocate.full_name().bold(),
    advocate.city,
    advocate.degree,
    text::SPECIALTIES_TITLE.bold(),
    specialties.cyan(),
    years_experience(&advocate.years_of_experience).dimmed(),
    format_phone_number(&advocate.phone_number).blue(),
  )
}

/// `[Previous] Page 1 of 3 [Next]`, empty for a single page
pub fn render_pagination(page: usize, total: usize) -> String {
  if total <= 1 {
    return String::new();
  }

  let button = |label: &str, enabled: bool| {
    let label = format!("[{label}]");
    if enabled {
      label.bold().to_string()
    } else {
      label.dimmed().to_string()
    }
  };

  format!(
    "{} {} {}\n",
    button(text::PREVIOUS, page > 1),
    page_of(page, total),
    button(text::NEXT, page < total)
  )
}

/// The location selector entries: "All Locations" then every city
pub fn render_cities(cities: &[String]) -> String {
  let mut out = format!("{}\n", text::LOCATION_PLACEHOLDER.bold());
  for city in cities {
    out.push_str(&format!("  {}\n", city.blue()));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn advocate() -> Advocate {
    Advocate {
      first_name: "Jane".to_string(),
      last_name: "Doe".to_string(),
      city: "Austin".to_string(),
      degree: "MD".to_string(),
      specialties: vec!["Cardiology".to_string(), "Sleep issues".to_string()],
      years_of_experience: "12".to_string(),
      phone_number: "5551234567".to_string(),
    }
  }

  #[test]
  fn test_card_shows_every_field() {
    let card = render_card(&advocate());

    assert!(card.contains("Jane Doe"));
    assert!(card.contains("Austin"));
    assert!(card.contains("MD"));
    assert!(card.contains("Specialties"));
    assert!(card.contains("[Cardiology] [Sleep issues]"));
    assert!(card.contains("12 years exp."));
    assert!(card.contains("(555) 123-4567"));
  }

  #[test]
  fn test_pagination_hidden_for_single_page() {
    assert_eq!(render_pagination(1, 0), "");
    assert_eq!(render_pagination(1, 1), "");
    assert!(render_pagination(2, 3).contains("Page 2 of 3"));
    assert!(render_pagination(1, 2).contains("[Previous]"));
    assert!(render_pagination(1, 2).contains("[Next]"));
  }

  #[test]
  fn test_error_banner_offers_retry() {
    let banner = render_error("Failed to fetch advocates");
    assert!(banner.contains("Failed to fetch advocates"));
    assert!(banner.contains("Retry"));
  }

  #[test]
  fn test_loading_renders_skeleton_cards() {
    let loading = render_loading();
    assert!(loading.contains(text::LOADING));
    assert_eq!(loading.matches(&"░".repeat(CARD_WIDTH)).count(), SKELETON_CARDS);
  }

  #[test]
  fn test_listing_reports_no_results() {
    let mut directory = Directory::new(vec![advocate()]);
    directory.set_search_term("nobody");

    let out = render_listing(&directory, &directory.current_page());

    assert!(out.contains(text::NO_RESULTS));
    assert!(out.contains("nobody"));
    assert!(!out.contains("Jane Doe"));
  }

  #[test]
  fn test_cities_start_with_all_locations() {
    let out = render_cities(&["Austin".to_string(), "Dallas".to_string()]);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].contains("All Locations"));
    assert!(lines[1].contains("Austin"));
    assert!(lines[2].contains("Dallas"));
  }

  #[test]
  fn test_clear_button_only_with_active_filters() {
    let mut directory = Directory::new(vec![advocate()]);
    assert!(!render_filters(&directory).contains("[Clear]"));

    directory.set_location(Some("Austin".to_string()));
    assert!(render_filters(&directory).contains("[Clear]"));

    directory.clear_filters();
    directory.set_search_term("jane");
    assert!(render_filters(&directory).contains("[Clear]"));
  }
}
