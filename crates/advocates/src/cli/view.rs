//! Listing view state machine
//!
//! Holds the fetched collection in a `Directory` and tracks whether the last
//! fetch is in flight, succeeded or failed. Filtering and paging never touch
//! the network; only `load`, `retry` and `clear` do.

use async_trait::async_trait;

use crate::cli::client::ClientError;
use crate::directory::Directory;
use crate::model::Advocate;

/// Where the view gets its advocates from
#[async_trait]
pub trait AdvocateSource: Send + Sync {
  async fn fetch_advocates(&self) -> Result<Vec<Advocate>, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
  /// Nothing fetched yet
  Idle,
  Loading,
  Ready,
  /// Last fetch failed; the message is shown with a retry affordance
  Failed(String),
}

pub struct ListingView<S> {
  source: S,
  directory: Directory,
  state: ViewState,
}

impl<S: AdvocateSource> ListingView<S> {
  pub fn new(source: S) -> Self {
    Self { source, directory: Directory::default(), state: ViewState::Idle }
  }

  pub fn state(&self) -> &ViewState {
    &self.state
  }

  pub fn directory(&self) -> &Directory {
    &self.directory
  }

  /// Fetch the full collection. The previous collection is kept on failure.
  pub async fn load(&mut self) {
    self.state = ViewState::Loading;

    match self.source.fetch_advocates().await {
      Ok(advocates) => {
        tracing::debug!("Fetched {} advocates", advocates.len());
        self.directory.replace_advocates(advocates);
        self.state = ViewState::Ready;
      }
      Err(e) => {
        tracing::debug!("Fetch failed: {e}");
        self.state = ViewState::Failed(e.to_string());
      }
    }
  }

  pub async fn retry(&mut self) {
    self.load().await;
  }

  /// Reset search and location, then fetch again
  pub async fn clear(&mut self) {
    self.directory.clear_filters();
    self.load().await;
  }

  pub fn search(&mut self, term: impl Into<String>) {
    self.directory.set_search_term(term);
  }

  pub fn select_location(&mut self, location: Option<String>) {
    self.directory.set_location(location);
  }

  pub fn next_page(&mut self) -> bool {
    self.directory.next_page()
  }

  pub fn previous_page(&mut self) -> bool {
    self.directory.previous_page()
  }

  /// Jump to a page within `1..=total_pages`; out of range pages are refused
  pub fn go_to_page(&mut self, page: usize) -> bool {
    if page == 0 || page > self.directory.total_pages().max(1) {
      return false;
    }
    self.directory.set_page(page);
    true
  }

  /// Advocates to render; nothing unless the last fetch succeeded
  pub fn visible(&self) -> Vec<&Advocate> {
    match self.state {
      ViewState::Ready => self.directory.current_page(),
      _ => Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use reqwest::StatusCode;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Mutex;

  /// Replays scripted responses, one per fetch
  struct ScriptedSource {
    responses: Mutex<Vec<Result<Vec<Advocate>, ClientError>>>,
    calls: AtomicUsize,
  }

  impl ScriptedSource {
    fn new(mut responses: Vec<Result<Vec<Advocate>, ClientError>>) -> Self {
      responses.reverse();
      Self { responses: Mutex::new(responses), calls: AtomicUsize::new(0) }
    }
  }

  #[async_trait]
  impl AdvocateSource for ScriptedSource {
    async fn fetch_advocates(&self) -> Result<Vec<Advocate>, ClientError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.responses.lock().unwrap().pop().unwrap_or_else(|| Ok(Vec::new()))
    }
  }

  fn advocate(first: &str, city: &str, specialty: &str) -> Advocate {
    Advocate {
      first_name: first.to_string(),
      last_name: "Doe".to_string(),
      city: city.to_string(),
      degree: "MD".to_string(),
      specialties: vec![specialty.to_string()],
      years_of_experience: "4".to_string(),
      phone_number: "5551234567".to_string(),
    }
  }

  fn texas() -> Vec<Advocate> {
    vec![
      advocate("Ann", "Austin", "Cardiology"),
      advocate("Bea", "Dallas", "Cardiology"),
      advocate("Cal", "Austin", "Pediatrics"),
    ]
  }

  fn server_error() -> ClientError {
    ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)
  }

  #[tokio::test]
  async fn test_load_success_makes_view_ready() {
    let mut view = ListingView::new(ScriptedSource::new(vec![Ok(texas())]));
    assert_eq!(view.state(), &ViewState::Idle);

    view.load().await;

    assert_eq!(view.state(), &ViewState::Ready);
    assert_eq!(view.visible().len(), 3);
    assert_eq!(view.directory().unique_cities(), vec!["Austin", "Dallas"]);
  }

  #[tokio::test]
  async fn test_failed_load_shows_message_and_no_cards() {
    let mut view = ListingView::new(ScriptedSource::new(vec![Err(server_error())]));

    view.load().await;

    assert_eq!(view.state(), &ViewState::Failed("Failed to fetch advocates".to_string()));
    assert!(view.visible().is_empty());
  }

  #[tokio::test]
  async fn test_retry_recovers_after_failure() {
    let mut view = ListingView::new(ScriptedSource::new(vec![Err(server_error()), Ok(texas())]));

    view.load().await;
    view.retry().await;

    assert_eq!(view.state(), &ViewState::Ready);
    assert_eq!(view.visible().len(), 3);
  }

  #[tokio::test]
  async fn test_failure_keeps_previous_collection_hidden() {
    let mut view = ListingView::new(ScriptedSource::new(vec![Ok(texas()), Err(server_error())]));

    view.load().await;
    view.retry().await;

    assert!(view.visible().is_empty());
    assert_eq!(view.directory().advocates().len(), 3);
  }

  #[tokio::test]
  async fn test_location_then_search_narrows_results() {
    let mut view = ListingView::new(ScriptedSource::new(vec![Ok(texas())]));
    view.load().await;

    view.select_location(Some("Austin".to_string()));
    let names: Vec<_> = view.visible().iter().map(|a| a.first_name.clone()).collect();
    assert_eq!(names, vec!["Ann", "Cal"]);

    view.search("cardio");
    let names: Vec<_> = view.visible().iter().map(|a| a.first_name.clone()).collect();
    assert_eq!(names, vec!["Ann"]);
  }

  #[tokio::test]
  async fn test_clear_resets_filters_and_refetches() {
    let source = ScriptedSource::new(vec![Ok(texas()), Ok(vec![advocate("Dee", "Houston", "Sleep")])]);
    let mut view = ListingView::new(source);
    view.load().await;
    view.search("ann");
    view.select_location(Some("Austin".to_string()));

    view.clear().await;

    assert_eq!(view.source.calls.load(Ordering::SeqCst), 2);
    assert_eq!(view.directory().search_term(), "");
    assert_eq!(view.directory().location(), None);
    let names: Vec<_> = view.visible().iter().map(|a| a.first_name.clone()).collect();
    assert_eq!(names, vec!["Dee"]);
  }

  #[tokio::test]
  async fn test_go_to_page_refuses_out_of_range() {
    let many: Vec<Advocate> = (0..15).map(|i| advocate(&format!("A{i}"), "Austin", "x")).collect();
    let mut view = ListingView::new(ScriptedSource::new(vec![Ok(many)]));
    view.load().await;

    assert!(!view.go_to_page(0));
    assert!(!view.go_to_page(3));
    assert!(view.go_to_page(2));
    assert_eq!(view.visible().len(), 5);
  }

  #[tokio::test]
  async fn test_refetch_with_fewer_rows_leaves_a_visible_page() {
    let rows = |count: usize| (0..count).map(|i| advocate(&format!("A{i}"), "Austin", "x")).collect::<Vec<_>>();
    let mut view = ListingView::new(ScriptedSource::new(vec![Ok(rows(15)), Ok(rows(5))]));
    view.load().await;
    assert!(view.go_to_page(2));

    view.retry().await;

    assert_eq!(view.directory().page(), 1);
    assert_eq!(view.directory().total_pages(), 1);
    assert_eq!(view.visible().len(), 5);
  }
}
