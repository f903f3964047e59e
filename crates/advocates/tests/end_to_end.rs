//! Server and client together over a real socket

use std::net::SocketAddr;
use std::sync::Arc;

use advocates::cli::client::{AdvocatesClient, ClientConfig};
use advocates::cli::view::{ListingView, ViewState};
use advocates::model::{AdvocateRow, NewAdvocate};
use advocates::server::{startup::build_app, state::AppState};
use advocates::store::{AdvocateStore, SeedStore, SqliteStore, StoreError};
use async_trait::async_trait;
use tokio::net::TcpListener;

/// A store whose backing database is gone
struct BrokenStore;

#[async_trait]
impl AdvocateStore for BrokenStore {
  async fn all(&self) -> Result<Vec<AdvocateRow>, StoreError> {
    Err(StoreError::Unavailable("disk detached".to_string()))
  }
}

async fn spawn_server(store: Arc<dyn AdvocateStore>) -> SocketAddr {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let app = build_app(AppState::new(store));

  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });

  addr
}

fn client(addr: SocketAddr) -> AdvocatesClient {
  AdvocatesClient::new(ClientConfig::default().with_base_url(format!("http://{addr}"))).unwrap()
}

fn texan(first: &str, city: &str, specialties: &[&str]) -> NewAdvocate {
  NewAdvocate {
    first_name: first.to_string(),
    last_name: "Ranger".to_string(),
    city: city.to_string(),
    degree: "MD".to_string(),
    specialties: specialties.iter().map(|s| s.to_string()).collect(),
    years_of_experience: 6,
    phone_number: 5125550100,
  }
}

#[tokio::test]
async fn test_view_filters_data_served_from_sqlite() {
  let store = SqliteStore::open_in_memory().unwrap();
  store
    .insert_many(&[
      texan("Ann", "Austin", &["Cardiology"]),
      texan("Bea", "Dallas", &["Cardiology"]),
      texan("Cal", "Austin", &["Pediatrics"]),
      texan("Dan", "Austin", &["Interventional cardiology"]),
    ])
    .unwrap();
  let addr = spawn_server(Arc::new(store)).await;

  let mut view = ListingView::new(client(addr));
  view.load().await;
  assert_eq!(view.state(), &ViewState::Ready);
  assert_eq!(view.directory().unique_cities(), vec!["Austin", "Dallas"]);

  view.select_location(Some("Austin".to_string()));
  let names: Vec<_> = view.visible().iter().map(|a| a.first_name.clone()).collect();
  assert_eq!(names, vec!["Ann", "Cal", "Dan"]);

  view.search("cardio");
  let names: Vec<_> = view.visible().iter().map(|a| a.first_name.clone()).collect();
  assert_eq!(names, vec!["Ann", "Dan"]);
}

#[tokio::test]
async fn test_client_reads_seed_store_and_status() {
  let addr = spawn_server(Arc::new(SeedStore::new())).await;
  let client = client(addr);

  let advocates = client.list_advocates().await.unwrap();
  assert_eq!(advocates.len(), 15);
  assert_eq!(advocates[0].first_name, "John");
  assert_eq!(advocates[0].phone_number, "5551234567");

  let status = client.health_check().await.unwrap();
  assert_eq!(status.status, "healthy");
  assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unreachable_server_fails_the_view() {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let mut view = ListingView::new(client(addr));
  view.load().await;

  assert!(matches!(view.state(), ViewState::Failed(_)));
  assert!(view.visible().is_empty());
}

#[tokio::test]
async fn test_store_failure_reaches_the_view_as_retryable_error() {
  let addr = spawn_server(Arc::new(BrokenStore)).await;

  let response = reqwest::get(format!("http://{addr}/api/advocates")).await.unwrap();
  assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
  let body: serde_json::Value = response.json().await.unwrap();
  assert_eq!(body, serde_json::json!({ "error": "Failed to fetch advocates" }));

  let mut view = ListingView::new(client(addr));
  view.load().await;

  assert_eq!(view.state(), &ViewState::Failed("Failed to fetch advocates".to_string()));
  assert!(view.visible().is_empty());
}
