//! HTTP client for the advocates REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::cli::view::AdvocateSource;
use crate::model::Advocate;
use crate::server::types::{AdvocatesResponse, StatusResponse};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ClientError {
  /// The server answered with a non-success status
  #[error("Failed to fetch advocates")]
  Status(StatusCode),

  #[error("Request timed out after {0}s")]
  Timeout(u64),

  #[error("{0}")]
  Transport(reqwest::Error),
}

/// Configuration for the advocates HTTP client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
  /// Base URL of the advocates server (e.g., "http://localhost:3000")
  pub base_url: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
  }
}

impl ClientConfig {
  /// Read `ADVOCATES_SERVER_URL` and `ADVOCATES_TIMEOUT_SECS`, falling back to defaults
  pub fn from_env() -> Self {
    let base_url = std::env::var("ADVOCATES_SERVER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let timeout_secs = std::env::var("ADVOCATES_TIMEOUT_SECS")
      .ok()
      .and_then(|value| value.parse().ok())
      .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Self { base_url, timeout_secs }
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

/// HTTP client for the advocates REST API
pub struct AdvocatesClient {
  client: Client,
  config: ClientConfig,
}

impl AdvocatesClient {
  pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
    let client =
      Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build().map_err(ClientError::Transport)?;

    Ok(Self { client, config })
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  fn map_error(&self, error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
      ClientError::Timeout(self.config.timeout_secs)
    } else {
      ClientError::Transport(error)
    }
  }

  /// GET /api/advocates
  pub async fn list_advocates(&self) -> Result<Vec<Advocate>, ClientError> {
    let response = self.client.get(self.url("/api/advocates")).send().await.map_err(|e| self.map_error(e))?;

    if !response.status().is_success() {
      return Err(ClientError::Status(response.status()));
    }

    let body: AdvocatesResponse = response.json().await.map_err(|e| self.map_error(e))?;
    Ok(body.data)
  }

  /// GET /status
  pub async fn health_check(&self) -> Result<StatusResponse, ClientError> {
    let response = self.client.get(self.url("/status")).send().await.map_err(|e| self.map_error(e))?;

    if !response.status().is_success() {
      return Err(ClientError::Status(response.status()));
    }

    response.json().await.map_err(|e| self.map_error(e))
  }
}

#[async_trait]
impl AdvocateSource for AdvocatesClient {
  async fn fetch_advocates(&self) -> Result<Vec<Advocate>, ClientError> {
    self.list_advocates().await
  }
}
