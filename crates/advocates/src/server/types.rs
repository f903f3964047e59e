//! Wire types for the REST API

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Advocate;

/// Success body of `GET /api/advocates`
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AdvocatesResponse {
  /// Every advocate, in table order
  pub data: Vec<Advocate>,
}

/// Failure body shared by every endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
  pub error: String,
}

/// Response for /status
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  pub status: String,
  pub version: String,
}

/// Response for /version
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  pub version: String,
}
