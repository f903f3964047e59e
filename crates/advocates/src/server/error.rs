use axum::{
  http::StatusCode,
  response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::server::types::ErrorResponse;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
  /// The store could not produce the advocate list. The cause is logged,
  /// never sent to the client.
  #[error("Failed to fetch advocates")]
  FetchFailed(#[source] StoreError),
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let status = match self {
      AppError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ErrorResponse { error: self.to_string() })).into_response()
  }
}
