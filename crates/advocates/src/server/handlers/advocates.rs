//! Advocate endpoint handlers

use axum::{
  extract::{Extension, State},
  response::Json,
};
use schemars::{schema::RootSchema, schema_for};
use tracing::{error, info};

use crate::model::Advocate;
use crate::server::{error::AppError, middleware::RequestContext, state::AppState, types::AdvocatesResponse};

/// GET /api/advocates - Every advocate in display shape
///
/// No filtering, sorting or pagination happens here; the listing view does
/// all of that on its own copy.
pub async fn list_advocates(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
) -> Result<Json<AdvocatesResponse>, AppError> {
  let rows = state.store.all().await.map_err(|e| {
    error!(request_id = %context.request_id, error = %e, "Error fetching advocates");
    AppError::FetchFailed(e)
  })?;

  let data: Vec<Advocate> = rows.into_iter().map(Advocate::from).collect();
  info!(request_id = %context.request_id, count = data.len(), "Fetched advocates");

  Ok(Json(AdvocatesResponse { data }))
}

/// GET /api/schema - JSON Schema of the advocates payload
pub async fn schema() -> Json<RootSchema> {
  Json(schema_for!(AdvocatesResponse))
}
