//! Request context middleware
//!
//! Gives every request an id and logs its start and completion. Handlers can
//! pull the context out with `Extension<RequestContext>` to tag their own
//! log lines.

use std::time::Instant;

use axum::{
  extract::Request,
  http::{Method, Uri},
  middleware::Next,
  response::Response,
};
use tracing::{info, warn};
use uuid::Uuid;

/// Per-request metadata
#[derive(Clone, Debug)]
pub struct RequestContext {
  pub request_id: Uuid,
  pub method: Method,
  pub uri: Uri,
}

impl RequestContext {
  pub fn new(method: Method, uri: Uri) -> Self {
    Self { request_id: Uuid::new_v4(), method, uri }
  }
}

/// Inject a `RequestContext` into the request extensions and log its lifecycle
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
  let context = RequestContext::new(request.method().clone(), request.uri().clone());
  let user_agent = request
    .headers()
    .get("user-agent")
    .and_then(|v| v.to_str().ok())
    .unwrap_or("none")
    .to_string();

  info!(
    request_id = %context.request_id,
    method = %context.method,
    path = context.uri.path(),
    user_agent = %user_agent,
    "Request started"
  );

  let start_time = Instant::now();
  request.extensions_mut().insert(context.clone());

  let response = next.run(request).await;

  let status = response.status();
  let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
  if status.is_server_error() {
    warn!(
      request_id = %context.request_id,
      method = %context.method,
      path = context.uri.path(),
      status = status.as_u16(),
      duration_ms,
      "Request failed"
    );
  } else {
    info!(
      request_id = %context.request_id,
      method = %context.method,
      path = context.uri.path(),
      status = status.as_u16(),
      duration_ms,
      "Request completed"
    );
  }

  response
}
