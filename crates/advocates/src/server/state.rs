use std::sync::Arc;

use crate::store::AdvocateStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn AdvocateStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn AdvocateStore>) -> Self {
    Self { store }
  }
}
