//! HTTP side of the directory
//!
//! A single data endpoint (`GET /api/advocates`) plus status and schema
//! endpoints, served with axum.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod startup;
pub mod state;
pub mod types;
