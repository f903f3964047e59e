//! Advocates - Directory Service and Listing View
//!
//! A small advocate directory: an HTTP endpoint that serves every advocate in
//! the table as JSON, and a terminal listing view that fetches that list once
//! and then searches, filters by location and paginates it locally.

pub mod cli;
pub mod directory;
pub mod format;
pub mod model;
pub mod server;
pub mod store;
pub mod text;
