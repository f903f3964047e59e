//! Endpoint handlers

pub mod advocates;
pub mod status;
