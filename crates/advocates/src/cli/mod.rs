//! Terminal side of the directory: HTTP client, listing view and commands

pub mod browse;
pub mod client;
pub mod commands;
pub mod display;
pub mod view;
