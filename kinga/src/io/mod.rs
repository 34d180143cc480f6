//! Configuration sources for the card server.

pub mod config;
pub mod site;
