//! Royale API client.

pub mod config;
pub mod error;
pub mod http;

pub use error::Error;
