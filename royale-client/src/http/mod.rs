//! HTTP access to the API.

pub mod client;
pub mod request;

pub use client::{Client, Request};
