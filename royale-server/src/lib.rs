//! Royale MCP tool server.

pub mod app;
pub mod cli;
pub mod config;
pub mod tools;
