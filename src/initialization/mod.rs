//! Shared resource initialization.
//!
//! This module provides functions to initialize the resources an analyzer
//! needs up front:
//! - HTTP clients (page and stylesheet, with their respective timeouts)
//! - Logger (plain or JSON format)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_page_client, init_stylesheet_client};
pub use logger::init_logger_with;
