//! bookshelf: a lightweight book catalog browser.
//!
//! Serves a paginated grid of book previews rendered on the server, with
//! filtering by genre, author and title, a detail overlay for a single book,
//! and a day/night theme switch.
//!
//! # Features
//!
//! - Static JSON catalog with author and genre lookups
//! - Order-preserving filter over genre, author and title
//! - Forward-only "show more" pagination
//! - Preview widget JSON API
//! - Day/night themes that can follow the browser's color scheme

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Configuration and CLI.
pub mod config;
/// Error types.
pub mod error;
/// Search criteria and filtering.
pub mod filter;
/// Book model and catalog.
pub mod library;
/// Pagination cursor.
pub mod pagination;
/// HTML rendering.
pub mod render;
/// HTTP server.
pub mod server;
/// Color themes.
pub mod theme;


pub use config::{Cli, Command, Config};
pub use error::{AppError, Result};
pub use library::Catalog;
pub use server::AppState;
