#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. ClientError in client module
    clippy::must_use_candidate       // Annotated selectively on critical APIs
)]

pub mod app;
pub mod client;
pub mod domain;

// Re-export main types for easy access
pub use client::{ClientConfig, ClientError, LogClient};
pub use domain::{Category, CategoryCode, Level, LevelCode, LogRecord};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
