//! Error types for the Postwright library.
//!
//! This crate provides the foundation error types used throughout the Postwright workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use postwright_error::{ConfigError, PostwrightResult};
//!
//! fn load_settings() -> PostwrightResult<String> {
//!     Err(ConfigError::new("Missing [generation] section"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod json;
mod storage;

pub use config::ConfigError;
pub use error::{PostwrightError, PostwrightErrorKind, PostwrightResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
