//! Core data types for the Postwright post generator.
//!
//! This crate provides the value types shared by every Postwright crate: the
//! [`PostRecord`] a generation produces, the text metrics computed over it,
//! and the provider-neutral request/response types passed to a generation
//! capability.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod metrics;
mod output;
mod post;
mod request;

pub use metrics::TextMetrics;
pub use output::Output;
pub use post::{FALLBACK_SYSTEM_PROMPT, PostRecord};
pub use request::{GenerateRequest, GenerateResponse};
