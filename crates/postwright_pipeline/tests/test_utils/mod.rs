//! Test utilities for pipeline tests.
//!
//! This module provides a scripted driver and request helpers.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};
