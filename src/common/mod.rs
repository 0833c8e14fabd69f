//! Common utilities and shared functionality.
//!
//! This module contains helper functions used across the tracker, the peer
//! binary and the background loops.
//!
//! # Utilities
//!
//! - Logging setup (`fern` + `log`)
//! - Log level parsing
//! - Graceful shutdown waiting for periodic loops
//! - UDP bind checks before starting a listener
//! - Timestamp helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::common::common::{setup_logging, shutdown_waiting};
//!
//! setup_logging(&config);
//!
//! // Sleep for the interval, unless shutdown was requested
//! if shutdown_waiting(Duration::from_secs(5), &mut shutdown).await {
//!     return;
//! }
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
