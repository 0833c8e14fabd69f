//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker and peer
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Liveness timeout, sweep interval, interactive console
//! - **udp_server**: UDP rendezvous listener instances
//! - **api_server**: Read-only HTTP report API instances
//! - **peer_config**: Tracker address, listen address and timings used by peers
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! Configuration::save_from_config(&default_config, "config.toml")?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
