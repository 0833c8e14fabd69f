//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core tracker settings (liveness timeout, sweep interval).
pub mod tracker_config;

/// UDP rendezvous server configuration.
pub mod udp_trackers_config;

/// HTTP report API server configuration.
pub mod api_trackers_config;

/// Peer side settings (tracker address, timeouts, keep-alive interval).
pub mod peer_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
