//! # Rendezvous Tracker
//!
//! A small peer-to-peer file-sharing rendezvous built on Tokio and Actix-web.
//!
//! ## Overview
//!
//! A central tracker keeps, per file name, the set of peers currently offering
//! that file and answers lookups from peers that want to download it. Peers talk
//! to the tracker over UDP with one JSON message per datagram, and exchange the
//! whole file directly over TCP once a provider is known.
//!
//! ## Features
//!
//! - **Rendezvous protocol**: `share`, `get`, `keep_alive` and the `peers` reply
//! - **Request correlation**: per-request ephemeral sockets with timeouts, sender
//!   checks and optional request ids
//! - **Liveness**: a periodic sweep evicts peers that stopped sending keep-alives
//! - **Audit log**: every `share`, `get` and rejected datagram is recorded
//! - **Operator surfaces**: interactive console and a read-only JSON API
//! - **Monitoring**: atomic statistics, console stats lines and Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rendezvous_tracker::config::structs::configuration::Configuration;
//! use rendezvous_tracker::tracker::structs::file_tracker::FileTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = Arc::new(FileTracker::new(config));
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Read-only JSON report endpoints
//! - [`client`] - Peer side request correlator
//! - [`common`] - Logging setup, shutdown helpers and timestamps
//! - [`config`] - Configuration management and TOML parsing
//! - [`console`] - Interactive operator console
//! - [`peer`] - Seeding and fetching whole files
//! - [`protocol`] - JSON datagram codec
//! - [`stats`] - Atomic statistics counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Peer registry, liveness table, request log and sweeper
//! - [`udp`] - UDP dispatch service

/// Read-only HTTP API for the registry, request log and statistics.
pub mod api;

/// Request correlator used by peers to talk to the tracker.
///
/// Every request/response exchange runs on its own ephemeral UDP socket and
/// resolves to exactly one reply, a timeout or a cancellation.
pub mod client;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Interactive console reading operator commands from stdin.
pub mod console;

/// Peer node: seeds a file over TCP and fetches files from other peers.
pub mod peer;

/// Rendezvous protocol codec (one JSON message per datagram).
pub mod protocol;

/// Statistics tracking and monitoring module.
pub mod stats;

/// CLI argument parsing for the binaries.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the file registry, the last-seen table, the request log, the
/// packet handlers and the liveness sweeper.
pub mod tracker;

/// UDP dispatch service for the rendezvous protocol.
pub mod udp;
