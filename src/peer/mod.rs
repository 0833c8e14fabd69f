//! Peer node: seeds a file over TCP and fetches files from other peers.
//!
//! # Seeding
//!
//! 1. Bind a TCP listener on `listen_address` (port `0` picks a free one)
//! 2. Announce `share` to the tracker with the bound port
//! 3. Send `keep_alive` every `keep_alive_interval` seconds
//! 4. Serve the whole file to every connection until shutdown
//!
//! # Fetching
//!
//! Ask the tracker for the providers of a file and download it whole from the
//! first provider that answers. Transfers carry no framing: the seeder writes
//! the file and closes the connection.
//!
//! # Console
//!
//! While seeding, `uploads` (or `request logs`) lists every served upload and
//! `quit` stops the peer.
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::peer::structs::peer_node::PeerNode;
//!
//! let node = PeerNode::new(client, "127.0.0.1:0", Duration::from_secs(2));
//! let advertised = node.seed("movie.mp4", Arc::new(data), shutdown_rx.clone()).await?;
//! let (data, provider) = node.fetch("other.iso").await?;
//! ```

/// Peer enumerations (errors).
pub mod enums;

/// Peer data structures.
pub mod structs;

/// Implementation blocks for seeding and fetching.
pub mod impls;

/// Operator console listing served uploads.
pub mod peer_console;

/// Unit tests for the peer node.
pub mod tests;
