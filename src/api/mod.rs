//! Read-only HTTP API for operators.
//!
//! # Endpoints
//!
//! - `GET /api/stats` - statistics snapshot
//! - `GET /api/files` - every shared file with its providers
//! - `GET /api/files/{file_name}` - providers of one file, `404` when unknown
//! - `GET /api/requests` - the request audit log, oldest first
//!
//! Every other path answers `404 {"status": "not found"}`. There is no
//! authentication; bind the API to a trusted interface.

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// File registry endpoints.
pub mod api_files;

/// Request audit endpoints.
pub mod api_requests;

/// Statistics endpoints.
pub mod api_stats;
