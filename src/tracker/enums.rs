//! Tracker enumerations.

/// Errors returned by the operator report surface.
pub mod tracker_error;
