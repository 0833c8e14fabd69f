//! Interactive operator console read from stdin.
//!
//! # Commands
//!
//! | Command       | Output                                   |
//! |---------------|------------------------------------------|
//! | `requests`    | every audited request, oldest first      |
//! | `files`       | every shared file with its providers     |
//! | `file <name>` | providers of one file                    |
//! | `stats`       | statistics snapshot as JSON              |
//! | `help`        | command list                             |
//! | `quit`        | signals shutdown                         |
//!
//! Anything else prints `invalid command`.

/// Console enumerations.
pub mod enums;

/// Implementation blocks for console commands.
pub mod impls;

/// Console read loop and report rendering.
#[allow(clippy::module_inception)]
pub mod console;
