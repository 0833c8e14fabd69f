//! Console enumerations.

/// A parsed console line.
pub mod console_command;
