//! Console implementation blocks.

pub mod console_command;
