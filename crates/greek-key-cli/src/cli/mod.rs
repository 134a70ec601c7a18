//! CLI subcommand modules.

pub mod args;
pub mod render;
pub mod settings;
