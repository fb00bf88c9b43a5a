//! Public library modules for the CLI crate
pub mod entry;
pub mod menu;
pub mod prompt;
