//! Core library: configuration, record types and collection handling.

pub mod collection;
pub mod config;
pub mod models;
