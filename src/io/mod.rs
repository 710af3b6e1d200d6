//! Input/output around the lattice engine

/// Command-line front end
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for the fallible surface
pub mod error;
/// PNG export
pub mod image;
/// Survey progress display
pub mod progress;
/// Text rendering
pub mod render;
