//! Input/output and ambient plumbing
//!
//! This module contains:
//! - The sprite catalog and its directory loader
//! - Board, naming and rendering constants
//! - Error types
//! - PNG export, progress display and the command line

/// Sprite catalog loading and lookup
pub mod catalog;
/// Command-line arguments and render sessions
pub mod cli;
/// Geometry, naming and rendering constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of rendered frames
pub mod image;
/// Frame loop progress display
pub mod progress;
