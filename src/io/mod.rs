//! Input/output collaborators around the placement core

/// Command-line parsing and run orchestration
pub mod cli;
/// Named constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG export of composed levels
pub mod image;
/// Tile library parsing and validation
pub mod library;
/// Progress display on the diagnostic stream
pub mod progress;
/// Text rendering of assembled levels
pub mod render;
