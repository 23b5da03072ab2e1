/// Command-line shell
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding
pub mod image;
/// Logging setup
pub mod logging;
/// Progress display
pub mod progress;
