//! Matching constants and runtime configuration defaults

// Decision boundary for the summed per-strip mean squared error
/// Authentication passes when the MSE sum is strictly below this value
pub const MSE_THRESHOLD: f64 = 500.0;

/// Number of vertical strips an image is cut into
pub const DEFAULT_SEGMENT_COUNT: usize = 4;

/// Credential database used when no path is given
pub const DEFAULT_DATABASE_PATH: &str = "users.db";

/// Channels per pixel after decoding (RGB)
pub const RGB_CHANNELS: usize = 3;

// Bump when the stored blob layout changes
/// Version tag written into every credential blob
pub const CREDENTIAL_FORMAT_VERSION: u8 = 1;

// Logging settings
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used when verbose output is requested
pub const VERBOSE_LOG_FILTER: &str = "debug";

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;

// Process exit statuses reported by the shell
/// Registration succeeded or authentication passed
pub const EXIT_SUCCESS: u8 = 0;
/// Authentication was rejected
pub const EXIT_REJECTED: u8 = 1;
/// The command failed with an error
pub const EXIT_ERROR: u8 = 2;
