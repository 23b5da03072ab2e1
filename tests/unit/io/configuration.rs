//! Tests for matching constants and runtime defaults

#[cfg(test)]
mod tests {
    use stripkey::io::configuration::{
        CREDENTIAL_FORMAT_VERSION, DEFAULT_DATABASE_PATH, DEFAULT_LOG_FILTER,
        DEFAULT_SEGMENT_COUNT, EXIT_ERROR, EXIT_REJECTED, EXIT_SUCCESS, MSE_THRESHOLD,
        RGB_CHANNELS, SPINNER_TICK_MS, VERBOSE_LOG_FILTER,
    };

    // Tests the decision threshold
    // Verified by changing the threshold value
    #[test]
    fn test_mse_threshold() {
        assert!((MSE_THRESHOLD - 500.0).abs() < f64::EPSILON);
    }

    // Tests the reference segment count
    // Verified by changing the default count
    #[test]
    fn test_default_segment_count() {
        assert_eq!(DEFAULT_SEGMENT_COUNT, 4);
    }

    // Tests decoded images are RGB
    // Verified by switching to RGBA
    #[test]
    fn test_rgb_channels() {
        assert_eq!(RGB_CHANNELS, 3);
    }

    // Tests the default database is a plain file name
    // Verified by adding a directory component
    #[test]
    fn test_default_database_path() {
        assert_eq!(DEFAULT_DATABASE_PATH, "users.db");
    }

    // Tests blob format version starts at one
    // Verified by setting version to zero
    #[test]
    fn test_credential_format_version() {
        assert_eq!(CREDENTIAL_FORMAT_VERSION, 1);
    }

    // Tests log filters differ between quiet and verbose output
    // Verified by setting both filters to the same level
    #[test]
    fn test_log_filters() {
        assert_ne!(DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER);
        assert_eq!(VERBOSE_LOG_FILTER, "debug");
    }

    // Tests spinner redraw is responsive
    // Verified by raising the tick interval
    #[test]
    fn test_spinner_tick() {
        assert!(SPINNER_TICK_MS > 0 && SPINNER_TICK_MS <= 250);
    }

    // Tests exit statuses are 0, 1 and 2
    // Verified by sharing one status between rejection and error
    #[test]
    fn test_exit_statuses() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_REJECTED, 1);
        assert_eq!(EXIT_ERROR, 2);
    }
}
