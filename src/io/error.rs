//! Error types for segmentation, storage and matching operations

use std::fmt;
use std::path::PathBuf;

/// Shape of a strip as (height, width, channels)
pub type StripShape = (usize, usize, usize);

/// Main error type for all authentication operations
#[derive(Debug)]
pub enum AuthError {
    /// Caller-supplied value failed validation
    InvalidInput {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No credential is stored for the username
    NotFound {
        /// Username that was looked up
        username: String,
    },

    /// Stored and candidate strips at the same position differ in shape
    ///
    /// Usually means the registration and authentication images have
    /// different dimensions.
    DimensionMismatch {
        /// Position of the offending strip pair
        index: usize,
        /// Shape of the stored strip
        stored: StripShape,
        /// Shape of the candidate strip
        candidate: StripShape,
    },

    /// Stored and candidate credentials have a different number of strips
    StripCountMismatch {
        /// Number of stored strips
        stored: usize,
        /// Number of candidate strips
        candidate: usize,
    },

    /// Image file missing, unreadable or not decodable
    DecodeFailure {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Credential database operation failed
    Storage {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying `SQLite` error
        source: rusqlite::Error,
    },

    /// Credential blob could not be encoded or decoded
    Serialization {
        /// Description of the operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Coarse classification of [`AuthError`] for callers that only branch on outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad segment count, blank username, empty path or unusable image shape
    InvalidInput,
    /// Unknown username
    NotFound,
    /// Registration and authentication strips are not comparable
    DimensionMismatch,
    /// Image could not be decoded
    DecodeFailure,
    /// Database, blob or file system failure
    Storage,
}

impl AuthError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DimensionMismatch { .. } | Self::StripCountMismatch { .. } => {
                ErrorKind::DimensionMismatch
            }
            Self::DecodeFailure { .. } => ErrorKind::DecodeFailure,
            Self::Storage { .. } | Self::Serialization { .. } | Self::FileSystem { .. } => {
                ErrorKind::Storage
            }
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid input '{parameter}' = '{value}': {reason}")
            }
            Self::NotFound { username } => {
                write!(f, "No credential registered for user '{username}'")
            }
            Self::DimensionMismatch {
                index,
                stored,
                candidate,
            } => {
                write!(
                    f,
                    "Strip {index} dimensions differ (stored {}x{}x{}, candidate {}x{}x{})",
                    stored.0, stored.1, stored.2, candidate.0, candidate.1, candidate.2
                )
            }
            Self::StripCountMismatch { stored, candidate } => {
                write!(
                    f,
                    "Strip count differs (stored {stored}, candidate {candidate})"
                )
            }
            Self::DecodeFailure { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::Storage { operation, source } => {
                write!(f, "Credential store error during {operation}: {source}")
            }
            Self::Serialization { operation, reason } => {
                write!(f, "Credential encoding error in {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DecodeFailure { source, .. } => Some(source),
            Self::Storage { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for authentication results
pub type Result<T> = std::result::Result<T, AuthError>;

/// Create an invalid input error
pub fn invalid_input(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AuthError {
    AuthError::InvalidInput {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a storage error for the named operation
pub const fn storage_error(operation: &'static str, source: rusqlite::Error) -> AuthError {
    AuthError::Storage { operation, source }
}
