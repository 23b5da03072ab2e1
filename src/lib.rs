//! Graphical password authentication by strip-wise image comparison
//!
//! A password image is cut into equal-width vertical strips which are stored
//! per username. Authentication cuts a second image the same way and accepts
//! it when the summed mean squared error of the strip pairs stays below a
//! fixed threshold.

#![deny(unsafe_code)]

/// Strip comparison and the registration/authentication flows
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Image strips and vertical segmentation
pub mod spatial;
/// Credential persistence and blob encoding
pub mod storage;

pub use io::error::{AuthError, ErrorKind, Result};
