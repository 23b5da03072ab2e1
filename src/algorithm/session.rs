//! Registration and authentication flows
//!
//! Ties decoding, segmentation, storage and matching together. Every
//! failure is returned as an [`AuthError`](crate::io::error::AuthError);
//! the flows hold no state beyond the store and their configuration, so a
//! front end only needs to collect a username and an image.

use crate::algorithm::matcher::{MatchPolicy, MatchReport, compare};
use crate::io::configuration::DEFAULT_SEGMENT_COUNT;
use crate::io::error::{Result, StripShape, invalid_input};
use crate::io::image::load_rgb;
use crate::spatial::segmenter::segment;
use crate::spatial::strip::Strip;
use crate::storage::credentials::{CredentialStore, validate_username};
use ndarray::ArrayView3;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parameters shared by registration and authentication
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConfig {
    /// Number of vertical strips per image
    pub segment_count: usize,
    /// Matching decision parameters
    pub policy: MatchPolicy,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            policy: MatchPolicy::default(),
        }
    }
}

/// Summary of a completed registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Username the credential was stored under
    pub username: String,
    /// Number of strips stored
    pub strip_count: usize,
    /// Shape shared by every stored strip
    pub strip_shape: StripShape,
    /// True when an earlier credential for the username was overwritten
    pub replaced: bool,
}

/// Runs registration and authentication against a credential store
pub struct Authenticator {
    store: CredentialStore,
    config: FlowConfig,
}

impl Authenticator {
    /// Create flows over `store` using `config`
    pub const fn new(store: CredentialStore, config: FlowConfig) -> Self {
        Self { store, config }
    }

    /// Borrow the underlying store
    pub const fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Register `username` with the image at `image_path`
    ///
    /// # Errors
    ///
    /// Returns an error if the username is blank, the image cannot be
    /// decoded or segmented, or the credential cannot be stored
    pub fn register(&self, username: &str, image_path: &Path) -> Result<Registration> {
        validate_username(username)?;
        let image = load_rgb(image_path)?;
        self.register_image(username, image.view())
    }

    /// Register `username` with an already decoded RGB image
    ///
    /// # Errors
    ///
    /// Returns an error if the username is blank, the image cannot be
    /// segmented, or the credential cannot be stored
    pub fn register_image(&self, username: &str, image: ArrayView3<'_, u8>) -> Result<Registration> {
        validate_username(username)?;
        let strips = segment(image, self.config.segment_count)?;
        let strip_shape = strip_shape(&strips)?;

        let replaced = self.store.contains(username)?;
        if replaced {
            warn!(username, "replacing existing credential");
        }

        self.store.put(username, &strips)?;
        info!(
            username,
            strips = strips.len(),
            height = strip_shape.0,
            width = strip_shape.1,
            "registration complete"
        );

        Ok(Registration {
            username: username.to_string(),
            strip_count: strips.len(),
            strip_shape,
            replaced,
        })
    }

    /// Compare the image at `image_path` against the credential for `username`
    ///
    /// # Errors
    ///
    /// Returns an error if the username is blank or unknown, the image
    /// cannot be decoded or segmented, or its strips are not comparable
    /// with the stored ones
    pub fn verify(&self, username: &str, image_path: &Path) -> Result<MatchReport> {
        validate_username(username)?;
        let image = load_rgb(image_path)?;
        self.verify_image(username, image.view())
    }

    /// Compare an already decoded RGB image against the credential for `username`
    ///
    /// # Errors
    ///
    /// Returns an error if the username is blank or unknown, the image
    /// cannot be segmented, or its strips are not comparable with the
    /// stored ones
    pub fn verify_image(&self, username: &str, image: ArrayView3<'_, u8>) -> Result<MatchReport> {
        validate_username(username)?;
        let stored = self.store.get(username)?;
        let candidate = segment(image, self.config.segment_count)?;

        let report = compare(&stored, &candidate, self.config.policy)?;
        debug!(username, errors = ?report.strip_errors, "per-strip mean squared error");
        info!(
            username,
            total = report.total_error(),
            threshold = report.threshold,
            authenticated = report.is_match(),
            "authentication attempt"
        );

        Ok(report)
    }

    /// True when the image at `image_path` authenticates `username`
    ///
    /// # Errors
    ///
    /// See [`Authenticator::verify`]
    pub fn authenticate(&self, username: &str, image_path: &Path) -> Result<bool> {
        self.verify(username, image_path)
            .map(|report| report.is_match())
    }

    /// True when an already decoded image authenticates `username`
    ///
    /// # Errors
    ///
    /// See [`Authenticator::verify_image`]
    pub fn authenticate_image(&self, username: &str, image: ArrayView3<'_, u8>) -> Result<bool> {
        self.verify_image(username, image)
            .map(|report| report.is_match())
    }
}

fn strip_shape(strips: &[Strip]) -> Result<StripShape> {
    strips
        .first()
        .map(Strip::shape)
        .ok_or_else(|| invalid_input("segment_count", &0, &"segmentation produced no strips"))
}
