//! Binary encoding of strip sequences for the credential table
//!
//! A credential blob is CBOR holding a format tag and, per strip in order,
//! its dimensions and row-major pixel bytes.

use crate::io::configuration::CREDENTIAL_FORMAT_VERSION;
use crate::io::error::{AuthError, Result};
use crate::spatial::strip::Strip;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct EncodedCredential {
    format: u8,
    strips: Vec<EncodedStrip>,
}

#[derive(Serialize, Deserialize)]
struct EncodedStrip {
    height: u32,
    width: u32,
    channels: u8,
    #[serde(with = "serde_bytes")]
    pixels: Vec<u8>,
}

fn dimension(operation: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|e| AuthError::Serialization {
        operation,
        reason: format!("dimension {value} too large: {e}"),
    })
}

/// Encode strips into a credential blob
///
/// # Errors
///
/// Returns an error if a strip dimension does not fit the blob format or
/// CBOR serialization fails
pub fn encode_strips(strips: &[Strip]) -> Result<Vec<u8>> {
    let strips = strips
        .iter()
        .map(|strip| -> Result<EncodedStrip> {
            Ok(EncodedStrip {
                height: dimension("encode strips", strip.height())?,
                width: dimension("encode strips", strip.width())?,
                channels: u8::try_from(strip.channels()).map_err(|e| {
                    AuthError::Serialization {
                        operation: "encode strips",
                        reason: format!("channel count {} too large: {e}", strip.channels()),
                    }
                })?,
                pixels: strip.to_raw_bytes(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let credential = EncodedCredential {
        format: CREDENTIAL_FORMAT_VERSION,
        strips,
    };

    let mut bytes = Vec::new();
    ciborium::into_writer(&credential, &mut bytes).map_err(|e| AuthError::Serialization {
        operation: "encode strips",
        reason: e.to_string(),
    })?;
    Ok(bytes)
}

/// Decode a credential blob back into strips
///
/// # Errors
///
/// Returns an error if the blob is not valid CBOR, carries an unknown
/// format tag, or a strip's pixel count disagrees with its dimensions
pub fn decode_strips(bytes: &[u8]) -> Result<Vec<Strip>> {
    let credential: EncodedCredential =
        ciborium::from_reader(bytes).map_err(|e| AuthError::Serialization {
            operation: "decode strips",
            reason: e.to_string(),
        })?;

    if credential.format != CREDENTIAL_FORMAT_VERSION {
        return Err(AuthError::Serialization {
            operation: "decode strips",
            reason: format!(
                "unsupported credential format {} (expected {CREDENTIAL_FORMAT_VERSION})",
                credential.format
            ),
        });
    }

    credential
        .strips
        .into_iter()
        .enumerate()
        .map(|(index, strip)| {
            Strip::from_raw(
                strip.height as usize,
                strip.width as usize,
                usize::from(strip.channels),
                strip.pixels,
            )
            .map_err(|e| AuthError::Serialization {
                operation: "decode strips",
                reason: format!("strip {index}: {e}"),
            })
        })
        .collect()
}
