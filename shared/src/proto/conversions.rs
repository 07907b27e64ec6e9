//! Conversions between the protobuf wire type and the internal `CustomMetric`.
//!
//! `from_proto` trusts the wire layer: unset fields arrive as protobuf
//! defaults and are kept, without the absence check the constructor does.

use crate::config::WireEncoding;
use crate::models::CustomMetric;
use crate::proto;
use base64::Engine;
use prost::Message;
use thiserror::Error;

/// Errors that can occur while decoding a wire message.
#[derive(Debug, Error)]
pub enum WireError {
    /// The bytes are not a valid protobuf message.
    #[error("Invalid protobuf message: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The text is not valid base64.
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The text is not valid hex.
    #[error("Invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl CustomMetric {
    /// Converts this metric into its wire message. Fields are copied verbatim.
    #[must_use]
    pub fn to_proto(&self) -> proto::CustomMetric {
        proto::CustomMetric {
            name: self.name().to_string(),
            value: self.value(),
            version: self.version().to_string(),
        }
    }

    /// Builds a metric from a wire message without validation.
    ///
    /// # Example
    ///
    /// ```
    /// use shared::models::CustomMetric;
    /// use shared::proto;
    ///
    /// let metric = CustomMetric::from_proto(proto::CustomMetric {
    ///     value: 0.5,
    ///     ..Default::default()
    /// });
    /// assert_eq!(metric.name(), "");
    /// ```
    #[must_use]
    pub fn from_proto(message: proto::CustomMetric) -> Self {
        Self::from_parts(message.name, message.value, message.version)
    }
}

impl From<&CustomMetric> for proto::CustomMetric {
    fn from(metric: &CustomMetric) -> Self {
        metric.to_proto()
    }
}

impl From<CustomMetric> for proto::CustomMetric {
    fn from(metric: CustomMetric) -> Self {
        metric.to_proto()
    }
}

impl From<proto::CustomMetric> for CustomMetric {
    fn from(message: proto::CustomMetric) -> Self {
        Self::from_proto(message)
    }
}

/// Encodes a metric into protobuf bytes.
#[must_use]
pub fn encode_custom_metric(metric: &CustomMetric) -> Vec<u8> {
    let bytes = metric.to_proto().encode_to_vec();
    tracing::trace!(name = metric.name(), len = bytes.len(), "Encoded custom metric");
    bytes
}

/// Decodes a metric from protobuf bytes.
///
/// An empty slice is a valid message with every field unset.
///
/// # Errors
///
/// Returns [`WireError::Decode`] if the bytes are not a parseable message.
pub fn decode_custom_metric(bytes: &[u8]) -> Result<CustomMetric, WireError> {
    let message = proto::CustomMetric::decode(bytes).map_err(|e| {
        tracing::debug!(error = %e, len = bytes.len(), "Failed to decode custom metric");
        e
    })?;
    Ok(CustomMetric::from_proto(message))
}

/// Encodes a metric into protobuf bytes wrapped in a text encoding.
#[must_use]
pub fn encode_text(metric: &CustomMetric, encoding: WireEncoding) -> String {
    let bytes = encode_custom_metric(metric);
    match encoding {
        WireEncoding::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
        WireEncoding::Hex => hex::encode(bytes),
    }
}

/// Decodes a metric from text produced by [`encode_text`].
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the text is not valid for `encoding`, or if the decoded
/// bytes are not a parseable message.
pub fn decode_text(text: &str, encoding: WireEncoding) -> Result<CustomMetric, WireError> {
    let text = text.trim();
    let bytes = match encoding {
        WireEncoding::Base64 => base64::engine::general_purpose::STANDARD.decode(text)?,
        WireEncoding::Hex => hex::decode(text)?,
    };
    decode_custom_metric(&bytes)
}

#[cfg(test)]
#[path = "conversions_test.rs"]
mod conversions_test;
