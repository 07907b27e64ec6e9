//! Codec configuration for text envelopes around the protobuf wire form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the text encoding.
pub const ENCODING_ENV: &str = "METRACK_ENCODING";

/// Text encoding used to carry protobuf bytes through text channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireEncoding {
    /// Standard base64 with padding.
    #[default]
    Base64,
    /// Lowercase hexadecimal.
    Hex,
}

impl fmt::Display for WireEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64 => write!(f, "base64"),
            Self::Hex => write!(f, "hex"),
        }
    }
}

/// Error returned for an unknown encoding name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown wire encoding: '{0}' (expected 'base64' or 'hex')")]
pub struct UnknownEncoding(pub String);

impl FromStr for WireEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}

/// Codec settings.
///
/// Values can be set via environment variables:
/// - `METRACK_ENCODING`: `base64` (default) or `hex`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Text encoding for encoded messages.
    pub encoding: WireEncoding,
}

impl CodecConfig {
    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `METRACK_ENCODING` is set to an unknown value.
    pub fn from_env() -> Result<Self, UnknownEncoding> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoding variable holds an unknown value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UnknownEncoding>
    where
        F: Fn(&str) -> Option<String>,
    {
        let encoding = lookup(ENCODING_ENV)
            .map(|value| value.parse::<WireEncoding>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { encoding })
    }
}
