//! Configuration module for Metrack.
//!
//! This module contains the codec settings shared by the library and the CLI.

pub mod codec;

pub use codec::{CodecConfig, UnknownEncoding, WireEncoding, ENCODING_ENV};
