//! Metrack Shared Library
//!
//! This crate contains the custom metric model, its protobuf wire codec and
//! the chart series used to plot metrics across model versions.
//!
//! # Modules
//!
//! - [`models`] - The `CustomMetric` value object
//! - [`proto`] - Protobuf wire message and conversions
//! - [`series`] - Grouping metrics into chartable series
//! - [`config`] - Codec configuration
//!
//! # Example
//!
//! ```
//! use shared::models::CustomMetric;
//! use shared::proto::conversions::{decode_custom_metric, encode_custom_metric};
//!
//! let metric = CustomMetric::new("precision", 0.87, "v1");
//! let bytes = encode_custom_metric(&metric);
//!
//! assert_eq!(decode_custom_metric(&bytes).unwrap(), metric);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod models;
pub mod proto;
pub mod series;

/// Re-export common dependencies for convenience.
pub use prost;
pub use serde;
pub use serde_json;
