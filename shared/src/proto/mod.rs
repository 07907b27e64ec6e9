//! Protobuf wire types.
//!
//! The message layout follows `proto/custom_metric.proto`. Field tags must stay
//! in sync with that schema.
//!
//! # Example
//!
//! ```
//! use prost::Message;
//! use shared::proto::CustomMetric;
//!
//! let message = CustomMetric {
//!     name: "recall".to_string(),
//!     value: 0.9,
//!     version: "v2".to_string(),
//! };
//! let bytes = message.encode_to_vec();
//! assert_eq!(CustomMetric::decode(bytes.as_slice()).unwrap(), message);
//! ```

pub mod conversions;

/// Wire form of a custom metric (`metrack.service.CustomMetric`).
///
/// Unset fields decode to the protobuf defaults: empty strings and `0.0`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomMetric {
    /// Metric name.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Metric value.
    #[prost(double, tag = "2")]
    pub value: f64,
    /// Model version the metric belongs to.
    #[prost(string, tag = "3")]
    pub version: String,
}
