//! Data models for Metrack.
//!
//! This module contains the custom metric value object.

pub mod custom_metric;

pub use custom_metric::{CustomMetric, CustomMetricBuilder, CustomMetricError};
