//! Custom metric data model.
//!
//! Defines `CustomMetric`, an immutable named and versioned metric value
//! attached to a registered model version.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while constructing a custom metric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomMetricError {
    /// A required field was absent.
    #[error("{field} cannot be None")]
    InvalidArgument {
        /// Name of the missing field.
        field: &'static str,
    },
}

/// A named, versioned numeric metric.
///
/// All fields are fixed at construction. Instances built through
/// [`CustomMetric::try_new`], the builder, or JSON are checked for absent
/// fields; instances decoded from the protobuf message are not (see
/// [`CustomMetric::from_proto`](crate::models::CustomMetric::from_proto)).
///
/// # Example
///
/// ```
/// use shared::models::CustomMetric;
///
/// let metric = CustomMetric::new("precision", 0.87, "v1");
///
/// assert_eq!(metric.name(), "precision");
/// assert_eq!(metric.value(), 0.87);
/// assert_eq!(metric.version(), "v1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCustomMetric")]
pub struct CustomMetric {
    name: String,
    #[serde(serialize_with = "json_float::serialize")]
    value: f64,
    version: String,
}

impl CustomMetric {
    /// Creates a custom metric from values that are all present.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            version: version.into(),
        }
    }

    /// Creates a custom metric, rejecting any absent field.
    ///
    /// Only absence is checked. Empty strings, NaN and negative values are
    /// accepted as given.
    ///
    /// # Errors
    ///
    /// Returns [`CustomMetricError::InvalidArgument`] naming the first absent
    /// field, checked in the order `name`, `value`, `version`.
    ///
    /// # Example
    ///
    /// ```
    /// use shared::models::{CustomMetric, CustomMetricError};
    ///
    /// let result = CustomMetric::try_new(None, Some(0.5), Some("v1".to_string()));
    /// assert_eq!(
    ///     result,
    ///     Err(CustomMetricError::InvalidArgument { field: "name" })
    /// );
    /// ```
    pub fn try_new(
        name: Option<String>,
        value: Option<f64>,
        version: Option<String>,
    ) -> Result<Self, CustomMetricError> {
        let name = require("name", name)?;
        let value = require("value", value)?;
        let version = require("version", version)?;
        Ok(Self {
            name,
            value,
            version,
        })
    }

    /// Returns a builder for incremental construction.
    #[must_use]
    pub fn builder() -> CustomMetricBuilder {
        CustomMetricBuilder::default()
    }

    /// The metric name (e.g., "precision").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The metric value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The model version this metric was recorded for.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Builds an instance without any checks. Used by the wire decoding path.
    pub(crate) fn from_parts(name: String, value: f64, version: String) -> Self {
        Self {
            name,
            value,
            version,
        }
    }
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, CustomMetricError> {
    value.ok_or_else(|| {
        tracing::debug!(field, "Rejected custom metric with absent field");
        CustomMetricError::InvalidArgument { field }
    })
}

impl fmt::Display for CustomMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={} value={} version={}",
            self.name, self.value, self.version
        )
    }
}

/// Incremental constructor for [`CustomMetric`].
///
/// ```
/// use shared::models::CustomMetric;
///
/// let metric = CustomMetric::builder()
///     .name("recall")
///     .value(0.9)
///     .version("v2")
///     .build()
///     .unwrap();
///
/// assert_eq!(metric, CustomMetric::new("recall", 0.9, "v2"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CustomMetricBuilder {
    name: Option<String>,
    value: Option<f64>,
    version: Option<String>,
}

impl CustomMetricBuilder {
    /// Sets the metric name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the metric value.
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the model version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builds the metric.
    ///
    /// # Errors
    ///
    /// Returns [`CustomMetricError::InvalidArgument`] if a field was never set.
    pub fn build(self) -> Result<CustomMetric, CustomMetricError> {
        CustomMetric::try_new(self.name, self.value, self.version)
    }
}

/// JSON shape before validation. Missing keys and `null` both map to `None`.
#[derive(Deserialize)]
struct RawCustomMetric {
    name: Option<String>,
    #[serde(default, deserialize_with = "json_float::deserialize_option")]
    value: Option<f64>,
    version: Option<String>,
}

/// JSON form of `f64` values, following the protobuf JSON mapping: finite
/// values are numbers, non-finite values are the strings `"NaN"`,
/// `"Infinity"` and `"-Infinity"`.
mod json_float {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    const NAN: &str = "NaN";
    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value.is_infinite() {
            serializer.serialize_str(if value.is_sign_positive() {
                INFINITY
            } else {
                NEG_INFINITY
            })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub(super) fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(value)) => Ok(Some(value)),
            Some(Repr::Text(text)) => match text.as_str() {
                NAN => Ok(Some(f64::NAN)),
                INFINITY => Ok(Some(f64::INFINITY)),
                NEG_INFINITY => Ok(Some(f64::NEG_INFINITY)),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number, \"NaN\", \"Infinity\" or \"-Infinity\"",
                )),
            },
        }
    }
}

impl TryFrom<RawCustomMetric> for CustomMetric {
    type Error = CustomMetricError;

    fn try_from(raw: RawCustomMetric) -> Result<Self, Self::Error> {
        Self::try_new(raw.name, raw.value, raw.version)
    }
}
