//! Metric series for model-version charts.
//!
//! Groups custom metrics by name so each metric can be plotted across model
//! versions, and arranges the resulting charts on a board.
//!
//! # Example
//!
//! ```
//! use shared::models::CustomMetric;
//! use shared::series::{group_into_series, ChartBoard};
//!
//! let metrics = vec![
//!     CustomMetric::new("precision", 0.81, "1"),
//!     CustomMetric::new("recall", 0.70, "1"),
//!     CustomMetric::new("precision", 0.87, "2"),
//! ];
//!
//! let series = group_into_series(&metrics);
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].versions(), vec!["1", "2"]);
//!
//! let board = ChartBoard::from_series(series);
//! assert_eq!(board.charts().len(), 2);
//! ```

pub mod chart;

pub use chart::{merge_charts, Axis, Chart, ChartBoard, ChartError, ChartLayout};

use crate::models::CustomMetric;
use serde::{Deserialize, Serialize};

/// One plotted point: a value recorded for a model version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Model version (x axis).
    pub version: String,
    /// Metric value (y axis).
    pub value: f64,
}

/// Kind of trace used to draw a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotType {
    /// Points placed by coordinate, optionally joined by lines.
    #[default]
    Scatter,
    /// Vertical bars.
    Bar,
}

/// Drawing mode of a scatter trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Lines only.
    #[serde(rename = "lines")]
    Lines,
    /// Markers only.
    #[serde(rename = "markers")]
    Markers,
    /// Lines with a marker at each point.
    #[default]
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Area fill under or between traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// No fill.
    #[default]
    None,
    /// Fill down to `y = 0`.
    ToZeroY,
    /// Fill across to `x = 0`.
    ToZeroX,
    /// Fill to the previous trace along y.
    ToNextY,
    /// Fill to the previous trace along x.
    ToNextX,
    /// Close the trace on itself and fill the shape.
    ToSelf,
    /// Fill to the previous trace.
    ToNext,
}

/// All values of one metric name, in the order they were seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Display name, initially the metric name.
    pub name: String,
    /// Points in insertion order.
    pub points: Vec<SeriesPoint>,
    /// Trace type.
    #[serde(default)]
    pub plot_type: PlotType,
    /// Drawing mode.
    #[serde(default)]
    pub mode: Mode,
    /// Area fill.
    #[serde(default)]
    pub fill: Fill,
}

impl MetricSeries {
    /// Creates an empty series.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            plot_type: PlotType::default(),
            mode: Mode::default(),
            fill: Fill::default(),
        }
    }

    /// Sets the trace type.
    #[must_use]
    pub fn with_plot_type(mut self, plot_type: PlotType) -> Self {
        self.plot_type = plot_type;
        self
    }

    /// Sets the drawing mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the area fill.
    #[must_use]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Appends a point.
    pub fn push(&mut self, version: impl Into<String>, value: f64) {
        self.points.push(SeriesPoint {
            version: version.into(),
            value,
        });
    }

    /// X values.
    #[must_use]
    pub fn versions(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.version.as_str()).collect()
    }

    /// Y values.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Groups metrics into one series per distinct name.
///
/// Series appear in the order their name was first seen; points keep input
/// order.
pub fn group_into_series<'a, I>(metrics: I) -> Vec<MetricSeries>
where
    I: IntoIterator<Item = &'a CustomMetric>,
{
    let mut series: Vec<MetricSeries> = Vec::new();

    for metric in metrics {
        if let Some(existing) = series.iter_mut().find(|s| s.name == metric.name()) {
            existing.push(metric.version(), metric.value());
        } else {
            let mut created = MetricSeries::new(metric.name());
            created.push(metric.version(), metric.value());
            series.push(created);
        }
    }

    tracing::debug!(count = series.len(), "Grouped custom metrics into series");
    series
}

/// Keeps the series whose name contains `needle`. An empty needle keeps all.
#[must_use]
pub fn filter_series(series: &[MetricSeries], needle: &str) -> Vec<MetricSeries> {
    series
        .iter()
        .filter(|s| s.name.contains(needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> Vec<CustomMetric> {
        vec![
            CustomMetric::new("precision", 0.81, "1"),
            CustomMetric::new("recall", 0.70, "1"),
            CustomMetric::new("precision", 0.87, "2"),
            CustomMetric::new("recall", 0.74, "2"),
            CustomMetric::new("val_loss", 0.32, "2"),
        ]
    }

    #[test]
    fn test_group_first_seen_order() {
        let series = group_into_series(&sample_metrics());

        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["precision", "recall", "val_loss"]);
    }

    #[test]
    fn test_group_points_in_input_order() {
        let series = group_into_series(&sample_metrics());

        assert_eq!(series[0].versions(), vec!["1", "2"]);
        assert_eq!(series[0].values(), vec![0.81, 0.87]);
        assert_eq!(series[2].points.len(), 1);
    }

    #[test]
    fn test_group_empty_input() {
        let metrics: Vec<CustomMetric> = Vec::new();
        assert!(group_into_series(&metrics).is_empty());
    }

    #[test]
    fn test_filter_series_substring() {
        let series = group_into_series(&sample_metrics());

        let filtered = filter_series(&series, "rec");
        let names: Vec<&str> = filtered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["precision", "recall"]);
    }

    #[test]
    fn test_filter_series_empty_needle_keeps_all() {
        let series = group_into_series(&sample_metrics());
        assert_eq!(filter_series(&series, "").len(), 3);
    }

    #[test]
    fn test_filter_series_no_match() {
        let series = group_into_series(&sample_metrics());
        assert!(filter_series(&series, "Precision").is_empty());
    }

    #[test]
    fn test_series_serialization() {
        let mut series = MetricSeries::new("auc");
        series.push("3", 0.5);

        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(
            json,
            r#"{"name":"auc","points":[{"version":"3","value":0.5}],"plot_type":"scatter","mode":"lines+markers","fill":"none"}"#
        );
    }

    #[test]
    fn test_series_settings_serialization() {
        let series = MetricSeries::new("auc")
            .with_plot_type(PlotType::Bar)
            .with_mode(Mode::Markers)
            .with_fill(Fill::ToZeroY);

        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains(r#""plot_type":"bar""#));
        assert!(json.contains(r#""mode":"markers""#));
        assert!(json.contains(r#""fill":"tozeroy""#));
    }

    #[test]
    fn test_fill_names() {
        let names: Vec<String> = [
            Fill::None,
            Fill::ToZeroY,
            Fill::ToZeroX,
            Fill::ToNextY,
            Fill::ToNextX,
            Fill::ToSelf,
            Fill::ToNext,
        ]
        .iter()
        .map(|fill| serde_json::to_string(fill).unwrap())
        .collect();

        assert_eq!(
            names,
            vec![
                r#""none""#,
                r#""tozeroy""#,
                r#""tozerox""#,
                r#""tonexty""#,
                r#""tonextx""#,
                r#""toself""#,
                r#""tonext""#,
            ]
        );
    }

    #[test]
    fn test_series_settings_default_when_missing() {
        let json = r#"{"name":"auc","points":[]}"#;
        let series: MetricSeries = serde_json::from_str(json).unwrap();

        assert_eq!(series.plot_type, PlotType::Scatter);
        assert_eq!(series.mode, Mode::LinesMarkers);
        assert_eq!(series.fill, Fill::None);
    }
}
