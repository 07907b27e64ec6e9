//! Charts built from metric series and the board that orders them.

use super::{Fill, MetricSeries};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default x axis title.
pub const VERSION_AXIS: &str = "Version";
/// Default y axis title.
pub const VALUE_AXIS: &str = "Value";

/// Errors that can occur when arranging or merging charts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Nothing to merge.
    #[error("No charts selected")]
    Empty,

    /// Charts with different axes cannot share one plot.
    #[error("Cannot merge charts with different axes: expected '{expected}', found '{found}'")]
    AxisMismatch {
        /// Axis title of the first chart.
        expected: String,
        /// Axis title of the offending chart.
        found: String,
    },

    /// A series index is past the end of the chart.
    #[error("Series index {index} out of range (chart has {len} series)")]
    SeriesOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of series on the chart.
        len: usize,
    },

    /// A chart index is past the end of the board.
    #[error("Chart index {index} out of range (board has {len} charts)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of charts on the board.
        len: usize,
    },
}

/// A chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title.
    pub title: String,
}

impl Axis {
    /// Creates an axis with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Layout settings of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Chart title.
    pub title: String,
    /// Horizontal axis.
    pub x_axis: Axis,
    /// Vertical axis.
    pub y_axis: Axis,
    /// Whether the legend is shown.
    #[serde(default)]
    pub show_legend: bool,
    /// Whether grid lines are shown.
    #[serde(default)]
    pub show_grid: bool,
}

impl ChartLayout {
    /// Default layout for a metric: versions against values.
    #[must_use]
    pub fn for_metric(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis: Axis::new(VERSION_AXIS),
            y_axis: Axis::new(VALUE_AXIS),
            show_legend: false,
            show_grid: false,
        }
    }
}

/// A chart: a layout and the series drawn on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Layout settings.
    pub layout: ChartLayout,
    /// Plotted series.
    pub series: Vec<MetricSeries>,
}

impl Chart {
    /// Creates a single-series chart titled after the metric.
    #[must_use]
    pub fn for_series(series: MetricSeries) -> Self {
        Self {
            layout: ChartLayout::for_metric(series.name.clone()),
            series: vec![series],
        }
    }

    /// Toggles the grid.
    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.layout.show_grid = show_grid;
        self
    }

    /// Toggles the legend.
    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.layout.show_legend = show_legend;
        self
    }

    /// Renames one series. The chart title is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::SeriesOutOfRange`] if `index` is invalid.
    pub fn rename_series(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), ChartError> {
        self.series_mut(index)?.name = name.into();
        Ok(())
    }

    /// Sets the area fill of one series.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::SeriesOutOfRange`] if `index` is invalid.
    pub fn set_fill(&mut self, index: usize, fill: Fill) -> Result<(), ChartError> {
        self.series_mut(index)?.fill = fill;
        Ok(())
    }

    fn series_mut(&mut self, index: usize) -> Result<&mut MetricSeries, ChartError> {
        let len = self.series.len();
        self.series
            .get_mut(index)
            .ok_or(ChartError::SeriesOutOfRange { index, len })
    }
}

/// Merges charts into one.
///
/// Every chart must share the first chart's axis titles. The merged chart
/// keeps those axes, joins the titles with `" / "`, and shows a legend.
///
/// # Errors
///
/// Returns [`ChartError::Empty`] for no charts and [`ChartError::AxisMismatch`]
/// when axes differ.
pub fn merge_charts(charts: &[Chart]) -> Result<Chart, ChartError> {
    let first = charts.first().ok_or(ChartError::Empty)?;

    for chart in &charts[1..] {
        for (expected, found) in [
            (&first.layout.x_axis, &chart.layout.x_axis),
            (&first.layout.y_axis, &chart.layout.y_axis),
        ] {
            if expected != found {
                return Err(ChartError::AxisMismatch {
                    expected: expected.title.clone(),
                    found: found.title.clone(),
                });
            }
        }
    }

    let title = charts
        .iter()
        .map(|c| c.layout.title.as_str())
        .collect::<Vec<_>>()
        .join(" / ");

    Ok(Chart {
        layout: ChartLayout {
            title,
            x_axis: first.layout.x_axis.clone(),
            y_axis: first.layout.y_axis.clone(),
            show_legend: true,
            show_grid: first.layout.show_grid,
        },
        series: charts.iter().flat_map(|c| c.series.clone()).collect(),
    })
}

/// An ordered grid of charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartBoard {
    charts: Vec<Chart>,
}

impl ChartBoard {
    /// Creates a board with one chart per series.
    #[must_use]
    pub fn from_series(series: Vec<MetricSeries>) -> Self {
        Self {
            charts: series.into_iter().map(Chart::for_series).collect(),
        }
    }

    /// Charts in display order.
    #[must_use]
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    /// Returns true if the board has no charts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Swaps two charts. Swapping a chart with itself does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::IndexOutOfRange`] if either index is invalid.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ChartError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.charts.swap(a, b);
        Ok(())
    }

    /// Replaces the selected charts with their merge.
    ///
    /// The merged chart takes the position of the lowest selected index.
    /// Duplicate indices are ignored. On error the board is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if no index is given, an index is invalid, or the
    /// selected charts have different axes.
    pub fn merge(&mut self, indices: &[usize]) -> Result<(), ChartError> {
        let mut selected = indices.to_vec();
        selected.sort_unstable();
        selected.dedup();

        for &index in &selected {
            self.check_index(index)?;
        }
        let Some(&target) = selected.first() else {
            return Err(ChartError::Empty);
        };

        let picked: Vec<Chart> = selected.iter().map(|&i| self.charts[i].clone()).collect();
        let merged = merge_charts(&picked)?;

        for &index in selected.iter().rev() {
            self.charts.remove(index);
        }
        self.charts.insert(target, merged);

        tracing::debug!(merged = selected.len(), position = target, "Merged charts");
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ChartError> {
        if index < self.charts.len() {
            Ok(())
        } else {
            Err(ChartError::IndexOutOfRange {
                index,
                len: self.charts.len(),
            })
        }
    }
}
