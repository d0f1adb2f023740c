//! Chart lifecycle: one live line chart, replaced on every render.
//!
//! The widget itself is an external collaborator reached through
//! [`ChartBackend`]: a browser binding would hand [`ChartConfig`] to Chart.js
//! as JSON, the terminal front-end draws it with ratatui. Either way the
//! [`ChartLifecycleManager`] guarantees that the previous instance is
//! destroyed before the next one is created.

use serde::Serialize;
use tracing::debug;

use crate::render::ChartSeries;

// =============================================================================
// Fixed visual encoding
// =============================================================================

/// Name of the iterative series.
pub const ITERATIVE_LABEL: &str = "Iterative";
/// Name of the recursive series.
pub const RECURSIVE_LABEL: &str = "Recursive";
/// Iterative series colour.
pub const ITERATIVE_COLOR: &str = "#5c85f7";
/// Recursive series colour.
pub const RECURSIVE_COLOR: &str = "#f7a05c";
/// Bezier tension of both lines.
pub const LINE_TENSION: f64 = 0.3;
/// Legend text colour.
pub const LEGEND_COLOR: &str = "#ccc";
/// Axis tick colour.
pub const TICK_COLOR: &str = "#888";
/// Gridline colour.
pub const GRID_COLOR: &str = "#333";
/// Axis title colour.
pub const AXIS_TITLE_COLOR: &str = "#666";
/// X axis title.
pub const X_AXIS_TITLE: &str = "Data count (N)";
/// Y axis title.
pub const Y_AXIS_TITLE: &str = "Time (ms)";

// =============================================================================
// Chart.js compatible configuration
// =============================================================================

/// One plotted series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// Series name shown in the legend
    pub label: String,
    /// Points, paired with the labels by index
    pub data: Vec<f64>,
    /// Line colour
    pub border_color: String,
    /// Point colour
    pub background_color: String,
    /// Bezier tension
    pub tension: f64,
}

impl ChartDataset {
    fn line(label: &str, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color: color.to_string(),
            background_color: color.to_string(),
            tension: LINE_TENSION,
        }
    }
}

/// Labels plus datasets.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    /// X-axis category labels
    pub labels: Vec<String>,
    /// Plotted series
    pub datasets: Vec<ChartDataset>,
}

/// A colour-only style block (ticks, grid, legend labels).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorOptions {
    pub color: String,
}

impl ColorOptions {
    fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }
}

/// Axis title block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: String,
}

/// Styling of one axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisOptions {
    pub ticks: ColorOptions,
    pub grid: ColorOptions,
    pub title: AxisTitle,
}

impl AxisOptions {
    fn titled(text: &str) -> Self {
        Self {
            ticks: ColorOptions::new(TICK_COLOR),
            grid: ColorOptions::new(GRID_COLOR),
            title: AxisTitle {
                display: true,
                text: text.to_string(),
                color: AXIS_TITLE_COLOR.to_string(),
            },
        }
    }
}

/// Both axes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScaleOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

/// Legend block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendOptions {
    pub labels: ColorOptions,
}

/// Plugin block (only the legend is configured).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
}

/// Chart options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            plugins: PluginOptions {
                legend: LegendOptions {
                    labels: ColorOptions::new(LEGEND_COLOR),
                },
            },
            scales: ScaleOptions {
                x: AxisOptions::titled(X_AXIS_TITLE),
                y: AxisOptions::titled(Y_AXIS_TITLE),
            },
        }
    }
}

/// Chart.js compatible line chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    /// Chart type, always `line`
    #[serde(rename = "type")]
    pub chart_type: String,
    /// Chart data
    pub data: ChartData,
    /// Chart options
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Iterative-vs-recursive line chart with the fixed encoding.
    pub fn line(labels: Vec<String>, iterative: Vec<f64>, recursive: Vec<f64>) -> Self {
        Self {
            chart_type: "line".to_string(),
            data: ChartData {
                labels,
                datasets: vec![
                    ChartDataset::line(ITERATIVE_LABEL, iterative, ITERATIVE_COLOR),
                    ChartDataset::line(RECURSIVE_LABEL, recursive, RECURSIVE_COLOR),
                ],
            },
            options: ChartOptions::default(),
        }
    }

    /// Line chart from a rendered [`ChartSeries`].
    pub fn from_series(series: &ChartSeries) -> Self {
        Self::line(
            series.labels.clone(),
            series.iterative.clone(),
            series.recursive.clone(),
        )
    }

    /// Series by name.
    pub fn dataset(&self, label: &str) -> Option<&ChartDataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }

    /// Chart.js JSON for a browser widget.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// =============================================================================
// Widget contract and lifecycle
// =============================================================================

/// The draw/destroy contract of a chart widget.
pub trait ChartBackend {
    /// Handle to one live widget instance.
    type Handle;

    /// Construct and draw a new widget instance.
    fn create(&mut self, config: &ChartConfig) -> Self::Handle;

    /// Tear down a widget instance and release what it holds.
    fn destroy(&mut self, handle: Self::Handle);
}

/// Owns the single live chart instance.
///
/// The instance is only ever destroyed by [`replace`](Self::replace); once
/// created, a chart stays on screen until the next render.
pub struct ChartLifecycleManager<B: ChartBackend> {
    backend: B,
    live: Option<B::Handle>,
    renders: u64,
}

impl<B: ChartBackend> ChartLifecycleManager<B> {
    /// Create a manager with no live chart.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: None,
            renders: 0,
        }
    }

    /// Redraw the chart for the given labels and series.
    pub fn render(&mut self, labels: Vec<String>, iterative: Vec<f64>, recursive: Vec<f64>) {
        self.replace(ChartConfig::line(labels, iterative, recursive));
    }

    /// Destroy the live instance, if any, then create one from `config`.
    pub fn replace(&mut self, config: ChartConfig) {
        if let Some(previous) = self.live.take() {
            self.backend.destroy(previous);
            debug!(render = self.renders, "Destroyed previous chart");
        }
        self.live = Some(self.backend.create(&config));
        self.renders += 1;
        debug!(
            render = self.renders,
            points = config.data.labels.len(),
            "Created chart"
        );
    }

    /// Whether a chart instance is live.
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Handle of the live instance.
    pub fn live_handle(&self) -> Option<&B::Handle> {
        self.live.as_ref()
    }

    /// Number of charts created so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
