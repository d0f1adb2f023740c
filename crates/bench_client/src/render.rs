//! Pure mapping from a [`BenchmarkResult`] to view-models.
//!
//! Nothing here touches a UI surface. The orchestrator hands the resulting
//! [`ResultView`] to a [`UiSurface`](crate::ui_state::UiSurface) adapter and
//! the chart half to the [`ChartLifecycleManager`](crate::chart::ChartLifecycleManager).

use crate::model::BenchmarkResult;

/// Shown instead of the sample grid when the server found nothing.
pub const NO_SAMPLES_MESSAGE: &str = "No palindromes found.";

// =============================================================================
// Stats
// =============================================================================

/// The two headline timings, verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    /// Iterative time as sent by the server
    pub iterative: String,
    /// Recursive time as sent by the server
    pub recursive: String,
    /// Recursive / iterative slowdown, when raw timings are available
    pub ratio: Option<f64>,
}

/// Map the timing scalars without reformatting them.
pub fn render_stats(result: &BenchmarkResult) -> StatsView {
    let ratio = match (result.iterative_raw, result.recursive_raw) {
        (Some(iterative), Some(recursive)) if iterative > 0.0 => Some(recursive / iterative),
        _ => None,
    };

    StatsView {
        iterative: result.iterative_time.to_string(),
        recursive: result.recursive_time.to_string(),
        ratio,
    }
}

// =============================================================================
// Chart
// =============================================================================

/// Labels and both timing series, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    /// X-axis category labels
    pub labels: Vec<String>,
    /// Iterative series
    pub iterative: Vec<f64>,
    /// Recursive series
    pub recursive: Vec<f64>,
}

/// Extract the chart series. Ragged input is not trimmed.
pub fn render_chart_series(result: &BenchmarkResult) -> ChartSeries {
    ChartSeries {
        labels: result.graph_labels.iter().map(ToString::to_string).collect(),
        iterative: result.graph_iterative.clone(),
        recursive: result.graph_recursive.clone(),
    }
}

// =============================================================================
// Samples
// =============================================================================

/// One rendered sample with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleEntry {
    /// 1-based position in the server's sequence
    pub ordinal: usize,
    /// Sample value
    pub value: String,
}

impl SampleEntry {
    /// Ordinal label, e.g. `#1`.
    pub fn label(&self) -> String {
        format!("#{}", self.ordinal)
    }
}

/// Content of the sample grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleListView {
    /// Nothing to show; a single message replaces the grid
    Placeholder(&'static str),
    /// One entry per sample, in server order
    Entries(Vec<SampleEntry>),
}

impl SampleListView {
    /// Number of list entries (the placeholder is not an entry).
    pub fn entry_count(&self) -> usize {
        match self {
            SampleListView::Placeholder(_) => 0,
            SampleListView::Entries(entries) => entries.len(),
        }
    }
}

/// Map samples to grid entries, preserving order and duplicates.
pub fn render_samples(samples: Option<&[String]>) -> SampleListView {
    match samples {
        None | Some([]) => SampleListView::Placeholder(NO_SAMPLES_MESSAGE),
        Some(samples) => SampleListView::Entries(
            samples
                .iter()
                .enumerate()
                .map(|(index, value)| SampleEntry {
                    ordinal: index + 1,
                    value: value.clone(),
                })
                .collect(),
        ),
    }
}

// =============================================================================
// Combined view
// =============================================================================

/// Everything the results region shows for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub stats: StatsView,
    pub chart: ChartSeries,
    pub samples: SampleListView,
}

impl ResultView {
    /// Build all three views, in display order: stats, chart, samples.
    pub fn from_result(result: &BenchmarkResult) -> Self {
        let stats = render_stats(result);
        let chart = render_chart_series(result);
        let samples = render_samples(result.samples());
        Self {
            stats,
            chart,
            samples,
        }
    }
}
