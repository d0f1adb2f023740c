//! Benchmark orchestration.
//!
//! A run is split at its single suspension point so a UI loop can stay
//! responsive while the request is in flight:
//!
//! 1. [`BenchmarkOrchestrator::begin`] validates input and enters `Loading`,
//!    returning the request tagged with a sequence number.
//! 2. The caller sends the request (on a spawned task, or inline via
//!    [`BenchmarkOrchestrator::run_benchmark`]).
//! 3. [`BenchmarkOrchestrator::complete`] applies the outcome, discarding it
//!    if its sequence number is not the outstanding one.
//!
//! A trigger while `Loading` is refused with [`BenchmarkError::Busy`].

use tracing::{error, info, warn};

use crate::api_client::BenchmarkApi;
use crate::chart::{ChartBackend, ChartLifecycleManager};
use crate::error::{BenchmarkError, TransportError};
use crate::model::{BenchmarkRequest, BenchmarkResult};
use crate::render::ResultView;
use crate::ui_state::{UiState, UiStateController, UiSurface};
use crate::validation::validate;

/// A request that has been issued and awaits completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBenchmark {
    /// Sequence number to pass back to [`BenchmarkOrchestrator::complete`]
    pub seq: u64,
    /// Validated request body
    pub request: BenchmarkRequest,
}

/// What [`BenchmarkOrchestrator::complete`] did with an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Results rendered and shown.
    Rendered,
    /// Failure surfaced; results stay hidden.
    Failed(TransportError),
    /// Outcome did not belong to the outstanding request and was dropped.
    Stale,
}

/// Drives validation, the request lifecycle, UI state and rendering.
pub struct BenchmarkOrchestrator<S: UiSurface, B: ChartBackend> {
    surface: S,
    chart: ChartLifecycleManager<B>,
    ui: UiStateController,
    last_seq: u64,
}

impl<S: UiSurface, B: ChartBackend> BenchmarkOrchestrator<S, B> {
    /// Create an idle orchestrator writing to `surface` and `chart_backend`.
    pub fn new(surface: S, chart_backend: B) -> Self {
        Self {
            surface,
            chart: ChartLifecycleManager::new(chart_backend),
            ui: UiStateController::new(),
            last_seq: 0,
        }
    }

    /// Validate input and enter `Loading`.
    ///
    /// On invalid input the user is notified and the state is left as is.
    pub fn begin(&mut self, raw_n: &str, raw_x: &str) -> Result<PendingBenchmark, BenchmarkError> {
        if let Some(seq) = self.ui.state().pending_seq() {
            warn!(pending = seq, "Benchmark trigger ignored: request in flight");
            return Err(BenchmarkError::Busy);
        }

        let request = match validate(raw_n, raw_x) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "Benchmark input rejected");
                self.surface.notify(err.user_message());
                return Err(err.into());
            }
        };

        self.last_seq += 1;
        let seq = self.last_seq;
        self.ui.enter_loading(&mut self.surface, seq);
        info!(seq, n = request.n, x = request.x, "Benchmark request issued");

        Ok(PendingBenchmark { seq, request })
    }

    /// Apply the outcome of request `seq`.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<BenchmarkResult, TransportError>,
    ) -> Completion {
        if self.ui.state().pending_seq() != Some(seq) {
            warn!(seq, state = ?self.ui.state(), "Discarding stale benchmark response");
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                if !result.is_aligned() {
                    warn!(
                        seq,
                        labels = result.graph_labels.len(),
                        iterative = result.graph_iterative.len(),
                        recursive = result.graph_recursive.len(),
                        "Graph series are not aligned"
                    );
                }
                self.apply(ResultView::from_result(&result));
                self.ui.enter_results(&mut self.surface);
                info!(seq, "Benchmark results rendered");
                Completion::Rendered
            }
            Err(err) => {
                error!(seq, error = %err, "Benchmark request failed");
                self.surface.notify(err.user_message());
                self.ui.enter_error(&mut self.surface);
                Completion::Failed(err)
            }
        }
    }

    /// Validate, send through `api`, and apply the outcome.
    pub async fn run_benchmark<A>(
        &mut self,
        api: &A,
        raw_n: &str,
        raw_x: &str,
    ) -> Result<Completion, BenchmarkError>
    where
        A: BenchmarkApi + ?Sized,
    {
        let pending = self.begin(raw_n, raw_x)?;
        let outcome = api.run_benchmark(&pending.request).await;
        Ok(self.complete(pending.seq, outcome))
    }

    /// Stats, then chart, then samples.
    fn apply(&mut self, view: ResultView) {
        self.surface.show_stats(&view.stats);
        let series = view.chart;
        self.chart
            .render(series.labels, series.iterative, series.recursive);
        self.surface.show_samples(&view.samples);
    }

    pub fn state(&self) -> UiState {
        self.ui.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn chart(&self) -> &ChartLifecycleManager<B> {
        &self.chart
    }
}
