//! # bench_client: Palindrome Benchmark Client
//!
//! Client-side orchestration for the iterative-vs-recursive palindrome search
//! benchmark. The remote server runs the benchmark; this crate validates the
//! request, drives the single outstanding request, and maps the result onto
//! a UI surface and a chart widget.
//!
//! ## Pipeline
//!
//! ```text
//! validation ──▶ api_client ──▶ orchestrator ──▶ render ──▶ UiSurface
//!                                    │                  └──▶ chart (ChartBackend)
//!                                    └──▶ ui_state
//! ```
//!
//! - `validation`: parses and bounds N and X
//! - `api_client`: `POST` to the benchmark endpoint, strict decode
//! - `orchestrator`: `Idle → Loading → {Results | Error}` with sequence-tagged requests
//! - `render`: pure result → view-model mapping
//! - `chart`: Chart.js compatible config and the single-instance lifecycle
//! - `ui_state`: visibility toggles over the [`ui_state::UiSurface`] adapter
//!
//! ## Usage Examples
//!
//! ```rust
//! use bench_client::render::{render_samples, SampleListView};
//! use bench_client::validation::validate;
//!
//! let request = validate("1000", "10").unwrap();
//! assert_eq!(request.n, 1000);
//!
//! let samples = vec!["A 121 A".to_string()];
//! let SampleListView::Entries(entries) = render_samples(Some(&samples)) else {
//!     unreachable!()
//! };
//! assert_eq!(entries[0].label(), "#1");
//! ```

pub mod api_client;
pub mod chart;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod render;
pub mod ui_state;
pub mod validation;

/// Client version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::api_client::{ApiClient, BenchmarkApi};
    pub use crate::chart::{ChartBackend, ChartConfig, ChartLifecycleManager};
    pub use crate::config::{build_config, CliArgs, ClientConfig, LogLevel};
    pub use crate::error::{BenchmarkError, TransportError, ValidationError};
    pub use crate::model::{BenchmarkRequest, BenchmarkResult, DisplayScalar};
    pub use crate::orchestrator::{BenchmarkOrchestrator, Completion, PendingBenchmark};
    pub use crate::render::{ResultView, SampleEntry, SampleListView, StatsView};
    pub use crate::ui_state::{UiState, UiSurface};
}
