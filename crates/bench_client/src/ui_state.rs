//! UI state and the surface adapter it drives.

use tracing::debug;

use crate::render::{SampleListView, StatsView};

/// Visible state of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting for the response to request `seq`
    Loading {
        /// Sequence number of the outstanding request
        seq: u64,
    },
    /// Results region visible
    Results,
    /// Last request failed
    Error,
}

impl UiState {
    /// Check if a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    /// Sequence number of the outstanding request.
    pub fn pending_seq(&self) -> Option<u64> {
        match self {
            UiState::Loading { seq } => Some(*seq),
            _ => None,
        }
    }
}

/// The regions the client writes to.
///
/// Implementations apply view-models to an actual UI; they never compute
/// anything themselves. The input fields are read by the caller and are not
/// part of this trait.
pub trait UiSurface {
    /// Show a blocking notification.
    fn notify(&mut self, message: &str);

    /// Show or hide the loading indicator.
    fn set_loading_visible(&mut self, visible: bool);

    /// Show or hide the results container.
    fn set_results_visible(&mut self, visible: bool);

    /// Replace the contents of the stats region.
    fn show_stats(&mut self, stats: &StatsView);

    /// Replace the contents of the sample grid.
    fn show_samples(&mut self, samples: &SampleListView);
}

/// Owns [`UiState`] and applies its visibility toggles.
#[derive(Debug, Default)]
pub struct UiStateController {
    state: UiState,
}

impl UiStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Hide results, show the loading indicator.
    pub fn enter_loading<S: UiSurface>(&mut self, surface: &mut S, seq: u64) {
        surface.set_results_visible(false);
        surface.set_loading_visible(true);
        self.transition(UiState::Loading { seq });
    }

    /// Hide the loading indicator, show results.
    pub fn enter_results<S: UiSurface>(&mut self, surface: &mut S) {
        surface.set_loading_visible(false);
        surface.set_results_visible(true);
        self.transition(UiState::Results);
    }

    /// Hide the loading indicator; results stay hidden.
    pub fn enter_error<S: UiSurface>(&mut self, surface: &mut S) {
        surface.set_loading_visible(false);
        self.transition(UiState::Error);
    }

    fn transition(&mut self, next: UiState) {
        debug!(from = ?self.state, to = ?next, "UI state transition");
        self.state = next;
    }
}
