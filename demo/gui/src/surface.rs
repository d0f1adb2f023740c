//! Terminal implementation of the client's UI surface.

use bench_client::render::{SampleListView, StatsView};
use bench_client::ui_state::UiSurface;

/// In-memory regions the screen draws from.
///
/// The orchestrator writes here; the draw pass only reads.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    loading: bool,
    results: bool,
    stats: Option<StatsView>,
    samples: Option<SampleListView>,
    notification: Option<String>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading_visible(&self) -> bool {
        self.loading
    }

    pub fn results_visible(&self) -> bool {
        self.results
    }

    pub fn stats(&self) -> Option<&StatsView> {
        self.stats.as_ref()
    }

    pub fn samples(&self) -> Option<&SampleListView> {
        self.samples.as_ref()
    }

    /// Pending notification, if one has not been dismissed yet.
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Dismiss the pending notification. Returns whether there was one.
    pub fn dismiss_notification(&mut self) -> bool {
        self.notification.take().is_some()
    }
}

impl UiSurface for TerminalSurface {
    fn notify(&mut self, message: &str) {
        self.notification = Some(message.to_string());
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results = visible;
    }

    fn show_stats(&mut self, stats: &StatsView) {
        self.stats = Some(stats.clone());
    }

    fn show_samples(&mut self, samples: &SampleListView) {
        self.samples = Some(samples.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_dismiss() {
        let mut surface = TerminalSurface::new();
        assert!(!surface.dismiss_notification());

        surface.notify("server down");
        assert_eq!(surface.notification(), Some("server down"));
        assert!(surface.dismiss_notification());
        assert!(surface.notification().is_none());
    }

    #[test]
    fn test_regions_replace_previous_content() {
        let mut surface = TerminalSurface::new();
        surface.show_samples(&SampleListView::Placeholder("none"));
        surface.show_samples(&SampleListView::Entries(vec![]));
        assert_eq!(surface.samples(), Some(&SampleListView::Entries(vec![])));
    }
}
