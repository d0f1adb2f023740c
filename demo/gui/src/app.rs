//! TUI Application state and event handling.
//!
//! [`BenchmarkScreen`] owns the orchestrator and everything it draws from;
//! [`TuiApp`] owns the terminal and runs the event loop around it.

use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use bench_client::api_client::BenchmarkApi;
use bench_client::chart::ChartConfig;
use bench_client::config::ClientConfig;
use bench_client::error::{BenchmarkError, TransportError};
use bench_client::model::BenchmarkResult;
use bench_client::orchestrator::{BenchmarkOrchestrator, Completion, PendingBenchmark};
use bench_client::ui_state::UiState;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::input::{Field, FormAction, InputForm};
use crate::screens;
use crate::surface::TerminalSurface;
use crate::visualisation::TerminalChart;

/// Outcome of one request, tagged with its sequence number.
type Outcome = (u64, Result<BenchmarkResult, TransportError>);

/// Benchmark screen state, independent of the terminal.
pub struct BenchmarkScreen {
    form: InputForm,
    orchestrator: BenchmarkOrchestrator<TerminalSurface, TerminalChart>,
    api: Arc<dyn BenchmarkApi>,
    tx: UnboundedSender<Outcome>,
    rx: UnboundedReceiver<Outcome>,
    export_path: Option<PathBuf>,
    should_quit: bool,
}

impl BenchmarkScreen {
    /// Create an idle screen with the configured default inputs.
    pub fn new(config: &ClientConfig, api: Arc<dyn BenchmarkApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            form: InputForm::new(config.default_n.clone(), config.default_x.clone()),
            orchestrator: BenchmarkOrchestrator::new(TerminalSurface::new(), TerminalChart::new()),
            api,
            tx,
            rx,
            export_path: None,
            should_quit: false,
        }
    }

    /// Write the live chart as Chart.js JSON to `path` after every render.
    pub fn with_chart_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    pub fn state(&self) -> UiState {
        self.orchestrator.state()
    }

    pub fn surface(&self) -> &TerminalSurface {
        self.orchestrator.surface()
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Configuration of the chart currently on screen.
    pub fn live_chart(&self) -> Option<&ChartConfig> {
        let chart = self.orchestrator.chart();
        chart.live_handle().and_then(|id| chart.backend().config(id))
    }

    /// Handle keyboard input
    ///
    /// A pending notification swallows the key that dismisses it.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.orchestrator.surface_mut().dismiss_notification() {
            return;
        }

        match self.form.handle_key(key) {
            FormAction::Quit => self.should_quit = true,
            FormAction::Submit => self.submit(),
            FormAction::None => {}
        }
    }

    fn submit(&mut self) {
        let n = self.form.value(Field::N).to_string();
        let x = self.form.value(Field::X).to_string();
        match self.orchestrator.begin(&n, &x) {
            Ok(pending) => self.dispatch(pending),
            Err(BenchmarkError::Busy) => debug!("Enter ignored while loading"),
            Err(BenchmarkError::Validation(_)) => {}
        }
    }

    /// Send the request on a background task; the outcome comes back on the channel.
    fn dispatch(&self, pending: PendingBenchmark) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api.run_benchmark(&pending.request).await;
            if tx.send((pending.seq, outcome)).is_err() {
                debug!(seq = pending.seq, "Screen closed before benchmark completed");
            }
        });
    }

    /// Apply every outcome that has arrived, without waiting.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((seq, outcome)) = self.rx.try_recv() {
            self.apply(seq, outcome);
            applied += 1;
        }
        applied
    }

    /// Wait for the next outcome and apply it.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let (seq, outcome) = self.rx.recv().await?;
        Some(self.apply(seq, outcome))
    }

    fn apply(&mut self, seq: u64, outcome: Result<BenchmarkResult, TransportError>) -> Completion {
        let completion = self.orchestrator.complete(seq, outcome);
        if completion == Completion::Rendered {
            self.export_chart();
        }
        completion
    }

    fn export_chart(&self) {
        let (Some(path), Some(config)) = (&self.export_path, self.live_chart()) else {
            return;
        };
        match std::fs::write(path, config.to_json_string()) {
            Ok(()) => info!(path = %path.display(), "Chart configuration exported"),
            Err(err) => warn!(path = %path.display(), error = %err, "Chart export failed"),
        }
    }

    /// Draw the whole screen
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Inputs
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(area);

        Self::draw_header(frame, chunks[0]);
        screens::draw_inputs(frame, chunks[1], &self.form);

        let surface = self.surface();
        if surface.loading_visible() {
            screens::draw_loading(frame, chunks[2]);
        } else if surface.results_visible() {
            screens::draw_results(frame, chunks[2], surface, self.live_chart());
        } else {
            screens::draw_idle(frame, chunks[2]);
        }

        Self::draw_footer(frame, chunks[3]);

        if let Some(message) = surface.notification() {
            screens::draw_notification(frame, area, message);
        }
    }

    fn draw_header(frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(" Palindrome Benchmark - Iterative vs Recursive ")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    /// Draw footer with keybindings
    fn draw_footer(frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(" [Tab]Switch field | [Enter]Run | [Backspace]Delete | [q]Quit ")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

/// TUI Application: the benchmark screen on a crossterm terminal
pub struct TuiApp {
    screen: BenchmarkScreen,
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(screen: BenchmarkScreen) -> Result<Self> {
        let terminal = setup_terminal()?;
        Ok(Self { screen, terminal })
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.screen.poll_completions();

            let screen = &self.screen;
            self.terminal.draw(|frame| screen.draw(frame))?;

            // Short poll so completions are picked up while idle
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.screen.handle_key(key.code);
                    }
                }
            }

            if self.screen.should_quit() {
                break;
            }
        }

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Raw mode plus alternate screen; undone again if any later step fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    let attach = || -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    };

    match attach() {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            restore_terminal(&mut io::stdout());
            Err(err)
        }
    }
}

/// Leave raw mode and the alternate screen. Errors are ignored.
fn restore_terminal<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bench_client::error::{TRANSPORT_MESSAGE, VALIDATION_MESSAGE};
    use bench_client::model::{BenchmarkRequest, DisplayScalar};
    use ratatui::backend::TestBackend;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedApi {
        outcome: Result<BenchmarkResult, TransportError>,
        calls: AtomicUsize,
    }

    impl FixedApi {
        fn new(outcome: Result<BenchmarkResult, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BenchmarkApi for FixedApi {
        async fn run_benchmark(
            &self,
            _request: &BenchmarkRequest,
        ) -> Result<BenchmarkResult, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn sample_result() -> BenchmarkResult {
        BenchmarkResult {
            iterative_time: DisplayScalar::from("0.50 ms"),
            recursive_time: DisplayScalar::from("1.25 ms"),
            iterative_raw: Some(0.5),
            recursive_raw: Some(1.25),
            graph_labels: vec![DisplayScalar::from(500.0), DisplayScalar::from(1000.0)],
            graph_iterative: vec![0.2, 0.5],
            graph_recursive: vec![0.6, 1.25],
            samples: Some(vec!["ABA".to_string(), "12321".to_string()]),
        }
    }

    fn screen_with(api: Arc<FixedApi>, n: &str, x: &str) -> BenchmarkScreen {
        let config = ClientConfig {
            default_n: n.to_string(),
            default_x: x.to_string(),
            ..ClientConfig::default()
        };
        BenchmarkScreen::new(&config, api)
    }

    fn screen_text(screen: &BenchmarkScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| screen.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.get(x, y).symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_idle_screen_shows_defaults() {
        let screen = screen_with(FixedApi::new(Ok(sample_result())), "1000", "10");
        let text = screen_text(&screen);

        assert_eq!(screen.state(), UiState::Idle);
        assert!(text.contains("N (data count)"));
        assert!(text.contains("1000"));
        assert!(text.contains("press Enter to run"));
    }

    #[tokio::test]
    async fn test_successful_run_renders_results() {
        let api = FixedApi::new(Ok(sample_result()));
        let mut screen = screen_with(api.clone(), "1000", "10");

        screen.handle_key(KeyCode::Enter);
        assert!(screen.state().is_loading());
        assert!(screen_text(&screen).contains("Running benchmark..."));

        assert_eq!(screen.next_completion().await, Some(Completion::Rendered));
        assert_eq!(screen.state(), UiState::Results);
        assert_eq!(api.calls(), 1);

        let text = screen_text(&screen);
        assert!(text.contains("0.50 ms"));
        assert!(text.contains("1.25 ms"));
        assert!(text.contains("ABA #1"));
        assert!(text.contains("12321 #2"));

        let chart = screen.live_chart().unwrap();
        assert_eq!(chart.data.labels, vec!["500", "1000"]);
    }

    #[tokio::test]
    async fn test_enter_while_loading_is_ignored() {
        let api = FixedApi::new(Ok(sample_result()));
        let mut screen = screen_with(api.clone(), "1000", "10");

        screen.handle_key(KeyCode::Enter);
        screen.handle_key(KeyCode::Enter);

        assert_eq!(screen.next_completion().await, Some(Completion::Rendered));
        assert_eq!(screen.poll_completions(), 0);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_notifies_without_request() {
        let api = FixedApi::new(Ok(sample_result()));
        let mut screen = screen_with(api.clone(), "5", "10");

        screen.handle_key(KeyCode::Enter);

        assert_eq!(screen.state(), UiState::Idle);
        assert_eq!(screen.surface().notification(), Some(VALIDATION_MESSAGE));
        assert!(screen_text(&screen).contains("Notice"));

        // Dismissing key does not edit the form
        screen.handle_key(KeyCode::Char('7'));
        assert!(screen.surface().notification().is_none());
        assert_eq!(screen.form().value(Field::N), "5");

        tokio::task::yield_now().await;
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_notification_on_wide_terminal() {
        let mut screen = screen_with(FixedApi::new(Ok(sample_result())), "0", "0");
        screen.handle_key(KeyCode::Enter);
        assert_eq!(screen.surface().notification(), Some(VALIDATION_MESSAGE));

        let mut terminal = Terminal::new(TestBackend::new(1200, 40)).unwrap();
        terminal.draw(|frame| screen.draw(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Notice"));
    }

    #[tokio::test]
    async fn test_transport_failure_notifies() {
        let api = FixedApi::new(Err(TransportError::Status(500)));
        let mut screen = screen_with(api, "1000", "10");

        screen.handle_key(KeyCode::Enter);
        let completion = screen.next_completion().await;

        assert_eq!(
            completion,
            Some(Completion::Failed(TransportError::Status(500)))
        );
        assert_eq!(screen.state(), UiState::Error);
        assert!(!screen.surface().loading_visible());
        assert!(!screen.surface().results_visible());
        assert_eq!(screen.surface().notification(), Some(TRANSPORT_MESSAGE));
        assert!(screen.live_chart().is_none());
    }

    #[tokio::test]
    async fn test_chart_export_written_after_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        let api = FixedApi::new(Ok(sample_result()));
        let mut screen = screen_with(api, "1000", "10").with_chart_export(&path);

        screen.handle_key(KeyCode::Enter);
        screen.next_completion().await;

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["labels"][1], "1000");
    }

    #[test]
    fn test_restore_terminal_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out);

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\u{1b}[?1049l"));
    }

    #[tokio::test]
    async fn test_quit() {
        let mut screen = screen_with(FixedApi::new(Ok(sample_result())), "1000", "10");
        assert!(!screen.should_quit());
        screen.handle_key(KeyCode::Char('q'));
        assert!(screen.should_quit());
    }
}
