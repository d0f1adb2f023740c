//! Terminal chart widget: the `ChartBackend` for ratatui.
//!
//! Every chart the lifecycle manager creates gets an entry in a widget table
//! keyed by [`ChartId`]; destroying removes it. The draw pass renders the
//! entry the manager currently holds, so a leaked instance would show up as a
//! second table entry rather than silently staying alive.

use std::collections::HashMap;

use bench_client::chart::{ChartBackend, ChartConfig};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

// =============================================================================
// Widget table
// =============================================================================

/// Handle to one live terminal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(u64);

/// Widget table backing the terminal chart.
#[derive(Debug, Default)]
pub struct TerminalChart {
    next_id: u64,
    widgets: HashMap<ChartId, ChartConfig>,
}

impl TerminalChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of a live chart.
    pub fn config(&self, id: &ChartId) -> Option<&ChartConfig> {
        self.widgets.get(id)
    }

    /// Number of live charts.
    pub fn live_count(&self) -> usize {
        self.widgets.len()
    }
}

impl ChartBackend for TerminalChart {
    type Handle = ChartId;

    fn create(&mut self, config: &ChartConfig) -> ChartId {
        self.next_id += 1;
        let id = ChartId(self.next_id);
        self.widgets.insert(id, config.clone());
        id
    }

    fn destroy(&mut self, handle: ChartId) {
        self.widgets.remove(&handle);
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw a line chart from its Chart.js style configuration.
///
/// Points are placed at their index; labels supply the X tick text. Series
/// of different lengths are drawn as they are.
///
/// # Arguments
///
/// * `frame` - ratatui frame
/// * `area` - drawing area
/// * `config` - the live chart configuration
pub fn draw_line_chart(frame: &mut Frame, area: Rect, config: &ChartConfig) {
    let points: Vec<Vec<(f64, f64)>> = config
        .data
        .datasets
        .iter()
        .map(|dataset| to_chart_data_points(&dataset.data))
        .collect();

    let datasets: Vec<Dataset> = config
        .data
        .datasets
        .iter()
        .zip(&points)
        .map(|(dataset, data)| {
            Dataset::default()
                .name(dataset.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(parse_hex_color(&dataset.border_color)))
                .data(data)
        })
        .collect();

    let scales = &config.options.scales;
    let longest = points.iter().map(Vec::len).max().unwrap_or(0);
    let x_bounds = [0.0, (longest.max(2) - 1) as f64];
    let all_values: Vec<f64> = config
        .data
        .datasets
        .iter()
        .flat_map(|d| d.data.iter().copied())
        .collect();
    let y_bounds = compute_y_bounds(&all_values);

    let tick_style = Style::default().fg(parse_hex_color(&scales.x.ticks.color));
    let x_labels: Vec<Span> = tick_labels(&config.data.labels)
        .into_iter()
        .map(|label| Span::styled(label, tick_style))
        .collect();
    let y_labels: Vec<Span> = [y_bounds[0], (y_bounds[0] + y_bounds[1]) / 2.0, y_bounds[1]]
        .iter()
        .map(|v| Span::styled(format!("{:.2}", v), tick_style))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Iterative vs Recursive ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled(
                    scales.x.title.text.clone(),
                    Style::default().fg(parse_hex_color(&scales.x.title.color)),
                ))
                .style(Style::default().fg(parse_hex_color(&scales.x.grid.color)))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    scales.y.title.text.clone(),
                    Style::default().fg(parse_hex_color(&scales.y.title.color)),
                ))
                .style(Style::default().fg(parse_hex_color(&scales.y.grid.color)))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

// =============================================================================
// Chart data helpers
// =============================================================================

/// Pair each value with its index.
pub fn to_chart_data_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

/// Y axis bounds with a 20% headroom above the largest value.
pub fn compute_y_bounds(values: &[f64]) -> [f64; 2] {
    let max_val = values.iter().copied().fold(0.0_f64, f64::max);
    if max_val > 0.0 {
        [0.0, max_val * 1.2]
    } else {
        [0.0, 1.0]
    }
}

/// X tick labels: all of them when few, otherwise first, middle and last.
fn tick_labels(labels: &[String]) -> Vec<String> {
    if labels.len() <= 6 {
        return labels.to_vec();
    }
    vec![
        labels[0].clone(),
        labels[labels.len() / 2].clone(),
        labels[labels.len() - 1].clone(),
    ]
}

/// Parse `#rgb` or `#rrggbb`; anything else falls back to white.
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if !digits.is_ascii() {
        return Color::White;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    let rgb = match digits.len() {
        3 => digits
            .chars()
            .map(|c| channel(&c.to_string()).map(|v| v * 17))
            .collect::<Option<Vec<u8>>>(),
        6 => (0..3)
            .map(|i| channel(&digits[i * 2..i * 2 + 2]))
            .collect::<Option<Vec<u8>>>(),
        _ => None,
    };

    match rgb.as_deref() {
        Some([r, g, b]) => Color::Rgb(*r, *g, *b),
        _ => Color::White,
    }
}
