//! Screen rendering functions for the TUI.

use bench_client::chart::{ChartConfig, ITERATIVE_COLOR, RECURSIVE_COLOR};
use bench_client::render::{SampleListView, StatsView};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::input::{Field, InputForm};
use crate::surface::TerminalSurface;
use crate::visualisation::{draw_line_chart, parse_hex_color};

/// Samples per grid row.
const GRID_COLUMNS: usize = 4;

/// Draw the N and X input fields
pub fn draw_inputs(frame: &mut Frame, area: Rect, form: &InputForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (field, chunk) in [Field::N, Field::X].into_iter().zip(chunks.iter()) {
        let focused = form.focus() == field;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = form.value(field).to_string();
        if focused {
            text.push('_');
        }

        let input = Paragraph::new(text).block(
            Block::default()
                .title(format!(" {} ", field.title()))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, *chunk);
    }
}

/// Draw the loading indicator
pub fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Running benchmark...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, area);
}

/// Draw the hint shown while no results are visible
pub fn draw_idle(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter N and X, then press Enter to run the benchmark",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, area);
}

/// Draw stats, chart and sample grid
pub fn draw_results(
    frame: &mut Frame,
    area: Rect,
    surface: &TerminalSurface,
    chart: Option<&ChartConfig>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    if let Some(stats) = surface.stats() {
        draw_stats(frame, chunks[0], stats);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    if let Some(config) = chart {
        draw_line_chart(frame, body[0], config);
    }
    if let Some(samples) = surface.samples() {
        draw_samples(frame, body[1], samples);
    }
}

/// Draw the two timings, verbatim
pub fn draw_stats(frame: &mut Frame, area: Rect, stats: &StatsView) {
    let mut spans = vec![
        Span::styled(
            "  Iterative: ",
            Style::default().fg(parse_hex_color(ITERATIVE_COLOR)),
        ),
        Span::raw(stats.iterative.clone()),
        Span::raw("  |  "),
        Span::styled(
            "Recursive: ",
            Style::default().fg(parse_hex_color(RECURSIVE_COLOR)),
        ),
        Span::raw(stats.recursive.clone()),
    ];
    if let Some(ratio) = stats.ratio {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled("Ratio: ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!("{}x", format_ratio(ratio))));
    }

    let summary = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .block(Block::default().title(" Timing ").borders(Borders::ALL));
    frame.render_widget(summary, area);
}

/// Draw the sample grid
pub fn draw_samples(frame: &mut Frame, area: Rect, samples: &SampleListView) {
    let lines: Vec<Line> = match samples {
        SampleListView::Placeholder(message) => vec![Line::from(Span::styled(
            *message,
            Style::default().fg(Color::DarkGray),
        ))],
        SampleListView::Entries(entries) => entries
            .chunks(GRID_COLUMNS)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .flat_map(|entry| {
                        [
                            Span::styled(
                                entry.value.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!(" {}   ", entry.label()),
                                Style::default().fg(Color::DarkGray),
                            ),
                        ]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect(),
    };

    let grid = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Samples ").borders(Borders::ALL));
    frame.render_widget(grid, area);
}

/// Draw a notification popup over `area`
pub fn draw_notification(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(60, 7, area);
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Notice ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

/// Rectangle of `percent_x`% width and `height` rows centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Format a slowdown ratio
fn format_ratio(ratio: f64) -> String {
    if ratio >= 100.0 {
        format!("{:.0}", ratio)
    } else if ratio >= 10.0 {
        format!("{:.1}", ratio)
    } else {
        format!("{:.2}", ratio)
    }
}
