use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::constants::HISTORY_LEN;
use crate::messages::LinkState;
use crate::monitor::history::SampleHistory;
use crate::ui::layout::MonitorLayout;
use crate::ui::theme;
use crate::ui::views::View;

pub struct MonitorView;

impl View for MonitorView {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = MonitorLayout::new(area);
        render_stats(state, frame, layout.stats);

        let temp_points = state.temperature.history.series();
        let temp_segments = band_segments(&temp_points);
        render_series_chart(
            &state.temperature.history,
            " TEMPERATURE °C ",
            &temp_segments,
            (0.0, 40.0),
            frame,
            layout.temperature,
        );

        let hum_segments = vec![(theme::HUMIDITY_BLUE, state.humidity.history.series())];
        render_series_chart(
            &state.humidity.history,
            " HUMIDITY % ",
            &hum_segments,
            (0.0, 100.0),
            frame,
            layout.humidity,
        );
    }
}

/// Split the temperature trace into runs of samples sharing a band color, so
/// a history mixing hot and cool readings shows differently colored segments
/// at once. Each run starts from the previous sample to keep the line
/// connected across a band change.
fn band_segments(points: &[(f64, f64)]) -> Vec<(Color, Vec<(f64, f64)>)> {
    let mut segments: Vec<(Color, Vec<(f64, f64)>)> = Vec::new();
    for &(x, y) in points {
        let color = theme::temperature_color(y);
        match segments.last_mut() {
            Some((last_color, run)) if *last_color == color => run.push((x, y)),
            _ => {
                let mut run = Vec::new();
                if let Some(&prev) = segments.last().and_then(|(_, run)| run.last()) {
                    run.push(prev);
                }
                run.push((x, y));
                segments.push((color, run));
            }
        }
    }
    segments
}

fn value_line(label: &str, value: Option<f64>, unit: &str, color: Color) -> Line<'static> {
    let text = match value {
        Some(v) => format!("{v:.1} {unit}"),
        None => format!("-- {unit}"),
    };
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(theme::DIM)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

fn render_stats(state: &AppState, frame: &mut Frame, area: Rect) {
    let temp_color = state
        .temperature
        .current()
        .map(theme::temperature_color)
        .unwrap_or(theme::FG);

    let led_requested = if state.led_requested { "ON" } else { "OFF" };
    let led_reported = match state.led_reported {
        Some(true) => "ON",
        Some(false) => "OFF",
        None => "--",
    };
    let led_color = if state.led_requested {
        theme::LED_ON
    } else {
        theme::LED_OFF
    };

    let link_line = match &state.link {
        LinkState::Connected => Line::from(Span::styled(
            "link: connected",
            Style::default().fg(theme::LINK_OK),
        )),
        LinkState::Connecting => Line::from(Span::styled(
            "link: connecting...",
            Style::default().fg(theme::DIM),
        )),
        LinkState::Lost(reason) => Line::from(Span::styled(
            format!("link: lost ({reason})"),
            Style::default().fg(theme::LINK_DOWN),
        )),
    };

    let lines = vec![
        Line::from(""),
        value_line("temp", state.temperature.current(), "°C", temp_color),
        value_line("hum", state.humidity.current(), "%", theme::HUMIDITY_BLUE),
        Line::from(""),
        value_line("avg temp", state.temperature.stats.average(), "°C", theme::FG),
        value_line("avg hum", state.humidity.stats.average(), "%", theme::FG),
        Line::from(Span::styled(
            format!(
                "readings  {}",
                state.temperature.stats.count() + state.humidity.stats.count()
            ),
            Style::default().fg(theme::DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("led req   ", Style::default().fg(theme::DIM)),
            Span::styled(led_requested, Style::default().fg(led_color)),
        ]),
        Line::from(vec![
            Span::styled("led dev   ", Style::default().fg(theme::DIM)),
            Span::styled(led_reported, Style::default().fg(theme::FG)),
        ]),
        Line::from(""),
        link_line,
    ];

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" STATISTICS "));
    frame.render_widget(panel, area);
}

fn render_series_chart(
    history: &SampleHistory,
    title: &str,
    segments: &[(Color, Vec<(f64, f64)>)],
    default_bounds: (f64, f64),
    frame: &mut Frame,
    area: Rect,
) {
    let datasets = segments
        .iter()
        .map(|(color, points)| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    // Pad observed bounds a little so the line doesn't hug the frame
    let (y_lo, y_hi) = match history.value_bounds() {
        Some((lo, hi)) => {
            let pad = ((hi - lo) * 0.15).max(1.0);
            (lo - pad, hi + pad)
        }
        None => default_bounds,
    };

    let oldest = history.oldest().map(|s| s.timestamp.clone()).unwrap_or_default();
    let latest = history.latest().map(|s| s.timestamp.clone()).unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme::DIM))
                .bounds([0.0, (HISTORY_LEN - 1) as f64])
                .labels([oldest, latest]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme::DIM))
                .bounds([y_lo, y_hi])
                .labels([format!("{y_lo:.1}"), format!("{y_hi:.1}")]),
        );
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::payload::{Reading, Series};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn temp_reading(value: f64) -> Reading {
        Reading {
            series: Series::Temperature,
            value,
            timestamp: "11:00:00".to_string(),
        }
    }

    #[test]
    fn band_segments_split_where_the_band_changes() {
        let points = vec![(0.0, 35.0), (1.0, 35.5), (2.0, 28.0), (3.0, 20.0)];
        let segments = band_segments(&points);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].0, theme::TEMP_HOT);
        assert_eq!(segments[0].1, vec![(0.0, 35.0), (1.0, 35.5)]);
        // Each new run starts from the previous sample so the line connects
        assert_eq!(segments[1].0, theme::TEMP_WARM);
        assert_eq!(segments[1].1, vec![(1.0, 35.5), (2.0, 28.0)]);
        assert_eq!(segments[2].0, theme::TEMP_COOL);
        assert_eq!(segments[2].1, vec![(2.0, 28.0), (3.0, 20.0)]);
    }

    #[test]
    fn uniform_history_is_a_single_segment() {
        let points = vec![(0.0, 21.0), (1.0, 22.0), (2.0, 23.0)];
        let segments = band_segments(&points);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].0, theme::TEMP_COOL);
        assert_eq!(segments[0].1.len(), 3);
    }

    #[test]
    fn mixed_history_renders_hot_and_cool_segments_at_once() {
        let mut state = AppState::new();
        for v in [35.0, 35.0, 35.0, 20.0] {
            state.record_reading(temp_reading(v));
        }

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| MonitorView.render(&state, frame, frame.area()))
            .unwrap();

        // Scan only the chart column; the stats panel (left of x = 32) also
        // colors its readout by band and would mask a chart regression.
        let buffer = terminal.backend().buffer();
        let chart_has_fg = |color: Color| {
            (33..80u16).any(|x| {
                (0..24u16).any(|y| buffer.cell((x, y)).is_some_and(|cell| cell.fg == color))
            })
        };
        assert!(
            chart_has_fg(theme::TEMP_HOT),
            "samples above 30 must render in the hot band color"
        );
        assert!(
            chart_has_fg(theme::TEMP_COOL),
            "the final cool sample must render in the cool band color"
        );
    }
}
