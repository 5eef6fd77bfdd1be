use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::constants::{PLOT_X_MAX, PLOT_X_MIN};
use crate::plot::function::ALL_FUNCTIONS;
use crate::plot::trace::{PARAM_COUNT, PARAM_NAMES, PARAM_RANGES};
use crate::ui::layout::PlotLayout;
use crate::ui::theme;
use crate::ui::views::View;
use crate::ui::widgets::slider::SliderWidget;

pub struct PlotView;

impl View for PlotView {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = PlotLayout::new(area);
        render_controls(state, frame, layout.controls);
        render_chart(state, frame, layout.chart);
    }
}

fn render_controls(state: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" CONTROLS ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // frequency
            Constraint::Length(3), // amplitude
            Constraint::Length(3), // phase
            Constraint::Length(2), // function selector
            Constraint::Min(0),
        ])
        .split(inner);

    for i in 0..PARAM_COUNT {
        let (min, max) = PARAM_RANGES[i];
        let slider = SliderWidget {
            label: PARAM_NAMES[i],
            value: state.params.value(i),
            min,
            max,
            selected: i == state.selected_param,
        };
        frame.render_widget(slider, rows[i]);
    }

    let selector: String = ALL_FUNCTIONS
        .iter()
        .map(|kind| {
            if *kind == state.params.kind {
                format!("[{}]", kind.label())
            } else {
                format!(" {} ", kind.label())
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(selector).style(Style::default().fg(theme::ACCENT)),
        rows[3],
    );
}

fn render_chart(state: &AppState, frame: &mut Frame, area: Rect) {
    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::CURVE))
        .data(&state.trace.points)];

    let (y_lo, y_hi) = state.trace.y_bounds();
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", state.trace.title)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme::DIM))
                .bounds([PLOT_X_MIN, PLOT_X_MAX])
                .labels(["0", "2.5", "5", "7.5", "10"]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme::DIM))
                .bounds([y_lo, y_hi])
                .labels([
                    format!("{y_lo:.1}"),
                    format!("{:.1}", (y_lo + y_hi) / 2.0),
                    format!("{y_hi:.1}"),
                ]),
        );
    frame.render_widget(chart, area);
}
