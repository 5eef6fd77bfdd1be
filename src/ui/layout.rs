use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout regions
pub struct ScreenLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header (mode tabs + link badge)
                Constraint::Min(10),   // Main content area
                Constraint::Length(1), // Footer (key hints)
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Plot view: control column on the left, chart filling the rest
pub struct PlotLayout {
    pub controls: Rect,
    pub chart: Rect,
}

impl PlotLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(20)])
            .split(area);

        Self {
            controls: chunks[0],
            chart: chunks[1],
        }
    }
}

/// Monitor view: statistics column on the left, two stacked charts
pub struct MonitorLayout {
    pub stats: Rect,
    pub temperature: Rect,
    pub humidity: Rect,
}

impl MonitorLayout {
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(20)])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        Self {
            stats: columns[0],
            temperature: charts[0],
            humidity: charts[1],
        }
    }
}
