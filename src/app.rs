use crate::constants::HISTORY_LEN;
use crate::messages::LinkState;
use crate::monitor::history::{SampleHistory, SensorSample};
use crate::monitor::payload::{Reading, Series};
use crate::monitor::stats::RunningStats;
use crate::plot::trace::{PlotParams, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Plot,
    Monitor,
}

impl AppMode {
    pub fn next(self) -> Self {
        match self {
            AppMode::Plot => AppMode::Monitor,
            AppMode::Monitor => AppMode::Plot,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppMode::Plot => "PLOT",
            AppMode::Monitor => "MONITOR",
        }
    }
}

/// Rolling history plus session-lifetime statistics for one sensor series
pub struct SeriesState {
    pub history: SampleHistory,
    pub stats: RunningStats,
}

impl SeriesState {
    fn new() -> Self {
        Self {
            history: SampleHistory::new(HISTORY_LEN),
            stats: RunningStats::new(),
        }
    }

    pub fn record(&mut self, value: f64, timestamp: String) {
        self.stats.record(value);
        self.history.push(SensorSample { value, timestamp });
    }

    pub fn current(&self) -> Option<f64> {
        self.history.latest().map(|s| s.value)
    }
}

pub struct AppState {
    pub mode: AppMode,
    pub should_quit: bool,

    // Plot mode
    pub params: PlotParams,
    pub selected_param: usize,
    pub trace: Trace,

    // Monitor mode
    pub link: LinkState,
    /// Last state the user asked for (what we published)
    pub led_requested: bool,
    /// Last state the device reported on the status topic
    pub led_reported: Option<bool>,
    pub temperature: SeriesState,
    pub humidity: SeriesState,
}

impl AppState {
    pub fn new() -> Self {
        let params = PlotParams::default();
        let trace = Trace::new(&params);
        Self {
            mode: AppMode::Plot,
            should_quit: false,
            params,
            selected_param: 0,
            trace,
            link: LinkState::Connecting,
            led_requested: false,
            led_reported: None,
            temperature: SeriesState::new(),
            humidity: SeriesState::new(),
        }
    }

    pub fn record_reading(&mut self, reading: Reading) {
        let series = match reading.series {
            Series::Temperature => &mut self.temperature,
            Series::Humidity => &mut self.humidity,
        };
        series.record(reading.value, reading.timestamp);
    }
}
