use crate::monitor::payload::Reading;

/// Messages from UI input handling → main loop
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Select which plot slider the arrow keys adjust (0 = freq, 1 = amp, 2 = phase)
    SelectParam(usize),
    /// Nudge a plot parameter by a number of steps (param_index, steps)
    AdjustParam(usize, i32),
    /// Function selection: 0 = previous, 1 = next
    SelectFunction(usize),
    /// Publish the opposite of the current LED request state
    ToggleLed,
    CycleMode,
    Quit,
}

/// Messages from UI thread → broker engine thread
#[derive(Debug, Clone)]
pub enum MonitorCmd {
    /// Fire-and-forget "ON"/"OFF" publish to the LED control topic
    PublishLed(bool),
}

/// Messages from broker engine thread → UI thread
#[derive(Debug, Clone)]
pub enum MonitorMsg {
    Connected,
    ConnectionLost(String),
    Reading(Reading),
    /// Device-reported LED state from the status topic
    LedStatus(bool),
}

/// Connection state shown in the header badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    Connecting,
    Connected,
    Lost(String),
}

impl LinkState {
    pub fn label(&self) -> &str {
        match self {
            LinkState::Connecting => "CONNECTING",
            LinkState::Connected => "CONNECTED",
            LinkState::Lost(_) => "OFFLINE",
        }
    }
}
