/// Number of sample points per plotted curve
pub const PLOT_POINTS: usize = 100;
/// Plotted x range (inclusive endpoints)
pub const PLOT_X_MIN: f64 = 0.0;
pub const PLOT_X_MAX: f64 = 10.0;
/// Slider step for all three plot parameters
pub const PARAM_STEP: f64 = 0.1;

/// Rolling history length per sensor series
pub const HISTORY_LEN: usize = 50;

/// Default broker endpoint and topic set (overridable via config file)
pub const BROKER_HOST: &str = "test.mosquitto.org";
pub const BROKER_PORT: u16 = 1883;
pub const BROKER_KEEPALIVE_SECS: u64 = 60;
pub const CLIENT_ID: &str = "dashboard-monitor-2";
pub const TOPIC_TEMPERATURE: &str = "sensor/esp32/2/temperature";
pub const TOPIC_HUMIDITY: &str = "sensor/esp32/2/humidity";
pub const TOPIC_LED_CONTROL: &str = "sensor/esp32/2/led/control";
pub const TOPIC_LED_STATUS: &str = "sensor/esp32/2/led/status";

/// UI refresh rate target
pub const UI_FPS: u64 = 30;
/// Channel capacity for inter-thread messages
pub const CHANNEL_CAPACITY: usize = 1024;
/// Optional config file read from the working directory
pub const CONFIG_FILE: &str = "sensordeck.json";
/// Log file written by the tracing subscriber (the terminal belongs to the UI)
pub const LOG_FILE: &str = "sensordeck.log";
