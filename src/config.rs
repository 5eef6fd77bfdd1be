use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BROKER_HOST, BROKER_KEEPALIVE_SECS, BROKER_PORT, CLIENT_ID, TOPIC_HUMIDITY,
    TOPIC_LED_CONTROL, TOPIC_LED_STATUS, TOPIC_TEMPERATURE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Broker endpoint and topic set. Every field has a built-in default matching
/// the deployed ESP32 feed, so a config file only needs the overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub client_id: String,
    pub keepalive_secs: u64,
    pub topics: Topics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Topics {
    pub temperature: String,
    pub humidity: String,
    pub led_control: String,
    pub led_status: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: BROKER_HOST.to_string(),
            port: BROKER_PORT,
            client_id: CLIENT_ID.to_string(),
            keepalive_secs: BROKER_KEEPALIVE_SECS,
            topics: Topics::default(),
        }
    }
}

impl Default for Topics {
    fn default() -> Self {
        Self {
            temperature: TOPIC_TEMPERATURE.to_string(),
            humidity: TOPIC_HUMIDITY.to_string(),
            led_control: TOPIC_LED_CONTROL.to_string(),
            led_status: TOPIC_LED_STATUS.to_string(),
        }
    }
}

impl BrokerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Missing file means defaults; an unreadable or malformed file is logged
    /// and also falls back to defaults rather than refusing to start.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring broker config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployed_feed() {
        let config = BrokerConfig::default();
        assert_eq!(config.host, "test.mosquitto.org");
        assert_eq!(config.port, 1883);
        assert_eq!(config.client_id, "dashboard-monitor-2");
        assert_eq!(config.keepalive_secs, 60);
        assert_eq!(config.topics.temperature, "sensor/esp32/2/temperature");
        assert_eq!(config.topics.led_control, "sensor/esp32/2/led/control");
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let config: BrokerConfig =
            serde_json::from_str(r#"{"host": "broker.local", "port": 8883}"#).unwrap();
        assert_eq!(config.host, "broker.local");
        assert_eq!(config.port, 8883);
        assert_eq!(config.client_id, "dashboard-monitor-2");
        assert_eq!(config.topics.humidity, "sensor/esp32/2/humidity");
    }

    #[test]
    fn topic_overrides_are_honored() {
        let config: BrokerConfig =
            serde_json::from_str(r#"{"topics": {"temperature": "lab/temp"}}"#).unwrap();
        assert_eq!(config.topics.temperature, "lab/temp");
        assert_eq!(config.topics.humidity, "sensor/esp32/2/humidity");
    }
}
