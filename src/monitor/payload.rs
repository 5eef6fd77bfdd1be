use serde::Deserialize;
use thiserror::Error;

use crate::config::Topics;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("message on unexpected topic {0:?}")]
    UnknownTopic(String),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reading is not a finite number: {0}")]
    NonFinite(f64),
    #[error("unrecognized LED state {0:?}")]
    BadLedState(String),
}

#[derive(Debug, Deserialize)]
struct TemperaturePayload {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct HumidityPayload {
    humidity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Temperature,
    Humidity,
}

impl Series {
    pub fn label(self) -> &'static str {
        match self {
            Series::Temperature => "temperature",
            Series::Humidity => "humidity",
        }
    }
}

/// One timestamped sensor reading decoded off the wire
#[derive(Debug, Clone)]
pub struct Reading {
    pub series: Series,
    pub value: f64,
    pub timestamp: String,
}

/// Everything the broker feed can deliver
#[derive(Debug, Clone)]
pub enum Decoded {
    Reading(Reading),
    LedStatus(bool),
}

/// Route an incoming publish by topic and decode its payload. Malformed input
/// comes back as an error for the caller to log and drop; it must never take
/// the receive loop down.
pub fn decode(
    topics: &Topics,
    topic: &str,
    payload: &[u8],
    timestamp: String,
) -> Result<Decoded, PayloadError> {
    if topic == topics.temperature {
        let body: TemperaturePayload = serde_json::from_slice(payload)?;
        let value = finite(body.temperature)?;
        return Ok(Decoded::Reading(Reading {
            series: Series::Temperature,
            value,
            timestamp,
        }));
    }
    if topic == topics.humidity {
        let body: HumidityPayload = serde_json::from_slice(payload)?;
        let value = finite(body.humidity)?;
        return Ok(Decoded::Reading(Reading {
            series: Series::Humidity,
            value,
            timestamp,
        }));
    }
    if topic == topics.led_status {
        return match payload {
            b"ON" => Ok(Decoded::LedStatus(true)),
            b"OFF" => Ok(Decoded::LedStatus(false)),
            other => Err(PayloadError::BadLedState(
                String::from_utf8_lossy(other).into_owned(),
            )),
        };
    }
    Err(PayloadError::UnknownTopic(topic.to_string()))
}

fn finite(value: f64) -> Result<f64, PayloadError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PayloadError::NonFinite(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics() -> Topics {
        Topics::default()
    }

    fn ts() -> String {
        "12:00:00".to_string()
    }

    #[test]
    fn decodes_temperature_reading() {
        let topics = topics();
        let decoded = decode(&topics, &topics.temperature, br#"{"temperature": 26.4}"#, ts());
        match decoded {
            Ok(Decoded::Reading(r)) => {
                assert_eq!(r.series, Series::Temperature);
                assert!((r.value - 26.4).abs() < 1e-9);
                assert_eq!(r.timestamp, "12:00:00");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn decodes_humidity_reading() {
        let topics = topics();
        let decoded = decode(&topics, &topics.humidity, br#"{"humidity": 61.0}"#, ts());
        assert!(matches!(
            decoded,
            Ok(Decoded::Reading(Reading {
                series: Series::Humidity,
                ..
            }))
        ));
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        let topics = topics();
        assert!(matches!(
            decode(&topics, &topics.temperature, b"not json", ts()),
            Err(PayloadError::Json(_))
        ));
        // Right topic, wrong field
        assert!(matches!(
            decode(&topics, &topics.temperature, br#"{"humidity": 50.0}"#, ts()),
            Err(PayloadError::Json(_))
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let topics = topics();
        // JSON has no literal NaN/Infinity; a huge exponent either fails to
        // parse or overflows to inf, and both must be dropped
        let result = decode(&topics, &topics.temperature, br#"{"temperature": 1e999}"#, ts());
        assert!(result.is_err());
    }

    #[test]
    fn led_status_accepts_only_on_off() {
        let topics = topics();
        assert!(matches!(
            decode(&topics, &topics.led_status, b"ON", ts()),
            Ok(Decoded::LedStatus(true))
        ));
        assert!(matches!(
            decode(&topics, &topics.led_status, b"OFF", ts()),
            Ok(Decoded::LedStatus(false))
        ));
        assert!(matches!(
            decode(&topics, &topics.led_status, b"on", ts()),
            Err(PayloadError::BadLedState(_))
        ));
    }

    #[test]
    fn unknown_topic_is_rejected() {
        let topics = topics();
        assert!(matches!(
            decode(&topics, "sensor/esp32/9/temperature", b"{}", ts()),
            Err(PayloadError::UnknownTopic(_))
        ));
    }
}
