use std::thread;
use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use rumqttc::{Client, Event, Incoming, MqttOptions, QoS};

use crate::config::BrokerConfig;
use crate::messages::{MonitorCmd, MonitorMsg};
use crate::monitor::payload::{self, Decoded};

/// Owns the MQTT client. The network loop runs on its own thread; the UI
/// talks to it exclusively through the two channels.
pub struct MonitorEngine {
    config: BrokerConfig,
}

impl MonitorEngine {
    pub fn new(config: BrokerConfig) -> Self {
        Self { config }
    }

    /// Spawn the broker client: one thread drains UI commands into publishes,
    /// another walks the connection event loop. Both are detached and live
    /// for the rest of the process. Connectivity problems surface as
    /// `MonitorMsg::ConnectionLost`, never as a startup failure.
    pub fn start(self, cmd_rx: Receiver<MonitorCmd>, msg_tx: Sender<MonitorMsg>) {
        let mut options =
            MqttOptions::new(&self.config.client_id, &self.config.host, self.config.port);
        options.set_keep_alive(Duration::from_secs(self.config.keepalive_secs));

        let (client, mut connection) = Client::new(options, 10);

        // --- Publish side: LED control, fire-and-forget ---
        let publisher = client.clone();
        let control_topic = self.config.topics.led_control.clone();
        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    MonitorCmd::PublishLed(on) => {
                        let state = if on { "ON" } else { "OFF" };
                        tracing::info!(state, topic = %control_topic, "publishing LED command");
                        if let Err(e) =
                            publisher.publish(&control_topic, QoS::AtMostOnce, false, state)
                        {
                            tracing::warn!(error = %e, "LED publish failed");
                        }
                    }
                }
            }
            // Channel closed: the UI is shutting down
        });

        // --- Receive side: subscriptions and the event loop ---
        let host = self.config.host.clone();
        let topics = self.config.topics;
        thread::spawn(move || {
            for notification in connection.iter() {
                match notification {
                    Ok(Event::Incoming(Incoming::ConnAck(_))) => {
                        tracing::info!(%host, "connected to broker");
                        // Runs on every ConnAck so subscriptions survive reconnects
                        for topic in [&topics.temperature, &topics.humidity, &topics.led_status] {
                            if let Err(e) = client.subscribe(topic, QoS::AtMostOnce) {
                                tracing::warn!(%topic, error = %e, "subscribe failed");
                            }
                        }
                        let _ = msg_tx.try_send(MonitorMsg::Connected);
                    }
                    Ok(Event::Incoming(Incoming::Publish(publish))) => {
                        let timestamp = Local::now().format("%H:%M:%S").to_string();
                        match payload::decode(&topics, &publish.topic, &publish.payload, timestamp)
                        {
                            Ok(Decoded::Reading(reading)) => {
                                tracing::debug!(
                                    series = reading.series.label(),
                                    value = reading.value,
                                    "reading received"
                                );
                                let _ = msg_tx.try_send(MonitorMsg::Reading(reading));
                            }
                            Ok(Decoded::LedStatus(on)) => {
                                let _ = msg_tx.try_send(MonitorMsg::LedStatus(on));
                            }
                            Err(e) => {
                                tracing::warn!(topic = %publish.topic, error = %e, "dropping malformed message");
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        // The client retries on the next iteration; pace it
                        // so a dead broker doesn't spin this thread.
                        tracing::warn!(error = %e, "broker connection error");
                        let _ = msg_tx.try_send(MonitorMsg::ConnectionLost(e.to_string()));
                        thread::sleep(Duration::from_secs(1));
                    }
                }
            }
        });
    }
}
