use core::fmt::Write;

use heapless::String;
use log::{info, warn};

use crate::config::Config;
use crate::constants::{DHTTYPE, MAX_GPIO};
use crate::credentials::{check_credentials, CredentialError};
use crate::pins::PinMap;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyWifiSsid,
    EmptyMqttServer,
    UnpairedMqttCredentials,
    PinCollision {
        first: &'static str,
        second: &'static str,
        gpio: u8,
    },
    PinOutOfRange {
        name: &'static str,
        gpio: u8,
    },
}

impl From<CredentialError> for Error {
    fn from(e: CredentialError) -> Self {
        match e {
            CredentialError::EmptyWifiSsid => Error::EmptyWifiSsid,
            CredentialError::EmptyMqttServer => Error::EmptyMqttServer,
            CredentialError::UnpairedMqttCredentials => Error::UnpairedMqttCredentials,
        }
    }
}

pub fn validate(config: &Config, pins: &PinMap) -> Result<(), Error> {
    check_credentials(
        config.wifi_ssid,
        config.mqtt_hostname,
        config.mqtt_username,
        config.mqtt_password,
    )?;

    if let Some((first, second)) = pins.first_collision() {
        return Err(Error::PinCollision {
            first: first.name,
            second: second.name,
            gpio: first.gpio,
        });
    }
    if let Some(pin) = pins.first_out_of_range(MAX_GPIO) {
        return Err(Error::PinOutOfRange {
            name: pin.name,
            gpio: pin.gpio,
        });
    }

    Ok(())
}

/// Renders the pin map as `SCK=4 MOSI=5 ...`.
pub fn pin_summary(pins: &PinMap) -> Result<String<96>, core::fmt::Error> {
    let mut summary: String<96> = String::new();
    for (i, pin) in pins.all().iter().enumerate() {
        if i > 0 {
            summary.push(' ').map_err(|_| core::fmt::Error)?;
        }
        write!(summary, "{}={}", pin.name, pin.gpio)?;
    }
    Ok(summary)
}

// Secrets are reported as set/unset only.
pub fn log_summary(config: &Config, pins: &PinMap) {
    info!(
        "Wi-Fi SSID: {:?} (password {})",
        config.wifi_ssid,
        if config.wifi_psk.is_empty() { "unset" } else { "set" }
    );
    match config.mqtt_credentials() {
        Some((user, _)) => info!(
            "MQTT broker: {}:{} as {:?}",
            config.mqtt_hostname, config.mqtt_port, user
        ),
        None => info!(
            "MQTT broker: {}:{} (anonymous)",
            config.mqtt_hostname, config.mqtt_port
        ),
    }

    match pin_summary(pins) {
        Ok(summary) => info!("Pins: {}", summary),
        Err(_) => warn!("Pin summary does not fit the log buffer"),
    }
    info!(
        "Sensor: {} (start pulse {} us, sample every {} ms)",
        DHTTYPE,
        DHTTYPE.start_signal_us(),
        DHTTYPE.min_sample_interval_ms()
    );
}
