#![cfg_attr(not(test), no_std)]

//! Board configuration for the round-display climate node: network
//! credentials generated from `cfg.toml` at build time, the GPIO wiring of
//! the GC9A01 display and the DHT sensor, and checks over both.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod pins;
pub mod sensor;
pub mod validate;

pub use config::{
    Config, CONFIG, MQTT_PASS, MQTT_PORT, MQTT_SERVER, MQTT_USER, WIFI_PASSWORD, WIFI_SSID,
};
pub use constants::*;
pub use sensor::DhtType;
