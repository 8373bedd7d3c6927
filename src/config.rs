pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_hostname: &'static str,

    // MQTT port (1883 unless cfg.toml says otherwise)
    pub mqtt_port: u16,

    // MQTT username for authentication (optional, paired with the password)
    pub mqtt_username: Option<&'static str>,

    // MQTT password for authentication (optional, paired with the username)
    pub mqtt_password: Option<&'static str>,
}

impl Config {
    /// Broker credentials, only when both halves are configured and non-empty.
    pub const fn mqtt_credentials(&self) -> Option<(&'static str, &'static str)> {
        match (self.mqtt_username, self.mqtt_password) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
pub const WIFI_PASSWORD: &str = CONFIG.wifi_psk;

pub const MQTT_SERVER: &str = CONFIG.mqtt_hostname;
pub const MQTT_PORT: u16 = CONFIG.mqtt_port;
pub const MQTT_USER: Option<&str> = CONFIG.mqtt_username;
pub const MQTT_PASS: Option<&str> = CONFIG.mqtt_password;
