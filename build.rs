use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[path = "src/credentials.rs"]
mod credentials;

use credentials::check_credentials;

const DEFAULT_MQTT_PORT: u16 = 1883;

#[derive(Deserialize)]
struct RawConfig {
    wifi_ssid: String,
    wifi_psk: String,
    mqtt_hostname: String,
    mqtt_port: Option<u16>,
    mqtt_username: Option<String>,
    mqtt_password: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");
    println!("cargo:rerun-if-changed=src/credentials.rs");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let mut raw: RawConfig = toml::from_str(&toml_str)?;

    // An empty credential in cfg.toml means "not set"
    raw.mqtt_username = raw.mqtt_username.filter(|s| !s.is_empty());
    raw.mqtt_password = raw.mqtt_password.filter(|s| !s.is_empty());

    check_credentials(
        &raw.wifi_ssid,
        &raw.mqtt_hostname,
        raw.mqtt_username.as_deref(),
        raw.mqtt_password.as_deref(),
    )
    .map_err(|e| format!("cfg.toml: {}", e))?;

    // Generate Rust code
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            mqtt_hostname: {mh:?},
            mqtt_port: {mp},
            mqtt_username: {mu:?},
            mqtt_password: {mpw:?},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        mh = raw.mqtt_hostname,
        mp = raw.mqtt_port.unwrap_or(DEFAULT_MQTT_PORT),
        mu = raw.mqtt_username,
        mpw = raw.mqtt_password,
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
