// Shared by build.rs (cfg.toml checks) and the library (runtime checks).

use core::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum CredentialError {
    EmptyWifiSsid,
    EmptyMqttServer,
    UnpairedMqttCredentials,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::EmptyWifiSsid => f.write_str("wifi_ssid must not be empty"),
            CredentialError::EmptyMqttServer => f.write_str("mqtt_hostname must not be empty"),
            CredentialError::UnpairedMqttCredentials => {
                f.write_str("mqtt_username and mqtt_password must be given together")
            }
        }
    }
}

/// A credential counts only when it is set and non-empty.
pub const fn is_present(value: Option<&str>) -> bool {
    match value {
        Some(s) => !s.is_empty(),
        None => false,
    }
}

pub fn check_credentials(
    wifi_ssid: &str,
    mqtt_hostname: &str,
    mqtt_username: Option<&str>,
    mqtt_password: Option<&str>,
) -> Result<(), CredentialError> {
    if wifi_ssid.is_empty() {
        return Err(CredentialError::EmptyWifiSsid);
    }
    if mqtt_hostname.is_empty() {
        return Err(CredentialError::EmptyMqttServer);
    }
    if is_present(mqtt_username) != is_present(mqtt_password) {
        return Err(CredentialError::UnpairedMqttCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_credentials_pass() {
        assert_eq!(
            check_credentials("Cony's", "192.168.31.84", Some("mqtt"), Some("mqtt")),
            Ok(())
        );
        assert_eq!(check_credentials("Cony's", "192.168.31.84", None, None), Ok(()));
    }

    #[test]
    fn empty_ssid_is_rejected_even_with_a_psk() {
        // cfg.toml with wifi_psk set but wifi_ssid = ""
        assert_eq!(
            check_credentials("", "192.168.31.84", None, None),
            Err(CredentialError::EmptyWifiSsid)
        );
    }

    #[test]
    fn empty_hostname_is_rejected() {
        assert_eq!(
            check_credentials("Cony's", "", None, None),
            Err(CredentialError::EmptyMqttServer)
        );
    }

    #[test]
    fn one_sided_credentials_are_rejected() {
        assert_eq!(
            check_credentials("Cony's", "broker", Some("mqtt"), None),
            Err(CredentialError::UnpairedMqttCredentials)
        );
        assert_eq!(
            check_credentials("Cony's", "broker", None, Some("mqtt")),
            Err(CredentialError::UnpairedMqttCredentials)
        );
    }

    #[test]
    fn empty_string_is_not_a_credential() {
        assert_eq!(
            check_credentials("Cony's", "broker", Some(""), Some("x")),
            Err(CredentialError::UnpairedMqttCredentials)
        );
        assert_eq!(
            check_credentials("Cony's", "broker", Some("x"), Some("")),
            Err(CredentialError::UnpairedMqttCredentials)
        );
        assert_eq!(check_credentials("Cony's", "broker", Some(""), Some("")), Ok(()));
        assert!(!is_present(Some("")));
        assert!(is_present(Some("mqtt")));
    }
}
