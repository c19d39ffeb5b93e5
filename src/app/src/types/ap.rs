use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::config::{AP_PASSWORD_MAX_LEN, AP_PASSWORD_MIN_LEN, AP_SSID_MAX_LEN};

/// Value shown for SSID and mask when the current config could not be loaded
pub const UNAVAILABLE: &str = "N/A";

/// The device's own access point identity, as reported by `GET /api/wifi/ap`.
///
/// `password_mask` is an opaque server representation; the real passphrase
/// never leaves the device.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApConfig {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password_mask: String,
}

impl ApConfig {
    pub fn unavailable() -> Self {
        Self {
            ssid: UNAVAILABLE.to_string(),
            password_mask: UNAVAILABLE.to_string(),
        }
    }

    pub fn ssid_label(&self) -> &str {
        if self.ssid.is_empty() {
            "Not Set"
        } else {
            &self.ssid
        }
    }

    pub fn mask_label(&self) -> &str {
        if self.password_mask.is_empty() {
            "Not Set/Open"
        } else {
            &self.password_mask
        }
    }
}

/// Body of `POST /api/wifi/ap`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ApConfigRequest {
    #[validate(min_length = 1)]
    #[validate(max_length = 32)]
    pub ssid: String,
    #[validate(max_length = 63)]
    pub password: String,
}

impl ApConfigRequest {
    /// Check the drafts and build the request; the error is the operator-facing message
    pub fn new(ssid: String, password: String) -> Result<Self, String> {
        if ssid.trim().is_empty() {
            return Err("SSID must not be empty.".to_string());
        }
        if ssid.chars().count() > AP_SSID_MAX_LEN {
            return Err(format!("SSID must be at most {AP_SSID_MAX_LEN} characters."));
        }
        let password_len = password.chars().count();
        if password_len != 0
            && !(AP_PASSWORD_MIN_LEN..=AP_PASSWORD_MAX_LEN).contains(&password_len)
        {
            return Err(format!(
                "Password must be empty (open network) or {AP_PASSWORD_MIN_LEN}-{AP_PASSWORD_MAX_LEN} characters."
            ));
        }
        let request = Self { ssid, password };
        request
            .validate()
            .map_err(|e| format!("Invalid configuration: {e}"))?;
        Ok(request)
    }
}

/// What the AP controller is currently waiting for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApConfigPhase {
    #[default]
    Idle,
    Loading,
    Saving,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_open_network() {
        let request = ApConfigRequest::new("MyAP".to_string(), String::new()).unwrap();
        assert_eq!(request.ssid, "MyAP");
        assert!(request.password.is_empty());
    }

    #[test]
    fn accepts_password_bounds() {
        assert!(ApConfigRequest::new("MyAP".to_string(), "a".repeat(8)).is_ok());
        assert!(ApConfigRequest::new("MyAP".to_string(), "a".repeat(63)).is_ok());
    }

    #[test]
    fn rejects_password_outside_bounds() {
        let expected =
            Err("Password must be empty (open network) or 8-63 characters.".to_string());
        assert_eq!(
            ApConfigRequest::new("MyAP".to_string(), "short".to_string()),
            expected
        );
        assert_eq!(
            ApConfigRequest::new("MyAP".to_string(), "a".repeat(64)),
            expected
        );
    }

    #[test]
    fn rejects_blank_and_long_ssid() {
        assert_eq!(
            ApConfigRequest::new("   ".to_string(), String::new()),
            Err("SSID must not be empty.".to_string())
        );
        assert_eq!(
            ApConfigRequest::new("s".repeat(33), String::new()),
            Err("SSID must be at most 32 characters.".to_string())
        );
        assert!(ApConfigRequest::new("s".repeat(32), String::new()).is_ok());
    }

    #[test]
    fn labels_fall_back_when_blank() {
        let config = ApConfig::default();
        assert_eq!(config.ssid_label(), "Not Set");
        assert_eq!(config.mask_label(), "Not Set/Open");

        let config = ApConfig::unavailable();
        assert_eq!(config.ssid_label(), "N/A");
        assert_eq!(config.mask_label(), "N/A");
    }

    #[test]
    fn decodes_device_response() {
        let config: ApConfig =
            serde_json::from_str(r#"{"ssid":"Device-AP","password_mask":"********"}"#).unwrap();
        assert_eq!(config.ssid, "Device-AP");
        assert_eq!(config.password_mask, "********");
    }
}
