use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use super::common::{ActionState, StatusMessage};
use super::scan::is_hidden_ssid;
use crate::config::STA_PASSWORD_MIN_LEN;

pub const HIDDEN_NETWORK_GUIDANCE: &str = "To connect to a Hidden Network, its name must be configured manually; hidden networks cannot be selected from the scan list.";

/// Body of `POST /api/wifi/sta`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct StaConnectRequest {
    #[validate(min_length = 1)]
    #[validate(max_length = 32)]
    pub ssid: String,
    /// Empty for open networks
    pub password: String,
}

impl StaConnectRequest {
    /// Build a request, rejecting hidden networks before anything is sent
    pub fn new(ssid: String, password: String) -> Result<Self, String> {
        if is_hidden_ssid(&ssid) {
            return Err(HIDDEN_NETWORK_GUIDANCE.to_string());
        }
        let request = Self { ssid, password };
        request
            .validate()
            .map_err(|e| format!("Invalid connect request: {e}"))?;
        Ok(request)
    }
}

/// Client-side check for a secured network's passphrase
pub fn validate_sta_password(password: &str) -> Result<(), String> {
    if password.chars().count() < STA_PASSWORD_MIN_LEN {
        return Err(format!(
            "Password must be at least {STA_PASSWORD_MIN_LEN} characters."
        ));
    }
    Ok(())
}

/// Transient state of the operator's connect interaction.
///
/// `target_ssid` is the row whose password form is expanded (at most one).
/// The whole attempt is reset when a connect request completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionAttempt {
    pub target_ssid: Option<String>,
    pub password_draft: String,
    pub status: Option<StatusMessage>,
    pub state: ActionState,
}

impl ConnectionAttempt {
    pub fn is_target(&self, ssid: &str) -> bool {
        self.target_ssid.as_deref() == Some(ssid)
    }

    /// Expand the form for `ssid`, or collapse it if it is already expanded
    pub fn toggle_target(&mut self, ssid: String) {
        self.target_ssid = if self.is_target(&ssid) {
            None
        } else {
            Some(ssid)
        };
        self.password_draft.clear();
        self.status = None;
    }

    /// Collapse the form after a request completed, keeping the outcome message
    pub fn complete(&mut self, status: StatusMessage) {
        self.target_ssid = None;
        self.password_draft.clear();
        self.status = Some(status);
    }
}
