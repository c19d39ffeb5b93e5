use serde::{Deserialize, Serialize};

/// Display-only label for networks that broadcast an empty SSID.
/// Never sent back to the device as a connect target.
pub const HIDDEN_NETWORK_LABEL: &str = "(Hidden Network)";

/// Whether an SSID denotes a hidden network (blank after trimming, or the display label)
pub fn is_hidden_ssid(ssid: &str) -> bool {
    ssid.trim().is_empty() || ssid == HIDDEN_NETWORK_LABEL
}

/// One discovered wireless network in a scan snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkObservation {
    /// SSID as reported by the device; empty for hidden networks
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub is_open: bool,
}

impl NetworkObservation {
    pub fn is_hidden(&self) -> bool {
        is_hidden_ssid(&self.ssid)
    }

    pub fn display_ssid(&self) -> &str {
        if self.ssid.trim().is_empty() {
            HIDDEN_NETWORK_LABEL
        } else {
            &self.ssid
        }
    }

    pub fn security_label(&self) -> &'static str {
        if self.is_open {
            "Open"
        } else {
            "WPA/WPA2"
        }
    }

    /// List key. Duplicate `(ssid, is_open)` pairs produce identical keys;
    /// rows are still rendered separately, in server order.
    pub fn row_key(&self) -> String {
        format!("{}{}", self.display_ssid(), self.is_open)
    }
}

/// Derived client connection state, one of exactly three outcomes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StationState {
    Connected,
    Connecting,
    #[default]
    Disconnected,
}

impl StationState {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Connected => "sta-status-connected",
            Self::Connecting => "sta-status-connecting",
            Self::Disconnected => "sta-status-disconnected",
        }
    }
}

/// The device's authoritative client-mode connection state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationStatus {
    pub is_connected: bool,
    /// SSID of the credentials stored on the device, connected or not
    pub saved_ssid: Option<String>,
    /// Only populated while connected
    pub ip_address: Option<String>,
}

impl StationStatus {
    pub fn state(&self) -> StationState {
        if self.is_connected {
            StationState::Connected
        } else if self.saved_ssid.is_some() {
            StationState::Connecting
        } else {
            StationState::Disconnected
        }
    }

    pub fn status_text(&self) -> String {
        match self.state() {
            StationState::Connected => format!(
                "Connected to {} (IP: {})",
                self.saved_ssid.as_deref().unwrap_or("unknown network"),
                self.ip_address.as_deref().unwrap_or("unknown")
            ),
            StationState::Connecting => format!(
                "Saved: {}. Attempting to connect...",
                self.saved_ssid.as_deref().unwrap_or_default()
            ),
            StationState::Disconnected => {
                "Not configured. Please select a network below.".to_string()
            }
        }
    }

    /// Whether the given network is the one the device has credentials for
    pub fn is_saved_target(&self, network: &NetworkObservation) -> bool {
        self.saved_ssid.as_deref() == Some(network.ssid.as_str())
    }
}

/// `sta_status` object of the scan response; every field may be absent or null
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaStatusPayload {
    #[serde(default)]
    pub is_connected: Option<bool>,
    #[serde(default)]
    pub saved_ssid: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<StaStatusPayload> for StationStatus {
    fn from(payload: StaStatusPayload) -> Self {
        Self {
            is_connected: payload.is_connected.unwrap_or(false),
            saved_ssid: non_empty(payload.saved_ssid),
            ip_address: non_empty(payload.ip_address),
        }
    }
}

/// Response of `GET /api/wifi/scan`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResponse {
    #[serde(default)]
    pub networks: Vec<NetworkObservation>,
    #[serde(default)]
    pub sta_status: Option<StaStatusPayload>,
}

/// Sequence numbers for overlapping poll requests.
///
/// Each poll takes the next number; a response is applied only if it is
/// newer than the last applied one, so a slow old snapshot can never
/// overwrite a newer one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollSequence {
    issued: u64,
    applied: u64,
}

impl PollSequence {
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record `seq` as applied if it is newer than anything applied so far
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq <= self.applied || seq > self.issued {
            return false;
        }
        self.applied = seq;
        true
    }

    /// Treat every request issued so far as answered; their responses are dropped
    pub fn discard_outstanding(&mut self) {
        self.applied = self.issued;
    }

    /// A request newer than the last applied response is outstanding
    pub fn in_flight(&self) -> bool {
        self.issued > self.applied
    }
}
