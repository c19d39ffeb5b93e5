use serde::{Deserialize, Serialize};

use crate::types::*;

/// State of the scan list / station connect panel
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScannerModel {
    /// Panel is mounted; ticks and responses are ignored otherwise
    pub active: bool,
    /// Incremented on every activation; connect responses from an older
    /// activation are dropped
    pub session: u64,
    pub poll: PollSequence,

    // Last applied snapshot
    pub networks: Vec<NetworkObservation>,
    pub station: StationStatus,
    /// A scan has succeeded at least once
    pub has_loaded: bool,
    pub error_message: Option<String>,

    pub attempt: ConnectionAttempt,
}

impl ScannerModel {
    /// Only the first load shows a loading indicator; later polls refresh silently
    pub fn is_initial_loading(&self) -> bool {
        !self.has_loaded && self.poll.in_flight()
    }

    /// Replace the snapshot wholesale with a successful scan response
    pub fn apply_scan(&mut self, response: ScanResponse) {
        self.networks = response.networks;
        if let Some(status) = response.sta_status {
            self.station = status.into();
        }
        self.has_loaded = true;
        self.error_message = None;
    }

    /// Keep the previous snapshot visible and flag the failure
    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }
}

/// State of the access point configuration panel
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApConfigModel {
    pub active: bool,
    pub session: u64,
    /// Configuration fetch in flight
    pub is_loading: bool,

    pub current: ApConfig,
    pub ssid_draft: String,
    pub password_draft: String,

    pub save: ActionState,
    pub status: Option<StatusMessage>,
}

impl ApConfigModel {
    pub fn phase(&self) -> ApConfigPhase {
        if self.save.is_pending() {
            ApConfigPhase::Saving
        } else if self.is_loading {
            ApConfigPhase::Loading
        } else {
            ApConfigPhase::Idle
        }
    }

    pub fn can_save(&self) -> bool {
        self.phase() == ApConfigPhase::Idle && !self.ssid_draft.trim().is_empty()
    }

    pub fn apply_config(&mut self, config: ApConfig) {
        self.ssid_draft = config.ssid.clone();
        self.current = config;
    }
}

/// Application Model - the complete state.
///
/// The two panels share nothing; each only talks to the device.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub scanner: ScannerModel,
    pub ap_config: ApConfigModel,
}
