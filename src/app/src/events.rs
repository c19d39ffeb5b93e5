use serde::{Deserialize, Serialize};

use crate::types::*;

/// Scan list and station connect events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ScannerEvent {
    /// Panel mounted: start polling
    Activate,
    /// Panel unmounted: stop polling, ignore late responses
    Deactivate,
    /// Sent by the shell every `POLL_INTERVAL_MS` while polling is enabled
    PollTick,

    /// Row "Connect" control
    SelectNetwork {
        ssid: String,
        is_open: bool,
    },
    PasswordInput {
        password: String,
    },
    SubmitPassword,
    ClearStatus,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    ScanResponse {
        seq: u64,
        result: Result<ScanResponse, ApiFailure>,
    },
    #[serde(skip)]
    ConnectResponse {
        session: u64,
        ssid: String,
        result: Result<Option<String>, ApiFailure>,
    },
}

/// Access point configuration events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ApConfigEvent {
    /// Panel mounted: load the current configuration once
    Activate,
    Deactivate,
    Reload,

    SsidInput {
        ssid: String,
    },
    PasswordInput {
        password: String,
    },
    Save,
    ClearStatus,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    FetchResponse {
        session: u64,
        result: Result<ApConfig, ApiFailure>,
    },
    #[serde(skip)]
    SaveResponse {
        session: u64,
        result: Result<Option<String>, ApiFailure>,
    },
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Scanner(ScannerEvent),
    ApConfig(ApConfigEvent),
}
