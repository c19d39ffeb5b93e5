//! Compile-time configuration of the panel core

/// Period between scan polls. The shell owns the timer and sends
/// `ScannerEvent::PollTick` at this interval while polling is enabled.
pub const POLL_INTERVAL_MS: u64 = 10_000;

pub const SCAN_ENDPOINT: &str = "/api/wifi/scan";
pub const STA_ENDPOINT: &str = "/api/wifi/sta";
pub const AP_ENDPOINT: &str = "/api/wifi/ap";

pub const STA_PASSWORD_MIN_LEN: usize = 8;

pub const AP_SSID_MAX_LEN: usize = 32;
pub const AP_PASSWORD_MIN_LEN: usize = 8;
pub const AP_PASSWORD_MAX_LEN: usize = 63;
