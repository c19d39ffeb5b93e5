//! Derived display state.
//!
//! Everything here is recomputed from the model on every render; nothing
//! derived is ever stored back into the model.

use serde::{Deserialize, Serialize};

use crate::config::POLL_INTERVAL_MS;
use crate::model::{ApConfigModel, Model, ScannerModel};
use crate::types::{
    ApConfigPhase, MessageKind, NetworkObservation, StationState, StationStatus, StatusMessage,
};

/// Message box content together with the class the shell styles it with
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageView {
    pub text: String,
    pub kind: MessageKind,
    pub css_class: String,
}

impl From<&StatusMessage> for MessageView {
    fn from(message: &StatusMessage) -> Self {
        Self {
            text: message.text.clone(),
            kind: message.kind,
            css_class: message.kind.css_class().to_string(),
        }
    }
}

/// One rendered row of the network list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkRow {
    /// Not unique when the device reports the same network twice
    pub key: String,
    /// Raw SSID to send back with `SelectNetwork`
    pub ssid: String,
    pub display_ssid: String,
    pub is_open: bool,
    pub security_label: String,
    /// "(Current & Connected)" / "(Current, but disconnected)" on the saved network
    pub annotation: Option<String>,
    pub connect_enabled: bool,
    pub button_label: String,
    pub show_password_form: bool,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerView {
    /// The shell runs its poll timer while this is set
    pub polling: bool,
    pub poll_interval_ms: u64,

    pub station_state: StationState,
    pub station_class: String,
    pub station_text: String,

    pub status_message: Option<MessageView>,
    pub is_loading: bool,
    pub error_message: Option<String>,

    pub list_header: String,
    pub empty_message: Option<String>,
    pub refresh_note: String,
    pub networks: Vec<NetworkRow>,

    pub connect_in_flight: bool,
    pub password_draft: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApConfigView {
    pub phase: ApConfigPhase,
    pub loading_text: Option<String>,
    pub current_ssid_label: String,
    pub current_mask_label: String,
    pub ssid_draft: String,
    pub password_draft: String,
    pub inputs_enabled: bool,
    pub can_save: bool,
    pub save_button_label: String,
    pub status_message: Option<MessageView>,
}

/// What the shell renders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub scanner: ScannerView,
    pub ap_config: ApConfigView,
}

pub fn view(model: &Model) -> ViewModel {
    ViewModel {
        scanner: scanner_view(&model.scanner),
        ap_config: ap_config_view(&model.ap_config),
    }
}

fn annotation(station: &StationStatus, network: &NetworkObservation) -> Option<String> {
    if !station.is_saved_target(network) {
        return None;
    }
    let label = if station.is_connected {
        "(Current & Connected)"
    } else {
        "(Current, but disconnected)"
    };
    Some(label.to_string())
}

fn network_row(model: &ScannerModel, network: &NetworkObservation) -> NetworkRow {
    let pending = model.attempt.state.is_pending();
    let show_password_form = !network.is_open && model.attempt.is_target(&network.ssid);

    NetworkRow {
        key: network.row_key(),
        ssid: network.ssid.clone(),
        display_ssid: network.display_ssid().to_string(),
        is_open: network.is_open,
        security_label: network.security_label().to_string(),
        annotation: annotation(&model.station, network),
        connect_enabled: !network.is_hidden() && !pending,
        button_label: if show_password_form { "Cancel" } else { "Connect" }.to_string(),
        show_password_form,
        submit_enabled: show_password_form && !pending,
    }
}

pub fn scanner_view(model: &ScannerModel) -> ScannerView {
    let is_loading = model.is_initial_loading();
    let list_header = if is_loading {
        "Available Networks (Scanning...)".to_string()
    } else {
        format!("Available Networks ({})", model.networks.len())
    };
    let empty_message = (model.has_loaded && model.networks.is_empty())
        .then(|| "No Wi-Fi networks found.".to_string());
    let station_state = model.station.state();

    ScannerView {
        polling: model.active,
        poll_interval_ms: POLL_INTERVAL_MS,
        station_state,
        station_class: station_state.css_class().to_string(),
        station_text: model.station.status_text(),
        status_message: model.attempt.status.as_ref().map(MessageView::from),
        is_loading,
        error_message: model.error_message.clone(),
        list_header,
        empty_message,
        refresh_note: format!("List refreshes every {} seconds.", POLL_INTERVAL_MS / 1000),
        networks: model
            .networks
            .iter()
            .map(|network| network_row(model, network))
            .collect(),
        connect_in_flight: model.attempt.state.is_pending(),
        password_draft: model.attempt.password_draft.clone(),
    }
}

pub fn ap_config_view(model: &ApConfigModel) -> ApConfigView {
    let phase = model.phase();

    ApConfigView {
        phase,
        loading_text: (phase == ApConfigPhase::Loading).then(|| "Loading...".to_string()),
        current_ssid_label: model.current.ssid_label().to_string(),
        current_mask_label: model.current.mask_label().to_string(),
        ssid_draft: model.ssid_draft.clone(),
        password_draft: model.password_draft.clone(),
        inputs_enabled: phase != ApConfigPhase::Saving,
        can_save: model.can_save(),
        save_button_label: match phase {
            ApConfigPhase::Saving => "Saving...",
            _ => "Save Configuration",
        }
        .to_string(),
        status_message: model.status.as_ref().map(MessageView::from),
    }
}
