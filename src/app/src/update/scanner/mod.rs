mod connect;

pub use connect::{
    handle_connect_response, handle_password_input, handle_select_network,
    handle_submit_password,
};

use crux_core::{render::render, Command};

use crate::api_get;
use crate::config::SCAN_ENDPOINT;
use crate::events::{Event, ScannerEvent};
use crate::model::ScannerModel;
use crate::types::{ApiFailure, ConnectionAttempt, ScanResponse};
use crate::update_field;
use crate::Effect;

const SCAN_FAILED: &str = "Failed to load networks and status. Check server logs.";

/// Handle scan list and station connect events
pub fn handle(event: ScannerEvent, model: &mut ScannerModel) -> Command<Effect, Event> {
    match event {
        ScannerEvent::Activate => handle_activate(model),
        ScannerEvent::Deactivate => handle_deactivate(model),
        ScannerEvent::PollTick => handle_poll_tick(model),
        ScannerEvent::ScanResponse { seq, result } => handle_scan_response(seq, result, model),

        ScannerEvent::SelectNetwork { ssid, is_open } => {
            handle_select_network(ssid, is_open, model)
        }
        ScannerEvent::PasswordInput { password } => handle_password_input(password, model),
        ScannerEvent::SubmitPassword => handle_submit_password(model),
        ScannerEvent::ConnectResponse {
            session,
            ssid,
            result,
        } => handle_connect_response(session, ssid, result, model),
        ScannerEvent::ClearStatus => update_field!(model.attempt.status, None),
    }
}

/// Start polling: the first poll is issued immediately, the shell drives the rest
pub fn handle_activate(model: &mut ScannerModel) -> Command<Effect, Event> {
    if model.active {
        return Command::done();
    }
    model.active = true;
    model.session += 1;
    model.attempt = ConnectionAttempt::default();
    log::debug!("scanner activated (session {})", model.session);
    issue_poll(model)
}

/// Stop polling. In-flight requests are not aborted; their responses are dropped.
pub fn handle_deactivate(model: &mut ScannerModel) -> Command<Effect, Event> {
    if !model.active {
        return Command::done();
    }
    model.active = false;
    model.attempt = ConnectionAttempt::default();
    model.poll.discard_outstanding();
    log::debug!("scanner deactivated (session {})", model.session);
    render()
}

pub fn handle_poll_tick(model: &mut ScannerModel) -> Command<Effect, Event> {
    if !model.active {
        return Command::done();
    }
    issue_poll(model)
}

fn issue_poll(model: &mut ScannerModel) -> Command<Effect, Event> {
    let seq = model.poll.next();
    log::debug!("polling scan results (seq {seq})");

    Command::all([
        render(),
        api_get!(Scanner, SCAN_ENDPOINT, ScanResponse, |result| {
            ScannerEvent::ScanResponse { seq, result }
        }),
    ])
}

/// Reconcile a poll response. Responses are applied in send order: anything
/// older than the last applied snapshot is discarded.
pub fn handle_scan_response(
    seq: u64,
    result: Result<ScanResponse, ApiFailure>,
    model: &mut ScannerModel,
) -> Command<Effect, Event> {
    if !model.active {
        log::debug!("dropping scan response {seq}: scanner inactive");
        return Command::done();
    }
    if !model.poll.accept(seq) {
        log::debug!("dropping stale scan response {seq}");
        return Command::done();
    }

    match result {
        Ok(response) => {
            log::debug!(
                "scan {seq}: {} networks, station {:?}",
                response.networks.len(),
                response.sta_status
            );
            model.apply_scan(response);
        }
        Err(e) => {
            log::warn!("scan {seq} failed: {e}");
            model.set_error(SCAN_FAILED.to_string());
        }
    }

    render()
}
