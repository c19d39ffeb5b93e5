use crux_core::{render::render, Command};

use crate::api_post;
use crate::config::STA_ENDPOINT;
use crate::events::{Event, ScannerEvent};
use crate::model::ScannerModel;
use crate::types::{
    is_hidden_ssid, validate_sta_password, ActionOutcome, ApiFailure, StaConnectRequest,
    StatusMessage, HIDDEN_NETWORK_GUIDANCE,
};
use crate::update_field;
use crate::Effect;

const CONNECTING: &str = "Connecting...";
const CONNECT_FAILED: &str = "Failed to connect/save credentials.";
const CONNECT_NETWORK_ERROR: &str = "A network error occurred while trying to connect.";

fn connect_success_message(ssid: &str) -> String {
    format!(
        "Success! Credentials saved. The device is now attempting to connect to {ssid}. \
         Polling will show connection status shortly."
    )
}

/// Row "Connect" control.
///
/// Open networks connect right away with an empty password; secured networks
/// toggle their inline password form.
pub fn handle_select_network(
    ssid: String,
    is_open: bool,
    model: &mut ScannerModel,
) -> Command<Effect, Event> {
    if !model.active {
        return Command::done();
    }
    if model.attempt.state.is_pending() {
        log::debug!("ignoring network selection while a connect is in flight");
        return Command::done();
    }
    if is_hidden_ssid(&ssid) {
        return update_field!(
            model.attempt.status,
            Some(StatusMessage::error(HIDDEN_NETWORK_GUIDANCE))
        );
    }

    if is_open {
        connect(ssid, String::new(), model)
    } else {
        model.attempt.toggle_target(ssid);
        render()
    }
}

pub fn handle_password_input(
    password: String,
    model: &mut ScannerModel,
) -> Command<Effect, Event> {
    if !model.active || model.attempt.state.is_pending() || model.attempt.target_ssid.is_none() {
        return Command::done();
    }
    update_field!(model.attempt.password_draft, password)
}

/// Submit the expanded form. Short passwords are rejected before any request.
pub fn handle_submit_password(model: &mut ScannerModel) -> Command<Effect, Event> {
    if !model.active || model.attempt.state.is_pending() {
        return Command::done();
    }
    let Some(ssid) = model.attempt.target_ssid.clone() else {
        return Command::done();
    };

    if let Err(e) = validate_sta_password(&model.attempt.password_draft) {
        return update_field!(model.attempt.status, Some(StatusMessage::error(e)));
    }

    let password = model.attempt.password_draft.clone();
    connect(ssid, password, model)
}

fn connect(ssid: String, password: String, model: &mut ScannerModel) -> Command<Effect, Event> {
    let request = match StaConnectRequest::new(ssid, password) {
        Ok(request) => request,
        Err(e) => return update_field!(model.attempt.status, Some(StatusMessage::error(e))),
    };

    if !model.attempt.state.begin() {
        return Command::done();
    }
    model.attempt.target_ssid = Some(request.ssid.clone());
    model.attempt.status = Some(StatusMessage::info(CONNECTING));
    log::info!("connecting station to {}", request.ssid);

    let session = model.session;
    let ssid = request.ssid.clone();
    match api_post!(Scanner, STA_ENDPOINT, body_json: &request, |result| {
        ScannerEvent::ConnectResponse {
            session,
            ssid,
            result,
        }
    }) {
        Ok(cmd) => Command::all([render(), cmd]),
        Err(e) => {
            log::error!("{e}");
            model.attempt.state.finish(ActionOutcome::Failed);
            model.attempt.complete(StatusMessage::error(format!("Error: {e}")));
            render()
        }
    }
}

/// Complete the in-flight attempt. A successful POST only means the
/// credentials were stored; the station state is observed by later polls.
pub fn handle_connect_response(
    session: u64,
    ssid: String,
    result: Result<Option<String>, ApiFailure>,
    model: &mut ScannerModel,
) -> Command<Effect, Event> {
    if !model.active || session != model.session || !model.attempt.state.is_pending() {
        log::debug!("dropping connect response for {ssid}: attempt no longer active");
        return Command::done();
    }

    let status = match result {
        Ok(message) => {
            log::info!("credentials for {ssid} saved");
            model.attempt.state.finish(ActionOutcome::Succeeded);
            StatusMessage::success(message.unwrap_or_else(|| connect_success_message(&ssid)))
        }
        Err(e) => {
            log::warn!("connect to {ssid} failed: {e}");
            model.attempt.state.finish(ActionOutcome::Failed);
            let text = match &e {
                ApiFailure::Transport(_) => CONNECT_NETWORK_ERROR.to_string(),
                other => format!("Error: {}", other.server_message().unwrap_or(CONNECT_FAILED)),
            };
            StatusMessage::error(text)
        }
    };
    model.attempt.complete(status);

    render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActionState, ConnectionAttempt};

    fn active_model() -> ScannerModel {
        ScannerModel {
            active: true,
            session: 1,
            ..Default::default()
        }
    }

    fn pending_model(ssid: &str) -> ScannerModel {
        let mut model = active_model();
        let _ = handle_select_network(ssid.to_string(), true, &mut model);
        assert!(model.attempt.state.is_pending());
        model
    }

    mod selection {
        use super::*;

        #[test]
        fn secured_network_expands_form_without_request() {
            let mut model = active_model();

            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);

            assert!(model.attempt.is_target("HomeNet"));
            assert_eq!(model.attempt.state, ActionState::Idle);
        }

        #[test]
        fn open_network_connects_immediately() {
            let mut model = active_model();

            let _ = handle_select_network("Cafe".to_string(), true, &mut model);

            assert!(model.attempt.state.is_pending());
            assert_eq!(
                model.attempt.status,
                Some(StatusMessage::info("Connecting..."))
            );
        }

        #[test]
        fn hidden_network_is_rejected_locally() {
            let mut model = active_model();

            let _ = handle_select_network(String::new(), true, &mut model);

            assert_eq!(model.attempt.state, ActionState::Idle);
            assert_eq!(
                model.attempt.status,
                Some(StatusMessage::error(HIDDEN_NETWORK_GUIDANCE))
            );
        }

        #[test]
        fn selecting_another_network_collapses_previous_form() {
            let mut model = active_model();
            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);
            let _ = handle_password_input("partial".to_string(), &mut model);

            let _ = handle_select_network("Office".to_string(), false, &mut model);

            assert!(model.attempt.is_target("Office"));
            assert!(model.attempt.password_draft.is_empty());
        }

        #[test]
        fn reselecting_same_network_collapses_form() {
            let mut model = active_model();
            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);

            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);

            assert_eq!(model.attempt.target_ssid, None);
            assert_eq!(model.attempt.state, ActionState::Idle);
        }

        #[test]
        fn selection_is_ignored_while_inactive() {
            let mut model = ScannerModel::default();

            let _ = handle_select_network("Cafe".to_string(), true, &mut model);
            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);

            assert_eq!(model.attempt, ConnectionAttempt::default());
        }

        #[test]
        fn selection_is_ignored_while_connecting() {
            let mut model = pending_model("Cafe");

            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);

            assert!(model.attempt.is_target("Cafe"));
            assert!(model.attempt.state.is_pending());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn short_password_is_rejected_locally() {
            let mut model = active_model();
            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);
            let _ = handle_password_input("12345".to_string(), &mut model);

            let _ = handle_submit_password(&mut model);

            assert_eq!(model.attempt.state, ActionState::Idle);
            assert_eq!(
                model.attempt.status,
                Some(StatusMessage::error("Password must be at least 8 characters."))
            );
            assert_eq!(model.attempt.password_draft, "12345");
        }

        #[test]
        fn valid_password_starts_connect() {
            let mut model = active_model();
            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);
            let _ = handle_password_input("12345678".to_string(), &mut model);

            let _ = handle_submit_password(&mut model);

            assert!(model.attempt.state.is_pending());
            assert!(model.attempt.is_target("HomeNet"));
        }

        #[test]
        fn second_submit_while_pending_is_ignored() {
            let mut model = active_model();
            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);
            let _ = handle_password_input("12345678".to_string(), &mut model);
            let _ = handle_submit_password(&mut model);
            let status = model.attempt.status.clone();

            let _ = handle_password_input("other-password".to_string(), &mut model);
            let _ = handle_submit_password(&mut model);

            assert_eq!(model.attempt.password_draft, "12345678");
            assert_eq!(model.attempt.status, status);
        }

        #[test]
        fn submit_without_expanded_form_does_nothing() {
            let mut model = active_model();

            let _ = handle_submit_password(&mut model);

            assert_eq!(model.attempt.state, ActionState::Idle);
            assert_eq!(model.attempt.status, None);
        }
    }

    mod response {
        use super::*;

        #[test]
        fn success_shows_server_message_and_resets_form() {
            let mut model = active_model();
            let _ = handle_select_network("HomeNet".to_string(), false, &mut model);
            let _ = handle_password_input("12345678".to_string(), &mut model);
            let _ = handle_submit_password(&mut model);

            let _ = handle_connect_response(
                1,
                "HomeNet".to_string(),
                Ok(Some("Saved".to_string())),
                &mut model,
            );

            assert_eq!(model.attempt.status, Some(StatusMessage::success("Saved")));
            assert!(model.attempt.password_draft.is_empty());
            assert_eq!(model.attempt.target_ssid, None);
            assert_eq!(
                model.attempt.state,
                ActionState::Done(ActionOutcome::Succeeded)
            );
            // station status only changes with the next poll
            assert!(!model.station.is_connected);
        }

        #[test]
        fn success_without_message_uses_default_text() {
            let mut model = pending_model("Cafe");

            let _ = handle_connect_response(1, "Cafe".to_string(), Ok(None), &mut model);

            let status = model.attempt.status.unwrap();
            assert!(status.text.starts_with("Success! Credentials saved."));
            assert!(status.text.contains("Cafe"));
        }

        #[test]
        fn server_failure_shows_server_message() {
            let mut model = pending_model("Cafe");

            let _ = handle_connect_response(
                1,
                "Cafe".to_string(),
                Err(ApiFailure::Server {
                    status: 400,
                    message: Some("Bad credentials".to_string()),
                }),
                &mut model,
            );

            assert_eq!(
                model.attempt.status,
                Some(StatusMessage::error("Error: Bad credentials"))
            );
            assert_eq!(model.attempt.state, ActionState::Done(ActionOutcome::Failed));
        }

        #[test]
        fn server_failure_without_message_uses_fallback() {
            let mut model = pending_model("Cafe");

            let _ = handle_connect_response(
                1,
                "Cafe".to_string(),
                Err(ApiFailure::Server {
                    status: 500,
                    message: None,
                }),
                &mut model,
            );

            assert_eq!(
                model.attempt.status,
                Some(StatusMessage::error(
                    "Error: Failed to connect/save credentials."
                ))
            );
        }

        #[test]
        fn transport_failure_shows_network_error() {
            let mut model = pending_model("Cafe");

            let _ = handle_connect_response(
                1,
                "Cafe".to_string(),
                Err(ApiFailure::Transport("Failed to fetch".to_string())),
                &mut model,
            );

            assert_eq!(
                model.attempt.status,
                Some(StatusMessage::error(CONNECT_NETWORK_ERROR))
            );
            assert!(!model.attempt.state.is_pending());
        }

        #[test]
        fn response_from_previous_session_is_ignored() {
            let mut model = pending_model("Cafe");

            let _ = handle_connect_response(0, "Cafe".to_string(), Ok(None), &mut model);

            assert!(model.attempt.state.is_pending());
        }
    }
}
