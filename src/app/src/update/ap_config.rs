use crux_core::{render::render, Command};

use crate::config::AP_ENDPOINT;
use crate::events::{ApConfigEvent, Event};
use crate::model::ApConfigModel;
use crate::types::{
    ActionOutcome, ApConfig, ApConfigPhase, ApConfigRequest, ApiFailure, StatusMessage,
};
use crate::{api_get, api_post, update_field, Effect};

const SAVING: &str = "Saving configuration...";
const SAVE_SUCCEEDED: &str = "Configuration saved.";
const SAVE_FAILED: &str = "Save failed.";
const SAVE_NETWORK_ERROR: &str = "Network error during save operation.";
const FETCH_NETWORK_ERROR: &str = "Network error while fetching configuration.";

/// Handle access point configuration events
pub fn handle(event: ApConfigEvent, model: &mut ApConfigModel) -> Command<Effect, Event> {
    match event {
        ApConfigEvent::Activate => {
            if model.active {
                return Command::done();
            }
            model.active = true;
            model.session += 1;
            fetch_config(model)
        }

        ApConfigEvent::Deactivate => {
            if !model.active {
                return Command::done();
            }
            model.active = false;
            model.is_loading = false;
            model.save = Default::default();
            model.password_draft.clear();
            render()
        }

        ApConfigEvent::Reload => {
            if !model.active || model.phase() != ApConfigPhase::Idle {
                return Command::done();
            }
            fetch_config(model)
        }

        ApConfigEvent::FetchResponse { session, result } => {
            handle_fetch_response(session, result, model)
        }

        ApConfigEvent::SsidInput { ssid } => {
            if model.save.is_pending() {
                return Command::done();
            }
            update_field!(model.ssid_draft, ssid)
        }

        ApConfigEvent::PasswordInput { password } => {
            if model.save.is_pending() {
                return Command::done();
            }
            update_field!(model.password_draft, password)
        }

        ApConfigEvent::Save => handle_save(model),

        ApConfigEvent::SaveResponse { session, result } => {
            handle_save_response(session, result, model)
        }

        ApConfigEvent::ClearStatus => update_field!(model.status, None),
    }
}

fn fetch_config(model: &mut ApConfigModel) -> Command<Effect, Event> {
    model.is_loading = true;
    let session = model.session;
    log::debug!("fetching access point configuration");

    Command::all([
        render(),
        api_get!(ApConfig, AP_ENDPOINT, ApConfig, |result| {
            ApConfigEvent::FetchResponse { session, result }
        }),
    ])
}

/// Apply the fetched configuration. Any failure substitutes placeholders
/// instead of failing the view; only transport failures show a message.
pub fn handle_fetch_response(
    session: u64,
    result: Result<ApConfig, ApiFailure>,
    model: &mut ApConfigModel,
) -> Command<Effect, Event> {
    if !model.active || session != model.session {
        log::debug!("dropping access point config response from session {session}");
        return Command::done();
    }
    model.is_loading = false;

    match result {
        Ok(config) => model.apply_config(config),
        Err(e) => {
            log::warn!("fetching access point config failed: {e}");
            model.apply_config(ApConfig::unavailable());
            if e.is_transport() {
                model.status = Some(StatusMessage::error(FETCH_NETWORK_ERROR));
            }
        }
    }

    render()
}

/// Validate the drafts and POST them. Validation failures only set the message.
pub fn handle_save(model: &mut ApConfigModel) -> Command<Effect, Event> {
    if !model.active || !model.can_save() {
        return Command::done();
    }

    let request = match ApConfigRequest::new(model.ssid_draft.clone(), model.password_draft.clone())
    {
        Ok(request) => request,
        Err(e) => return update_field!(model.status, Some(StatusMessage::error(e))),
    };

    if !model.save.begin() {
        return Command::done();
    }
    model.status = Some(StatusMessage::info(SAVING));
    log::info!("saving access point config (ssid {})", request.ssid);

    let session = model.session;
    match api_post!(ApConfig, AP_ENDPOINT, body_json: &request, |result| {
        ApConfigEvent::SaveResponse { session, result }
    }) {
        Ok(cmd) => Command::all([render(), cmd]),
        Err(e) => {
            log::error!("{e}");
            model.save.finish(ActionOutcome::Failed);
            model.password_draft.clear();
            model.status = Some(StatusMessage::error(e));
            render()
        }
    }
}

/// Finish the save. The password draft is cleared whatever the outcome;
/// on success the stored config is re-fetched rather than assumed.
pub fn handle_save_response(
    session: u64,
    result: Result<Option<String>, ApiFailure>,
    model: &mut ApConfigModel,
) -> Command<Effect, Event> {
    if !model.active || session != model.session || !model.save.is_pending() {
        log::debug!("dropping access point save response from session {session}");
        return Command::done();
    }
    model.password_draft.clear();

    match result {
        Ok(message) => {
            log::info!("access point config saved");
            model.save.finish(ActionOutcome::Succeeded);
            model.status = Some(StatusMessage::success(
                message.unwrap_or_else(|| SAVE_SUCCEEDED.to_string()),
            ));
            fetch_config(model)
        }
        Err(e) => {
            log::warn!("saving access point config failed: {e}");
            model.save.finish(ActionOutcome::Failed);
            let text = match &e {
                ApiFailure::Transport(_) => SAVE_NETWORK_ERROR,
                other => other.server_message().unwrap_or(SAVE_FAILED),
            };
            model.status = Some(StatusMessage::error(text));
            render()
        }
    }
}
