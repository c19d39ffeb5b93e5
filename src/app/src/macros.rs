/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.active, false)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.ssid_draft, ssid;
///     model.status, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for GET requests against the device API expecting a JSON body.
///
/// The response is classified into `Result<$response_type, ApiFailure>`,
/// bound to `$result`, and wrapped into the domain event built by `$event`.
/// Values captured by `$event` are moved into the response callback.
///
/// # Example
/// ```ignore
/// api_get!(Scanner, SCAN_ENDPOINT, ScanResponse,
///     |result| ScannerEvent::ScanResponse { seq, result })
/// ```
#[macro_export]
macro_rules! api_get {
    ($domain:ident, $endpoint:expr, $response_type:ty, |$result:ident| $event:expr) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(move |response| {
                let $result: Result<$response_type, $crate::types::ApiFailure> =
                    $crate::process_json_response(response);
                $crate::events::Event::$domain($event)
            })
    };
}

/// Macro for POST requests with a JSON body against a `{message}` endpoint.
///
/// Evaluates to `Result<Command, String>`; the error case means the request
/// could not be built (body serialization) and nothing was sent.
///
/// # Example
/// ```ignore
/// api_post!(ApConfig, AP_ENDPOINT, body_json: &request,
///     |result| ApConfigEvent::SaveResponse { session, result })
/// ```
#[macro_export]
macro_rules! api_post {
    ($domain:ident, $endpoint:expr, body_json: $body:expr, |$result:ident| $event:expr) => {
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => Ok(builder.build().then_send(move |response| {
                let $result: Result<Option<String>, $crate::types::ApiFailure> =
                    $crate::process_message_response(response);
                $crate::events::Event::$domain($event)
            })),
            Err(e) => Err(format!("Failed to create request for {}: {e}", $endpoint)),
        }
    };
}
