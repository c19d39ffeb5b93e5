//! HTTP helper functions for Crux Core
//!
//! Every response from the device is classified into `Result<T, ApiFailure>`
//! here, so the update handlers only deal with domain outcomes.

use crux_http::{HttpError, Response};
use serde::de::DeserializeOwned;

use crate::types::{ApiFailure, ApiMessage};

/// Base URL for device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell strips this prefix before sending requests via `fetch()`.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_panel_core::http_helpers::build_url;
/// let url = build_url("/api/wifi/scan");
/// assert_eq!(url, "https://relative/api/wifi/scan");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `message` field of a JSON body, if present and not blank
pub fn extract_message(body: Option<&[u8]>) -> Option<String> {
    body.and_then(|bytes| serde_json::from_slice::<ApiMessage>(bytes).ok())
        .and_then(|msg| msg.message)
        .filter(|msg| !msg.trim().is_empty())
}

fn server_failure(status: u16, body: Option<&[u8]>) -> ApiFailure {
    ApiFailure::Server {
        status,
        message: extract_message(body),
    }
}

/// Classify a status + body pair expected to carry JSON of type `T`
pub fn parse_json_body<T: DeserializeOwned>(
    status: u16,
    body: Option<Vec<u8>>,
) -> Result<T, ApiFailure> {
    if !is_success_status(status) {
        return Err(server_failure(status, body.as_deref()));
    }

    match body {
        Some(bytes) if !bytes.is_empty() => {
            serde_json::from_slice(&bytes).map_err(|e| ApiFailure::Decode(e.to_string()))
        }
        _ => Err(ApiFailure::Decode("empty response body".to_string())),
    }
}

/// Classify a status + body pair of a `{message}` endpoint.
///
/// The body is read leniently: a missing or malformed body yields no message.
pub fn parse_message_body(
    status: u16,
    body: Option<Vec<u8>>,
) -> Result<Option<String>, ApiFailure> {
    if is_success_status(status) {
        Ok(extract_message(body.as_deref()))
    } else {
        Err(server_failure(status, body.as_deref()))
    }
}

/// Map a `crux_http` error into the failure taxonomy
pub fn map_http_error(error: HttpError) -> ApiFailure {
    match error {
        HttpError::Http { code, body, .. } => server_failure(u16::from(code), body.as_deref()),
        other => ApiFailure::Transport(other.to_string()),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ApiFailure> {
    match result {
        Ok(mut response) => {
            let status = u16::from(response.status());
            parse_json_body(status, response.take_body())
        }
        Err(e) => Err(map_http_error(e)),
    }
}

/// Process HTTP response result of a `{message}` endpoint
pub fn process_message_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<Option<String>, ApiFailure> {
    match result {
        Ok(mut response) => {
            let status = u16::from(response.status());
            parse_message_body(status, response.take_body())
        }
        Err(e) => Err(map_http_error(e)),
    }
}

// `crux_http::Response` has a private constructor, so the classification is
// tested on the status/body level below.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanResponse;

    #[test]
    fn json_body_on_success() {
        let result: Result<ScanResponse, _> =
            parse_json_body(200, Some(br#"{"networks":[]}"#.to_vec()));
        assert_eq!(result, Ok(ScanResponse::default()));
    }

    #[test]
    fn json_body_with_error_status_is_server_failure() {
        let result: Result<ScanResponse, _> =
            parse_json_body(503, Some(br#"{"message":"Radio busy"}"#.to_vec()));
        assert_eq!(
            result,
            Err(ApiFailure::Server {
                status: 503,
                message: Some("Radio busy".to_string())
            })
        );
    }

    #[test]
    fn invalid_json_on_success_is_decode_failure() {
        let result: Result<ScanResponse, _> = parse_json_body(200, Some(b"<html>".to_vec()));
        assert!(matches!(result, Err(ApiFailure::Decode(_))));

        let result: Result<ScanResponse, _> = parse_json_body(200, None);
        assert!(matches!(result, Err(ApiFailure::Decode(_))));
    }

    #[test]
    fn message_body_is_lenient() {
        assert_eq!(
            parse_message_body(200, Some(br#"{"message":"Saved"}"#.to_vec())),
            Ok(Some("Saved".to_string()))
        );
        assert_eq!(parse_message_body(200, Some(b"OK".to_vec())), Ok(None));
        assert_eq!(parse_message_body(204, None), Ok(None));
        assert_eq!(
            parse_message_body(200, Some(br#"{"message":"  "}"#.to_vec())),
            Ok(None)
        );
    }

    #[test]
    fn message_body_error_without_message() {
        assert_eq!(
            parse_message_body(500, Some(b"Internal Server Error".to_vec())),
            Err(ApiFailure::Server {
                status: 500,
                message: None
            })
        );
    }
}
