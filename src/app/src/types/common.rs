use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a message shown to the operator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    /// Style class the shell applies to the message box
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Human-readable outcome of the last user action
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

/// How a finished action ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed,
}

/// Lifecycle of a single-flight write action (connect, AP save).
///
/// At most one request per action may be in flight; [`ActionState::begin`]
/// refuses to start a second one while the first is `Pending`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
    Done(ActionOutcome),
}

impl ActionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Move to `Pending`. Returns `false` (and changes nothing) if a request
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    pub fn finish(&mut self, outcome: ActionOutcome) {
        *self = Self::Done(outcome);
    }
}

/// Body of a `{message}` response from the device
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Classified failure of a request against the device API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiFailure {
    /// The request never produced an HTTP response (device unreachable, fetch rejected)
    Transport(String),
    /// Non-success HTTP status, with the `message` field of the body if any
    Server { status: u16, message: Option<String> },
    /// Success status but the body could not be decoded
    Decode(String),
}

impl ApiFailure {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Server-supplied message, if the device reported one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::Server {
                status,
                message: Some(message),
            } => write!(f, "HTTP {status}: {message}"),
            Self::Server {
                status,
                message: None,
            } => write!(f, "HTTP {status}"),
            Self::Decode(e) => write!(f, "invalid response body: {e}"),
        }
    }
}
