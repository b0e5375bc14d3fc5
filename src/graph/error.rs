use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced by the directory client.
///
/// Every variant is handed back to the caller unchanged; nothing in this
/// crate retries or falls back.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot resolve endpoint: {0}")]
    Endpoint(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("cannot decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{url} - {status}, {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Endpoint,
    Dispatch,
    Decode,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Endpoint(_) => ErrorKind::Endpoint,
            Self::Dispatch(_) => ErrorKind::Dispatch,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    pub(crate) fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint(message.into())
    }

    /// HTTP status of a rejected request, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Dispatch(DispatchError::Status { status, .. }) => Some(*status),
            Self::Dispatch(DispatchError::Transport(e)) => e.status(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Dispatch(DispatchError::Transport(e))
    }
}

/// Pull a human readable message out of an error body.
///
/// The directory API answers with `{"odata.error": {"message": {"value": ..}}}`
/// while the login endpoint uses the OAuth2 `error_description` field.
pub(crate) fn graph_error_message(body: &[u8]) -> String {
    let Ok(json_response) = serde_json::from_slice::<Value>(body) else {
        return String::from_utf8_lossy(body).trim().to_string();
    };

    json_response
        .get("odata.error")
        .and_then(|v| v.get("message"))
        .and_then(|v| v.get("value"))
        .or_else(|| json_response.get("error_description"))
        .or_else(|| json_response.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
