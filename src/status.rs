//! Response status classification.

use crate::logging::Level;

/// Statuses that stop the caller: bad key, no access, rate limited.
const FATAL_STATUSES: [u16; 3] = [401, 403, 429];

/// Statuses caused by a malformed or misdirected request.
const REQUEST_ERROR_STATUSES: [u16; 2] = [400, 404];

/// How the dispatcher treats a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx.
    Success,
    /// 400 or 404.
    RequestError,
    /// 401, 403 or 429.
    Fatal,
    /// Any other status.
    Unexpected,
}

impl StatusClass {
    /// Classify a numeric HTTP status.
    pub fn classify(status: u16) -> Self {
        if FATAL_STATUSES.contains(&status) {
            Self::Fatal
        } else if REQUEST_ERROR_STATUSES.contains(&status) {
            Self::RequestError
        } else if (200..300).contains(&status) {
            Self::Success
        } else {
            Self::Unexpected
        }
    }

    /// The `type` tag logged for responses of this class.
    pub fn log_type(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::RequestError => "RequestError",
            Self::Fatal => "FatalError",
            Self::Unexpected => "UnexpectedStatus",
        }
    }

    /// The level responses of this class are logged at.
    pub fn log_level(self) -> Level {
        match self {
            Self::Success => Level::Debug,
            _ => Level::Error,
        }
    }
}
