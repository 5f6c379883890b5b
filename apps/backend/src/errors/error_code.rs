//! Error codes for the fee forwarder API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem-details responses.

use core::fmt;

/// Centralized error codes surfaced in HTTP error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Request body could not be read or decoded
    BadRequest,
    /// Request body exceeds the accepted size
    PayloadTooLarge,

    // System Errors
    /// Required configuration is missing or malformed
    ConfigError,
    /// The message queue rejected or never received the message
    QueueUnavailable,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::QueueUnavailable => "QUEUE_UNAVAILABLE",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
