//! Error taxonomy shared by every API family.
//!
//! Errors fall into two groups:
//!
//! - Caller misuse ([`SdkError::UndefinedLookup`], client-side
//!   [`SdkError::UnprocessableEntity`]) is returned synchronously from a
//!   `send_*` call, before anything is dispatched.
//! - Transport and server failures are produced by a [`Sender`](crate::sender::Sender)
//!   and surface unchanged from the awaited send.

use thiserror::Error;

/// Errors that can occur when sending a lookup.
#[derive(Debug, Error)]
pub enum SdkError {
    /// A `send_*` operation was called without a lookup.
    #[error(
        "The lookup provided is missing or undefined. Make sure you're passing a Lookup object."
    )]
    UndefinedLookup,

    /// The lookup cannot be processed, either because it failed client-side
    /// validation or because the server answered 422.
    #[error("{0}")]
    UnprocessableEntity(String),

    /// HTTP 400
    #[error("Bad Request (Malformed Payload): A GET request lacked a street field or the request body of a POST request contained malformed JSON.")]
    BadRequest,

    /// HTTP 401
    #[error("Unauthorized: The credentials were provided incorrectly or did not match any existing active credentials.")]
    BadCredentials,

    /// HTTP 402
    #[error("Payment Required: There is no active subscription for the account associated with the credentials submitted with the request.")]
    PaymentRequired,

    /// HTTP 413
    #[error("Request Entity Too Large: The request body has exceeded the maximum size.")]
    RequestEntityTooLarge,

    /// HTTP 429
    #[error("When using the public 'website key' authentication, we restrict the number of requests coming from a given source over too short of a time.")]
    TooManyRequests,

    /// HTTP 500
    #[error("Internal Server Error.")]
    InternalServerError,

    /// HTTP 503
    #[error("Service Unavailable. Try again later.")]
    ServiceUnavailable,

    /// HTTP 504
    #[error("The upstream data provider did not respond in a timely fashion and the request failed. A serious, yet rare occurrence indeed.")]
    GatewayTimeout,

    /// Any other non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed before a status was received (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The payload could not be decoded into the endpoint's response shape.
    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SdkError {
    /// Map a non-success HTTP status to its error kind.
    ///
    /// `message` is the response body; it is kept for 422 and for statuses
    /// without a dedicated kind.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::BadCredentials,
            402 => Self::PaymentRequired,
            413 => Self::RequestEntityTooLarge,
            422 if message.is_empty() => {
                Self::UnprocessableEntity("GET request lacked required fields.".to_string())
            }
            422 => Self::UnprocessableEntity(message),
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            _ => Self::Api { status, message },
        }
    }

    /// True for errors caused by how the SDK was called rather than by the
    /// network or the server.
    #[must_use]
    pub const fn is_caller_misuse(&self) -> bool {
        matches!(self, Self::UndefinedLookup | Self::UnprocessableEntity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (400u16, "BadRequest"),
            (401, "BadCredentials"),
            (402, "PaymentRequired"),
            (413, "RequestEntityTooLarge"),
            (422, "UnprocessableEntity"),
            (429, "TooManyRequests"),
            (500, "InternalServerError"),
            (503, "ServiceUnavailable"),
            (504, "GatewayTimeout"),
            (418, "Api"),
        ];

        for (status, expected) in cases {
            let err = SdkError::from_status(status, String::new());
            let kind = format!("{err:?}");
            assert!(
                kind.starts_with(expected),
                "status {status}: expected {expected}, got {kind}"
            );
        }
    }

    #[test]
    fn test_unprocessable_keeps_server_message() {
        let err = SdkError::from_status(422, "missing street".into());
        assert!(matches!(err, SdkError::UnprocessableEntity(ref m) if m == "missing street"));
    }

    #[test]
    fn test_unprocessable_default_message() {
        let err = SdkError::from_status(422, String::new());
        assert_eq!(err.to_string(), "GET request lacked required fields.");
    }

    #[test]
    fn test_unknown_status_keeps_body() {
        let err = SdkError::from_status(418, "teapot".into());
        assert_eq!(err.to_string(), "API error: 418 - teapot");
    }

    #[test]
    fn test_caller_misuse_classification() {
        assert!(SdkError::UndefinedLookup.is_caller_misuse());
        assert!(SdkError::UnprocessableEntity("x".into()).is_caller_misuse());
        assert!(!SdkError::TooManyRequests.is_caller_misuse());
        assert!(!SdkError::Api {
            status: 599,
            message: String::new()
        }
        .is_caller_misuse());
    }
}
