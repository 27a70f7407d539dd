//! The backend API seam.
//!
//! [`UrlApi`] is what the page controller talks to; the browser build
//! implements it over `fetch`, tests implement it in memory. Response
//! classification lives here so every implementation maps statuses and
//! bodies to errors the same way.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ApiErrorBody, HealthReport, ShortenRequest, UrlRecord};

/// Operations offered by the shortening backend.
///
/// Futures are not required to be `Send`: the client runs on a single
/// cooperative event loop.
#[allow(async_fn_in_trait)]
pub trait UrlApi {
    /// Fetch every stored mapping.
    async fn list_urls(&self) -> Result<Vec<UrlRecord>>;

    /// Ask the backend to shorten a URL.
    async fn shorten(&self, request: &ShortenRequest) -> Result<UrlRecord>;

    /// Probe the API health route.
    async fn health(&self) -> Result<HealthReport>;
}

/// Returns true for 2xx statuses.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    matches!(status, 200..=299)
}

/// Classify a raw HTTP response and decode its JSON body.
///
/// Non-2xx statuses become [`Error::Status`], carrying the body's `error`
/// field when it parses. A 2xx body that does not match `T` becomes
/// [`Error::Decode`].
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T> {
    if !is_success(status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        debug!(status, ?message, "API returned an error status");
        return Err(Error::Status {
            status,
            status_text: status_text.to_string(),
            message,
        });
    }

    serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(304));
        assert!(!is_success(400));
    }

    #[test]
    fn test_decode_success_list() {
        let body = r#"[{"original_url":"https://a.example","short_url":"https://s.ly/a"}]"#;
        let records: Vec<UrlRecord> = decode_response(200, "OK", body).expect("Should decode");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].short_url, "https://s.ly/a");
    }

    #[test]
    fn test_decode_error_status_with_message() {
        let err = decode_response::<UrlRecord>(400, "Bad Request", r#"{"error":"invalid url"}"#)
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message(), Some("invalid url"));
    }

    #[test]
    fn test_decode_error_status_with_html_body() {
        let err = decode_response::<Vec<UrlRecord>>(
            502,
            "Bad Gateway",
            "<html><body>upstream down</body></html>",
        )
        .unwrap_err();
        match err {
            Error::Status {
                status,
                status_text,
                message,
            } => {
                assert_eq!(status, 502);
                assert_eq!(status_text, "Bad Gateway");
                assert_eq!(message, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_success_with_wrong_shape() {
        let err = decode_response::<Vec<UrlRecord>>(200, "OK", r#"{"urls":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
