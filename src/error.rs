//! Error types for Route4Me API calls.
//!
//! Every failure the service or the transport can produce maps onto one
//! variant of [`Error`]. The `Display` output of each variant is the
//! human-readable error string callers surface to users, so a call either
//! yields its typed value or exactly one error message.

use http::{HeaderMap, StatusCode};

/// The main error type for Route4Me API calls.
///
/// # Examples
///
/// ```no_run
/// use route4me::{Client, Error, types::RouteParametersQuery};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("11111111111111111111111111111111")?;
/// let query = RouteParametersQuery {
///     route_id: Some("ABCDEF".to_string()),
///     ..Default::default()
/// };
///
/// match client.get_route(&query).await {
///     Ok(route) => println!("Route has {} stops", route.addresses.len()),
///     Err(Error::Api { errors, .. }) => eprintln!("Service refused: {:?}", errors),
///     Err(Error::HttpError { status, raw_response, .. }) => {
///         eprintln!("HTTP {}: {}", status, raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A transport-level error occurred (connection refused, DNS, TLS).
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-2xx status and a structured
    /// `{"errors": [...]}` envelope.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code
    /// * `errors` - The error messages reported by the service, in order
    #[error("{}", errors.join("; "))]
    Api {
        /// The HTTP status code
        status: StatusCode,
        /// The error messages from the envelope
        errors: Vec<String>,
    },

    /// The service answered with a non-2xx status and a body that is not an
    /// error envelope.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code
    /// * `raw_response` - The raw response body
    /// * `headers` - The response headers
    #[error("Response: {raw_response}")]
    HttpError {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
    },

    /// The call transported fine but the service reported that the operation
    /// did not take effect (`status: false`, nothing removed, no note created).
    #[error("{0}")]
    Rejected(String),

    /// Failed to deserialize the response body into the expected type.
    ///
    /// # Fields
    ///
    /// * `raw_response` - The raw response body as a string
    /// * `serde_error` - The error message from serde
    /// * `status` - The HTTP status code of the response
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// Failed to serialize query parameters or a request body.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// A required parameter was missing before any request was made.
    #[error("{0}")]
    InvalidParameter(String),

    /// A note attachment could not be read from disk.
    #[error("Failed to read attachment: {0}")]
    Attachment(#[source] std::io::Error),

    /// Invalid client configuration, such as a missing API key or a bad
    /// header value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Network(err.without_url())
        }
    }
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::HttpError { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::HttpError { raw_response, .. } => Some(raw_response),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the service-reported error messages, if the service sent an
    /// error envelope.
    pub fn errors(&self) -> &[String] {
        match self {
            Error::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Returns `true` if the service explicitly refused the operation, either
    /// through an error envelope or a failed status flag.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Rejected(_))
    }
}

/// A specialized `Result` type for Route4Me API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_joins_messages() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            errors: vec!["Route not found".to_string(), "Invalid route_id".to_string()],
        };
        assert_eq!(err.to_string(), "Route not found; Invalid route_id");
        assert_eq!(err.errors().len(), 2);
        assert!(err.is_rejection());
    }

    #[test]
    fn http_error_prefixes_raw_body() {
        let err = Error::HttpError {
            status: StatusCode::BAD_GATEWAY,
            raw_response: "<html>bad gateway</html>".to_string(),
            headers: HeaderMap::new(),
        };
        assert_eq!(err.to_string(), "Response: <html>bad gateway</html>");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(err.raw_response(), Some("<html>bad gateway</html>"));
        assert!(!err.is_rejection());
    }

    #[test]
    fn rejected_displays_message_verbatim() {
        let err = Error::Rejected("Error removing optimization".to_string());
        assert_eq!(err.to_string(), "Error removing optimization");
        assert!(err.status().is_none());
        assert!(err.errors().is_empty());
    }
}
