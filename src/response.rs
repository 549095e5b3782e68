//! Response wrapper that keeps the parsed value next to the raw exchange.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful response from the service.
///
/// Endpoint methods on [`Client`](crate::Client) return the parsed value
/// directly; [`Client::call`](crate::Client::call) returns this wrapper so
/// callers of the generic invoker can inspect the raw body and timing.
///
/// # Examples
///
/// ```no_run
/// use route4me::{ApiRequest, Client, endpoints};
///
/// # async fn example() -> Result<(), route4me::Error> {
/// let client = Client::new("11111111111111111111111111111111")?;
/// let response = client
///     .call::<serde_json::Value>(ApiRequest::get(endpoints::USERS))
///     .await?;
///
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
/// if response.latency > std::time::Duration::from_secs(5) {
///     println!("Slow response body: {}", response.raw_body);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The deserialized response data.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the response headers arrived.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data, keeping the exchange details.
    ///
    /// # Examples
    ///
    /// ```
    /// # use route4me::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     "42".to_string(),
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let parsed = response.map(|s| s.parse::<i64>().unwrap_or_default());
    /// assert_eq!(parsed.data, 42);
    /// assert_eq!(parsed.raw_body, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Discards the exchange details.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
