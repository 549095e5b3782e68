//! The Route4Me client and its generic invoker.
//!
//! Every endpoint method on [`Client`] builds an [`ApiRequest`] and hands it
//! to [`Client::call`] or [`Client::call_text`]. Those two methods own query
//! assembly, API key injection, body encoding, logging, and the mapping of
//! failed responses onto [`Error`].

use crate::{
    endpoints::DEFAULT_BASE_URL,
    query::API_KEY_PARAM,
    request::{ApiRequest, RequestBody},
    types::envelope::ErrorResponse,
    Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use reqwest::tls;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Default per-request timeout. Optimizations of large problems can run for
/// a long time before the service answers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// A client for the Route4Me API.
///
/// The client is cheap to clone and safe to share across tasks. Idle
/// connections are not pooled, so each call releases its connection when it
/// returns.
///
/// # Examples
///
/// ```no_run
/// use route4me::{Client, types::RouteParametersQuery};
///
/// # async fn example() -> Result<(), route4me::Error> {
/// let client = Client::new("11111111111111111111111111111111")?;
///
/// let routes = client
///     .get_routes(&RouteParametersQuery {
///         limit: Some(10),
///         offset: Some(0),
///         ..Default::default()
///     })
///     .await?;
/// println!("Fetched {} routes", routes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    api_key: String,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl Client {
    /// Creates a client with default settings for the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be
    /// constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use route4me::Client;
    /// use std::time::Duration;
    ///
    /// # fn example() -> Result<(), route4me::Error> {
    /// let client = Client::builder()
    ///     .api_key("11111111111111111111111111111111")
    ///     .base_url("https://staging.example.com")?
    ///     .timeout(Duration::from_secs(120))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Executes a request and deserializes the JSON response into `Res`.
    ///
    /// A 2xx body carrying a non-empty `{"errors": [...]}` envelope is
    /// reported as [`Error::Api`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use route4me::{ApiRequest, Client, endpoints};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Route { route_id: String }
    ///
    /// # async fn example() -> Result<(), route4me::Error> {
    /// let client = Client::new("11111111111111111111111111111111")?;
    /// let request = ApiRequest::get(endpoints::ROUTE).with_query_param("route_id", "ABC");
    /// let response = client.call::<Route>(request).await?;
    /// println!("{} in {:?}", response.data.route_id, response.latency);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<Res>(&self, request: ApiRequest) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let response = self.exchange(request).await?;

        if let Some(errors) = error_envelope(&response.raw_body) {
            tracing::warn!(
                status = response.status.as_u16(),
                errors = ?errors,
                "Service returned an error envelope"
            );
            return Err(Error::Api {
                status: response.status,
                errors,
            });
        }

        match serde_json::from_str::<Res>(&response.raw_body) {
            Ok(data) => Ok(response.map(|_| data)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %response.raw_body,
                    "Failed to deserialize response"
                );

                Err(Error::DeserializationFailed {
                    raw_response: response.raw_body,
                    serde_error: e.to_string(),
                    status: response.status,
                })
            }
        }
    }

    /// Executes a request and returns the response body verbatim.
    ///
    /// Used by endpoints that answer with XML, CSV, or bare values.
    pub async fn call_text(&self, request: ApiRequest) -> Result<Response<String>> {
        self.exchange(request).await
    }

    /// Sends a parameter object the way the service's generic endpoints
    /// expect it: as the query string for GET, as a JSON body otherwise.
    pub async fn send_params<P, Res>(
        &self,
        method: Method,
        path: impl Into<String>,
        params: &P,
    ) -> Result<Response<Res>>
    where
        P: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let request = ApiRequest::new(method.clone(), path);
        let request = if method == Method::GET {
            request.query(params)?
        } else {
            request.json(params)?
        };
        self.call(request).await
    }

    /// Runs one HTTP exchange and returns the raw body of a 2xx response.
    async fn exchange(&self, request: ApiRequest) -> Result<Response<String>> {
        let start_time = Instant::now();
        let response = self.execute_request(request).await?;
        Self::read_response(response, start_time.elapsed()).await
    }

    /// Resolves the endpoint path and appends the query, API key last.
    fn request_url(&self, request: &ApiRequest) -> Url {
        let mut url = self.inner.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), request.path);
        url.set_path(&path);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(API_KEY_PARAM, &self.inner.api_key);
        }

        url
    }

    async fn execute_request(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let url = self.request_url(&request);

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            query_params = request.query.len(),
            body = request.body.kind(),
            "Executing HTTP request"
        );

        let mut builder = self.inner.http_client.request(request.method.clone(), url);

        for (name, value) in &self.inner.default_headers {
            builder = builder.header(name, value);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&request.json_policy.apply(&value)),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(form) => builder.multipart(form.into_reqwest()),
        };

        let response = builder.send().await?;

        Ok(response)
    }

    async fn read_response(
        response: reqwest::Response,
        latency: Duration,
    ) -> Result<Response<String>> {
        let status = response.status();
        let headers = response.headers().clone();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        if !status.is_success() {
            let raw_response = response.text().await.unwrap_or_default();
            return Err(failure(status, headers, raw_response));
        }

        let raw_body = response.text().await?;

        Ok(Response::new(raw_body.clone(), raw_body, status, headers, latency))
    }
}

/// Maps a non-2xx response onto the error taxonomy.
fn failure(status: StatusCode, headers: HeaderMap, raw_response: String) -> Error {
    if status.is_client_error() {
        tracing::error!(
            status = status.as_u16(),
            response = %raw_response,
            "Client error (4xx)"
        );
    } else if status.is_server_error() {
        tracing::warn!(
            status = status.as_u16(),
            response = %raw_response,
            "Server error (5xx)"
        );
    }

    match error_envelope(&raw_response) {
        Some(errors) => Error::Api { status, errors },
        None => Error::HttpError {
            status,
            raw_response,
            headers,
        },
    }
}

/// Only a JSON object carrying an `errors` member counts as an envelope.
fn error_envelope(raw: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<serde_json::Value>(raw).ok()? {
        object @ serde_json::Value::Object(_) if object.get("errors").is_some() => {
            serde_json::from_value::<ErrorResponse>(object)
                .ok()
                .map(|envelope| envelope.errors)
                .filter(|errors| !errors.is_empty())
        }
        _ => None,
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use route4me::ClientBuilder;
/// use reqwest::tls;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), route4me::Error> {
/// let client = ClientBuilder::new()
///     .api_key("11111111111111111111111111111111")
///     .timeout(Duration::from_secs(300))
///     .min_tls_version(tls::Version::TLS_1_3)
///     .default_header("X-Request-Source", "dispatch")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    min_tls_version: tls::Version,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            api_key: None,
            base_url: None,
            default_headers,
            timeout: Some(DEFAULT_TIMEOUT),
            min_tls_version: tls::Version::TLS_1_2,
            user_agent: None,
        }
    }

    /// Sets the API key appended to every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL endpoint paths are resolved against.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the per-request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the per-request timeout.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Sets the minimum TLS protocol version. Defaults to TLS 1.2.
    pub fn min_tls_version(mut self, version: tls::Version) -> Self {
        self.min_tls_version = version;
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key was provided or if the HTTP client
    /// configuration is invalid.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::ConfigurationError("API key is required".to_string()))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut http_client = reqwest::Client::builder()
            .min_tls_version(self.min_tls_version)
            .pool_max_idle_per_host(0);
        if let Some(user_agent) = self.user_agent {
            http_client = http_client.user_agent(user_agent);
        }
        let http_client = http_client.build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                api_key,
                default_headers: self.default_headers,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
