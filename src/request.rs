//! Request descriptions consumed by the generic invoker.

use crate::{query, Error, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use serde_json::Value;

/// A fully described call to one Route4Me endpoint.
///
/// The API key is not part of the request; the [`Client`](crate::Client)
/// appends it when the request is executed.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// The endpoint path, relative to the client's base URL.
    pub path: String,

    /// Query pairs in the order they were added.
    pub query: Vec<(String, String)>,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// The request body.
    pub body: RequestBody,

    /// How `null` members of a JSON body are treated when sent.
    pub json_policy: JsonPolicy,
}

/// The body of an [`ApiRequest`].
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// `application/json`.
    Json(Value),
    /// `application/x-www-form-urlencoded`, fields in order.
    Form(Vec<(String, String)>),
    /// `multipart/form-data`.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// A short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Json(_) => "json",
            RequestBody::Form(_) => "form",
            RequestBody::Multipart(_) => "multipart",
        }
    }
}

/// Treatment of `null` members in JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonPolicy {
    /// Remove every `null` object member before sending.
    #[default]
    OmitNulls,
    /// Send the body exactly as serialized, so explicit nulls clear values.
    KeepNulls,
}

impl JsonPolicy {
    pub(crate) fn apply(self, value: &Value) -> Value {
        match self {
            JsonPolicy::KeepNulls => value.clone(),
            JsonPolicy::OmitNulls => strip_nulls(value),
        }
    }
}

fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(strip_nulls).collect()),
        other => other.clone(),
    }
}

/// A multipart body, kept as plain data until it is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    /// The parts, in order.
    pub parts: Vec<MultipartPart>,
}

/// One part of a [`MultipartForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    /// The form field name.
    pub name: String,
    /// The part payload.
    pub content: PartContent,
}

/// Payload of a [`MultipartPart`].
#[derive(Debug, Clone, PartialEq)]
pub enum PartContent {
    /// A text field.
    Text(String),
    /// A file upload.
    File {
        /// The file name announced to the server.
        file_name: String,
        /// The file contents.
        bytes: Vec<u8>,
    },
}

impl MultipartForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart {
            name: name.into(),
            content: PartContent::Text(value.into()),
        });
        self
    }

    /// Appends a file part.
    pub fn file(mut self, name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.parts.push(MultipartPart {
            name: name.into(),
            content: PartContent::File {
                file_name: file_name.into(),
                bytes,
            },
        });
        self
    }

    pub(crate) fn into_reqwest(self) -> reqwest::multipart::Form {
        self.parts
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, part| match part.content {
                PartContent::Text(text) => form.text(part.name, text),
                PartContent::File { file_name, bytes } => form.part(
                    part.name,
                    reqwest::multipart::Part::bytes(bytes).file_name(file_name),
                ),
            })
    }
}

impl ApiRequest {
    /// Creates a request with no query and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            json_policy: JsonPolicy::default(),
        }
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Shorthand for a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends the query pairs produced by serializing `params`.
    ///
    /// Keys that are already present are replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` cannot be serialized as a flat query.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        for (key, value) in query::to_pairs(params)? {
            self.set_query_pair(key, value);
        }
        Ok(self)
    }

    /// Sets a single query parameter, replacing an existing one with the
    /// same key.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set_query_pair(key.into(), value.to_string());
        self
    }

    fn set_query_pair(&mut self, key: String, value: String) {
        if key == query::API_KEY_PARAM {
            return;
        }
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.query.push((key, value)),
        }
    }

    /// Returns the value of a query parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| Error::SerializationFailed(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Sets a url-encoded form body.
    pub fn form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.body = RequestBody::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Sets a multipart body.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Sends explicit nulls in the JSON body instead of stripping them.
    pub fn keep_nulls(mut self) -> Self {
        self.json_policy = JsonPolicy::KeepNulls;
        self
    }
}

impl Default for ApiRequest {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omit_nulls_strips_nested_members() {
        let body = json!({
            "route_id": "R1",
            "parameters": { "route_name": null, "optimize": "Distance" },
            "addresses": [{ "alias": null, "lat": 1.5 }]
        });
        assert_eq!(
            JsonPolicy::OmitNulls.apply(&body),
            json!({
                "route_id": "R1",
                "parameters": { "optimize": "Distance" },
                "addresses": [{ "lat": 1.5 }]
            })
        );
        assert_eq!(JsonPolicy::KeepNulls.apply(&body), body);
    }

    #[test]
    fn query_pairs_replace_by_key() {
        let request = ApiRequest::get("/actions/duplicate_route.php")
            .with_query_param("to", "route")
            .with_query_param("route_id", "R1")
            .with_query_param("to", "none");
        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query_param("to"), Some("none"));
    }

    #[test]
    fn api_key_cannot_be_set_on_a_request() {
        let request = ApiRequest::get("/api.v4/route.php").with_query_param("api_key", "other");
        assert!(request.query.is_empty());
    }

    #[test]
    fn multipart_keeps_part_order() {
        let form = MultipartForm::new()
            .file("strFilename", "notes.csv", b"a,b".to_vec())
            .text("strUpdateType", "dropoff")
            .text("strNoteContents", "left at door");
        let names: Vec<_> = form.parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["strFilename", "strUpdateType", "strNoteContents"]);
    }
}
