//! Reqwest-backed client for the community-events backend.
//!
//! This adapter owns transport details only: URL joining, credential
//! attachment, JSON decoding and HTTP error mapping. Resource clients layer
//! fixed path templates on top. The client never retries and never mutates
//! shared state beyond issuing the call itself.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::domain::ApiError;
use crate::domain::ports::CredentialSource;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Description of one outgoing backend call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
    skip_auth: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            skip_auth: false,
        }
    }

    /// GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request for `path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request for `path`.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request for `path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter; values are URL-encoded on dispatch.
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|err| ApiError::encode(&self.path, format!("request body does not serialize: {err}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Send without a credential, for calls that must not assume a prior
    /// session (login, registration).
    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    /// Backend path of this request.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Successful backend response, not yet decoded.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
    path: String,
}

impl ApiResponse {
    /// Response status (always 2xx).
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the response carries no body to decode.
    pub fn is_empty(&self) -> bool {
        self.status == StatusCode::NO_CONTENT || self.body.is_empty()
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a decode [`ApiError`] when the response is empty, does not
    /// declare a JSON content type, or fails to parse.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if self.is_empty() {
            return Err(ApiError::decode(&self.path, "expected a JSON body but the response was empty"));
        }
        if !is_json(self.content_type.as_deref()) {
            return Err(ApiError::decode(&self.path, "response did not declare a JSON content type"));
        }
        serde_json::from_slice(&self.body)
            .map_err(|err| ApiError::decode(&self.path, format!("invalid JSON payload: {err}")))
    }

    /// Return the body as text, for endpoints that answer outside JSON.
    pub fn text(&self) -> Result<String, ApiError> {
        String::from_utf8(self.body.clone())
            .map_err(|err| ApiError::decode(&self.path, format!("body is not valid UTF-8: {err}")))
    }
}

/// HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base: Url,
}

impl BackendClient {
    /// Build a client with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn new(base: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn with_timeout(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    /// Backend origin this client talks to.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Dispatch a request and map any failure into [`ApiError`].
    ///
    /// The credential from `credentials` is attached as a bearer
    /// authorization header unless the request opted out; an empty-string
    /// credential is treated as absent. Exactly one HTTP call is made.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and for any non-2xx
    /// response.
    pub async fn send(
        &self,
        request: ApiRequest,
        credentials: &dyn CredentialSource,
    ) -> Result<ApiResponse, ApiError> {
        let url = request_url(&self.base, &request.path)
            .map_err(|err| ApiError::encode(&request.path, format!("invalid request URL: {err}")))?;

        let mut builder = self.http.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if !request.skip_auth {
            if let Some(token) = credentials.credential().filter(|token| !token.is_empty()) {
                builder = builder.bearer_auth(token);
            }
        }

        let response = builder
            .send()
            .await
            .map_err(|err| map_transport_error(&request.path, &err))?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|err| map_transport_error(&request.path, &err))?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &request.path, body.as_ref()));
        }

        Ok(ApiResponse {
            status,
            content_type,
            body: body.to_vec(),
            path: request.path,
        })
    }

    /// Dispatch a request and decode the JSON success body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-2xx responses, and
    /// undecodable bodies.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        credentials: &dyn CredentialSource,
    ) -> Result<T, ApiError> {
        self.send(request, credentials).await?.json()
    }

    /// Dispatch a write whose success body is irrelevant.
    ///
    /// A `204 No Content` resolves to `Ok(())` without touching the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx responses.
    pub async fn execute(
        &self,
        request: ApiRequest,
        credentials: &dyn CredentialSource,
    ) -> Result<(), ApiError> {
        self.send(request, credentials).await.map(|_| ())
    }
}

fn request_url(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    base.join(path)
}

fn map_transport_error(path: &str, err: &reqwest::Error) -> ApiError {
    error!(error = %err, path, "backend request failed before a response arrived");
    ApiError::transport(path)
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| {
        let mime = value.split(';').next().unwrap_or(value).trim();
        mime.ends_with("json")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn base() -> Url {
        Url::parse("http://backend.test:8080/").expect("valid base URL")
    }

    #[rstest]
    #[case(Some("application/json"), true)]
    #[case(Some("application/json; charset=utf-8"), true)]
    #[case(Some("application/problem+json"), true)]
    #[case(Some("text/html"), false)]
    #[case(Some("text/plain; charset=utf-8"), false)]
    #[case(None, false)]
    fn json_content_types_are_recognised(#[case] content_type: Option<&str>, #[case] json: bool) {
        assert_eq!(is_json(content_type), json);
    }

    #[rstest]
    #[case("/api/events", "http://backend.test:8080/api/events")]
    #[case("/auth/generateToken", "http://backend.test:8080/auth/generateToken")]
    #[case("/api/events/42", "http://backend.test:8080/api/events/42")]
    fn paths_join_onto_the_backend_origin(#[case] path: &str, #[case] expected: &str) {
        let url = request_url(&base(), path).expect("URL joins");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn request_builder_accumulates_parts() {
        let request = ApiRequest::get("/api/events/search")
            .query("query", "kino")
            .skip_auth();

        assert_eq!(request.path(), "/api/events/search");
        assert!(request.skip_auth);
        assert_eq!(request.query, vec![("query", "kino".to_owned())]);
        assert!(request.body.is_none());
    }

    #[rstest]
    fn json_body_is_captured_as_value() {
        let request = ApiRequest::post("/api/events")
            .json(&serde_json::json!({ "title": "Wieczór filmowy" }))
            .expect("body serializes");

        assert_eq!(
            request.body,
            Some(serde_json::json!({ "title": "Wieczór filmowy" }))
        );
    }

    #[rstest]
    fn empty_success_response_reports_empty() {
        let response = ApiResponse {
            status: StatusCode::NO_CONTENT,
            content_type: None,
            body: Vec::new(),
            path: "/api/events/42".to_owned(),
        };
        assert!(response.is_empty());
        let decoded: Result<serde_json::Value, _> = response.json();
        assert!(decoded.is_err(), "204 must not be JSON-decoded");
    }

    #[rstest]
    fn json_response_decodes() {
        let response = ApiResponse {
            status: StatusCode::OK,
            content_type: Some("application/json".to_owned()),
            body: br#"{"id": 7}"#.to_vec(),
            path: "/api/events/7".to_owned(),
        };
        let value: serde_json::Value = response.json().expect("body decodes");
        assert_eq!(value["id"], 7);
    }

    #[rstest]
    fn non_json_response_surfaces_text() {
        let response = ApiResponse {
            status: StatusCode::OK,
            content_type: Some("text/plain".to_owned()),
            body: b"pong".to_vec(),
            path: "/health".to_owned(),
        };
        let decoded: Result<serde_json::Value, _> = response.json();
        assert!(decoded.is_err(), "text bodies are not JSON-decoded");
        assert_eq!(response.text().expect("text decodes"), "pong");
    }
}
