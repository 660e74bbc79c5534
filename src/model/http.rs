/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Configuration;
use crate::constants::USER_AGENT;
use crate::error::{AppError, HttpError};
use crate::utils::curl::to_curl;
use crate::utils::id::get_id;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{Span, error, info, info_span};

/// Connection pool plus the default headers merged into every request
///
/// Cloning is cheap and every clone sees the same header map, so clients built
/// from one session observe each other's `set_headers` calls. The map is
/// shared state: two flows running in parallel on the same session will see
/// each other's auth token.
#[derive(Debug, Clone)]
pub struct Session {
    http_client: Client,
    headers: Arc<RwLock<HeaderMap>>,
}

impl Session {
    /// Creates a session with no default headers
    pub fn new() -> Result<Self, AppError> {
        Self::with_headers(HeaderMap::new())
    }

    /// Creates a session seeded with the headers of a configuration
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, AppError> {
        Self::with_headers(parse_headers(configuration.headers())?)
    }

    fn with_headers(headers: HeaderMap) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            headers: Arc::new(RwLock::new(headers)),
        })
    }

    /// Merges headers into the defaults; same-named entries are replaced
    ///
    /// All values are validated before the map is touched, so either every
    /// header is applied or none is.
    pub async fn set_headers<I, K, V>(&self, headers: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let parsed = parse_headers(headers)?;
        let mut current = self.headers.write().await;
        for (name, value) in parsed.iter() {
            current.insert(name.clone(), value.clone());
        }
        Ok(())
    }

    /// Snapshot of the current default headers
    pub async fn headers(&self) -> HeaderMap {
        self.headers.read().await.clone()
    }
}

fn parse_headers<I, K, V>(headers: I) -> Result<HeaderMap, AppError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_ref().as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("header name {}: {e}", name.as_ref())))?;
        let value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| AppError::InvalidInput(format!("header value for {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Per-call request parts: query string, JSON body and header overrides
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    query: Vec<(String, String)>,
    json: Option<Value>,
    headers: Vec<(String, String)>,
}

impl RequestParams {
    /// Empty parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Serializes `body` as the JSON payload
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.json = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Uses an already built JSON value as the payload
    #[must_use]
    pub fn with_json_value(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Adds a header that overrides the session default of the same name
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Query parameters
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON payload
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Header overrides
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// A fully read response
///
/// The body is buffered so callers can check status and headers and still
/// decode the payload afterwards.
#[derive(Debug, Clone)]
pub struct RestResponse {
    /// Response status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: String,
}

impl RestResponse {
    /// Response status
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Value of a header, if present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw body
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decodes the body as JSON, falling back to an empty object
    #[must_use]
    pub fn json_or_empty(&self) -> Value {
        json_or_empty(&self.body)
    }
}

/// HTTP client base shared by every resource client
///
/// Joins the configured host with the caller's path, merges call headers
/// over the session defaults and turns every non-2xx status into
/// [`AppError::Http`].
#[derive(Debug, Clone)]
pub struct RestClient {
    host: String,
    disable_log: bool,
    session: Session,
    span: Span,
}

impl RestClient {
    /// Creates a client with its own session
    pub fn new(configuration: &Configuration) -> Result<Self, AppError> {
        let session = Session::from_configuration(configuration)?;
        Ok(Self::with_session(configuration, session))
    }

    /// Creates a client on top of an existing session
    ///
    /// The configuration headers are not applied here; the session is expected
    /// to have been seeded already.
    pub fn with_session(configuration: &Configuration, session: Session) -> Self {
        Self {
            host: configuration.host().to_string(),
            disable_log: configuration.disable_log(),
            session,
            span: info_span!("rest_client", service = "api"),
        }
    }

    /// Replaces the span request/response events are recorded under
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Base URL requests are sent to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Merges headers into the session defaults
    pub async fn set_headers<I, K, V>(&self, headers: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.session.set_headers(headers).await
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, params: RequestParams) -> Result<RestResponse, AppError> {
        self.send_request(Method::GET, path, params).await
    }

    /// Makes a POST request
    pub async fn post(&self, path: &str, params: RequestParams) -> Result<RestResponse, AppError> {
        self.send_request(Method::POST, path, params).await
    }

    /// Makes a PUT request
    pub async fn put(&self, path: &str, params: RequestParams) -> Result<RestResponse, AppError> {
        self.send_request(Method::PUT, path, params).await
    }

    /// Makes a DELETE request
    pub async fn delete(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<RestResponse, AppError> {
        self.send_request(Method::DELETE, path, params).await
    }

    async fn send_request(
        &self,
        method: Method,
        path: &str,
        params: RequestParams,
    ) -> Result<RestResponse, AppError> {
        let full_url = format!("{}{}", self.host, path);

        let mut headers = self.session.headers().await;
        for (name, value) in parse_headers(params.headers().iter().cloned())?.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let mut builder = self
            .session
            .http_client
            .request(method.clone(), &full_url)
            .headers(headers);
        if !params.query().is_empty() {
            builder = builder.query(params.query());
        }
        if let Some(body) = params.json() {
            builder = builder.json(body);
        }
        let request = builder.build()?;

        if self.disable_log {
            let response = self.session.http_client.execute(request).await?;
            return read_response(response).await;
        }

        let event_id = get_id().unwrap_or_default();
        info!(
            parent: &self.span,
            event_id = %event_id,
            method = %method,
            full_url = %full_url,
            params = ?params.query(),
            headers = ?params.headers(),
            json = ?params.json(),
            "Request"
        );
        let curl = to_curl(&request);

        let result = read_response(self.session.http_client.execute(request).await?).await;
        info!(parent: &self.span, event_id = %event_id, curl = %curl, "cURL");
        match &result {
            Ok(response) => {
                let response_json = response.json_or_empty();
                info!(
                    parent: &self.span,
                    event_id = %event_id,
                    status_code = response.status.as_u16(),
                    headers = ?response.headers,
                    json = %response_json,
                    "Response"
                );
            }
            Err(AppError::Http(e)) => {
                let error_json = json_or_empty(&e.body);
                error!(
                    parent: &self.span,
                    event_id = %event_id,
                    status_code = e.status.as_u16(),
                    json = %error_json,
                    "Response"
                );
            }
            Err(_) => {}
        }
        result
    }
}

fn json_or_empty(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Default::default()))
}

async fn read_response(response: reqwest::Response) -> Result<RestResponse, AppError> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(HttpError::new(status, body).into());
    }

    Ok(RestResponse {
        status,
        headers,
        body,
    })
}
