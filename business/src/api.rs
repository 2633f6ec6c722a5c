//! Admin API client.
//!
//! Calls are callback based so the same code runs on native and wasm; the
//! callback fires on whatever thread the transport completes on. Callers
//! usually forward the result into a `flume` channel and drain it each frame.

use std::fmt;
use std::sync::Arc;

use ehttp::{Request, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::BusinessConfig;
use crate::error::{ApiError, ApiResult};
use crate::fetch_service::{EhttpFetcher, FetchService};

/// HTTP verbs used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    config: BusinessConfig,
    fetcher: Arc<dyn FetchService>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.config.api_url())
            .field("fetcher", &self.fetcher)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_fetcher(config, Arc::new(EhttpFetcher))
    }

    pub fn with_fetcher(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url())
    }

    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Request {
        let url = self.url(path);
        let mut request = Request {
            method: method.as_str().to_owned(),
            ..Request::get(&url)
        };
        if let Some(body) = body {
            request.body = body.to_string().into_bytes();
            request
                .headers
                .insert("Content-Type", "application/json");
        }
        if let Some(token) = self.config.auth_token() {
            request
                .headers
                .insert("Authorization", format!("Bearer {token}"));
        }
        request
    }

    /// GET `path` and decode the body as `T`.
    pub fn get_json<T, F>(&self, path: &str, on_done: F)
    where
        T: DeserializeOwned,
        F: FnOnce(ApiResult<T>) + Send + 'static,
    {
        let context = path.to_owned();
        self.send(Method::Get, path, None, move |result| {
            on_done(result.and_then(|value| {
                serde_json::from_value(value).map_err(|err| ApiError::decode(context, err))
            }))
        });
    }

    /// Sends a request and hands back the decoded JSON body.
    ///
    /// An empty body decodes as `Value::Null`.
    pub fn send<F>(&self, method: Method, path: &str, body: Option<Value>, on_done: F)
    where
        F: FnOnce(ApiResult<Value>) + Send + 'static,
    {
        let request = self.request(method, path, body.as_ref());
        debug!("{} {}", request.method, request.url);
        let context = path.to_owned();
        self.fetcher.fetch(
            request,
            Box::new(move |result| on_done(read_response(&context, result))),
        );
    }
}

fn read_response(context: &str, result: ehttp::Result<Response>) -> ApiResult<Value> {
    let response = result.map_err(|err| {
        warn!("Request to {context} failed: {err}");
        ApiError::Transport(err)
    })?;

    if !(200..300).contains(&response.status) {
        warn!("Request to {context} returned status {}", response.status);
        return Err(ApiError::Status(response.status));
    }

    if response.bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&response.bytes).map_err(|err| ApiError::decode(context, err))
}
