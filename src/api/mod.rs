//! REST Client
//!
//! Typed bindings to the site backend, organized by domain.
//! Every call resolves against the configured API base URL.

mod admin;
mod category;
mod company;
mod product;
mod question;


use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

/// Shared HTTP client bound to one API base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `path` is expected to start with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Public URL of an uploaded file, e.g. `kind = "product"`
    pub fn file_url(&self, kind: &str, server_filename: &str) -> String {
        self.url(&format!("/files/{}/{}", kind, encode_query_value(server_filename)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("[API] GET {}", url);
        let resp = self.http.get(&url).send().await?;
        let resp = checked(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<Response> {
        let url = self.url(path);
        log::debug!("[API] {} {}", method, url);
        let mut req = self.http.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        checked(resp).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T> {
        let resp = self.send(method, path, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and discard whatever body comes back
    async fn send_ignore_body<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<()> {
        self.send(method, path, body).await.map(|_| ())
    }
}

/// Turn non-2xx into `ApiError::Status`, keeping the body text for the log
async fn checked(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

/// Everything except RFC 3986 unreserved characters
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode a single query or path segment value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
