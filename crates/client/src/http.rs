//! The configured HTTP client and its interception chain.
//!
//! Base address, timeout, and the JSON content type are fixed when the
//! client is built. Before dispatch every request reads the token store and
//! attaches a bearer credential when one is present; an absent token is not
//! an error. On the way back, success bodies pass through untouched and
//! every failure is normalized into a single [`ApiError`] shape:
//!
//! - no response at all (DNS, refused, timeout): `status = 0`,
//!   `error = "Network Error"`, fixed user-facing message;
//! - 401: clears the stored token and publishes a login redirect, then
//!   still falls through to the generic construction below, so the caller
//!   always receives a rejection;
//! - 5xx: the fixed internal-error message regardless of body content;
//! - anything else: the server-supplied message when present, generic
//!   fallback otherwise.
//!
//! One attempt per call. No retries, no backoff, no caching.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use common::TokenStore;
use models::errors::{FALLBACK_ERROR_MESSAGE, INTERNAL_ERROR_MESSAGE, UNKNOWN_ERROR_LABEL};
use models::ApiError;

use crate::session::SessionEvents;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<TokenStore>,
    session: SessionEvents,
}

/// Best-effort view of the backend's error body. Undecodable bodies count
/// as "no server-supplied fields".
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    message: Option<String>,
}

impl ApiClient {
    /// Build the single configured client. Construction happens once at
    /// process start; nothing here is runtime-reconfigurable.
    pub fn new(cfg: &configs::ApiConfig, tokens: Arc<TokenStore>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            tokens,
            session: SessionEvents::new(),
        })
    }

    /// Session signals (login redirects) published by the interceptor.
    pub fn session(&self) -> &SessionEvents {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let req = self.authorize(self.http.get(&url));
        self.dispatch_json(req, &url).await
    }

    pub(crate) async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let req = self.authorize(self.http.get(&url).query(query));
        self.dispatch_json(req, &url).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let req = self.authorize(self.http.post(&url).json(body));
        self.dispatch_json(req, &url).await
    }

    /// POST with query parameters and an empty body; the backend answers
    /// these with a plain text message.
    pub(crate) async fn post_query<Q>(&self, path: &str, query: &Q) -> Result<String, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let req = self.authorize(self.http.post(&url).query(query));
        self.dispatch_text(req, &url).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let req = self.authorize(self.http.put(&url).json(body));
        self.dispatch_json(req, &url).await
    }

    pub(crate) async fn put_query<Q>(&self, path: &str, query: &Q) -> Result<String, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let req = self.authorize(self.http.put(&url).query(query));
        self.dispatch_text(req, &url).await
    }

    pub(crate) async fn delete_text(&self, path: &str) -> Result<String, ApiError> {
        let url = self.url(path);
        let req = self.authorize(self.http.delete(&url));
        self.dispatch_text(req, &url).await
    }

    async fn dispatch_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let resp = self.send(req, url).await?;
        let status = resp.status();
        resp.json::<T>().await.map_err(|e| {
            warn!(%url, error = %e, "response body did not decode");
            ApiError {
                timestamp: Utc::now(),
                status: status.as_u16(),
                error: UNKNOWN_ERROR_LABEL.to_string(),
                message: format!("failed to decode response body: {e}"),
                path: url.to_string(),
            }
        })
    }

    async fn dispatch_text(&self, req: RequestBuilder, url: &str) -> Result<String, ApiError> {
        let resp = self.send(req, url).await?;
        // Plain-text endpoints; an unreadable body degrades to empty.
        Ok(resp.text().await.unwrap_or_default())
    }

    /// Send one request and run the response interceptor. Success responses
    /// pass through unchanged; everything else comes back as `ApiError`.
    async fn send(&self, req: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        debug!(%url, "dispatching request");
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%url, error = %e, "no response from server");
                return Err(ApiError::network(url));
            }
        };
        if resp.status().is_success() {
            return Ok(resp);
        }
        Err(self.normalize(resp, url).await)
    }

    async fn normalize(&self, resp: Response, url: &str) -> ApiError {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            // Side effects first; the call still rejects below.
            if let Err(e) = self.tokens.clear() {
                warn!(error = %e, "could not clear stored token");
            }
            self.session.redirect_to_login();
            debug!(%url, "401 received; token cleared, login redirect published");
        }

        let body: ErrorEnvelope = resp.json().await.unwrap_or_default();
        let message = if status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            body.message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
        };
        let err = ApiError {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: body.error.unwrap_or_else(|| UNKNOWN_ERROR_LABEL.to_string()),
            message,
            path: url.to_string(),
        };
        warn!(status = err.status, error = %err.error, %url, "request failed");
        err
    }
}
