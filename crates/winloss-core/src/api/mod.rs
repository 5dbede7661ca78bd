//! HTTP client for the analytics backend.
//!
//! Every request is addressed by a [`QueryKey`]: its rendered form
//! (`/path?sorted=params`) is appended to the configured base URL. The
//! client is stateless and never retries; caching and revalidation belong
//! to the [`query`](crate::query) layer.

pub mod endpoints;

use std::pin::pin;
use std::sync::Arc;

use futures::future::{Either, select};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use endpoints::{Dimension, InsightKind};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::query::QueryKey;

/// HTTP methods used by the analytics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Client bound to a single base URL. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for `key`.
    pub fn url(&self, key: &QueryKey) -> String {
        format!("{}{}", self.config.base_url, key)
    }

    /// `GET` the resource identified by `key` and decode it as `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<T, ApiError> {
        self.request::<(), T>(Method::Get, key, None).await
    }

    /// `POST` `body` as JSON to `key` and decode the response as `T`.
    pub async fn post<B, T>(&self, key: &QueryKey, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.request(Method::Post, key, Some(body)).await
    }

    /// Perform one request and normalize the outcome.
    pub async fn request<B, T>(
        &self,
        method: Method,
        key: &QueryKey,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(key);
        tracing::debug!(?method, %url, "api request");

        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        let request = build(builder, body)?;
        let response = self.send(request).await?;

        let status = response.status();
        let status_text = response.status_text();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode_response(status, &status_text, &text)
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let Some(timeout_ms) = self.config.request_timeout_ms else {
            return request.send().await.map_err(ApiError::from);
        };

        let send = pin!(request.send());
        let timeout = pin!(TimeoutFuture::new(timeout_ms));
        match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(ApiError::from),
            Either::Right(_) => Err(ApiError::Transport(format!(
                "request timed out after {timeout_ms} ms"
            ))),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

fn build<B: Serialize>(builder: RequestBuilder, body: Option<&B>) -> Result<Request, ApiError> {
    let builder = builder.header("Content-Type", "application/json");
    match body {
        Some(body) => builder.json(body).map_err(|e| ApiError::Encode(e.to_string())),
        None => builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string())),
    }
}

/// Turn a completed response into the caller's type.
///
/// Non-2xx statuses become [`ApiError::Http`]; a 2xx body that does not
/// parse as `T` becomes [`ApiError::Parse`].
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            status_text: status_text.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OverviewMetrics;

    #[test]
    fn test_url_joins_base_and_key() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8000/api/"));
        let key = QueryKey::new("/deals")
            .param("source", "Referral")
            .param("stage", "closedwon");
        assert_eq!(
            client.url(&key),
            "http://localhost:8000/api/deals?source=Referral&stage=closedwon"
        );
    }

    /// Requests only exist in a browser; this pins the build-then-send
    /// ownership path at compile time.
    #[test]
    fn test_built_request_is_sent_by_value() {
        async fn dispatch(client: &ApiClient, key: &QueryKey) -> Result<Response, ApiError> {
            let request = build::<()>(Request::get(&client.url(key)), None)?;
            client.send(request).await
        }
        let _ = dispatch;

        let client = ApiClient::new(ApiConfig::default().with_timeout(5_000));
        assert_eq!(client.config().request_timeout_ms, Some(5_000));
    }

    #[test]
    fn test_decode_success() {
        let body = r#"{"total_deals":175,"won_deals":80,"lost_deals":95,"win_rate":45.7,
            "total_revenue":4200000,"avg_deal_size":52500,"avg_cycle_won":48,"avg_cycle_lost":61}"#;
        let metrics: OverviewMetrics = decode_response(200, "OK", body).unwrap();
        assert_eq!(metrics.total_deals, 175);
    }

    #[test]
    fn test_decode_http_error_keeps_status() {
        let err = decode_response::<OverviewMetrics>(502, "Bad Gateway", "<html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                status_text: "Bad Gateway".to_string()
            }
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_bad_json_is_parse_error() {
        let err = decode_response::<OverviewMetrics>(200, "OK", "not json").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert_eq!(err.status(), None);
    }
}
