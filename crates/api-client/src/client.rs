use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{normalize_base_url, AppConfig};

use crate::error::ClientError;

/// Thin JSON-over-HTTP client for the PubCash backend.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.as_ref()),
            token: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api.base_url)
    }

    /// Attach (or drop) the bearer token sent with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<T, ClientError> {
        let response = builder.send().await.map_err(|source| {
            tracing::warn!(path, error = %source, "api request failed");
            ClientError::Transport {
                path: path.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), "api returned error status");
            return Err(ClientError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|source| {
            tracing::warn!(path, error = %source, "api response did not decode");
            ClientError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(method = "GET", path, "api request");
        self.send(self.request(Method::GET, path), path).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        tracing::debug!(method = "POST", path, "api request");
        self.send(self.request(Method::POST, path).json(body), path)
            .await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        tracing::debug!(method = "PUT", path, "api request");
        self.send(self.request(Method::PUT, path).json(body), path)
            .await
    }
}
