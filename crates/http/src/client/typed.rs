//! Type-safe API clients that enforce authentication requirements at compile time

use super::{ClientError, execute};
use catalog_core::ApiConfig;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const USER_AGENT: &str = concat!("catalog-client/", env!("CARGO_PKG_VERSION"));

/// Client for public endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicCatalogClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a session token
#[derive(Clone)]
pub struct AuthenticatedCatalogClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

impl PublicCatalogClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        TypedClientBuilder::new().base_url(base_url).build_public()
    }

    /// Create a public client for the configured API host
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(config.base_url.clone())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach a session token to get an authenticated client
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedCatalogClient {
        AuthenticatedCatalogClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedCatalogClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        TypedClientBuilder::new()
            .base_url(base_url)
            .build_authenticated(token)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the bearer token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }
}

impl std::fmt::Debug for AuthenticatedCatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedCatalogClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Debug)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub const fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout. Requests never time out unless this is set.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn validated_base_url(&mut self) -> Result<String, ClientError> {
        let base_url = self
            .base_url
            .take()
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        Ok(ApiConfig::new(base_url)?.base_url)
    }

    /// Build a public client
    pub fn build_public(mut self) -> Result<PublicCatalogClient, ClientError> {
        let base_url = self.validated_base_url()?;
        Ok(PublicCatalogClient {
            client: build_http_client(self.timeout)?,
            base_url,
        })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        mut self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedCatalogClient, ClientError> {
        let base_url = self.validated_base_url()?;
        Ok(AuthenticatedCatalogClient {
            client: build_http_client(self.timeout)?,
            base_url,
            token: token.into(),
        })
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
