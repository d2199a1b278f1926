//! Authentication API service

use crate::client::{ClientError, create_public_client};
use catalog_core::SessionConfig;
use catalog_http::types::{AuthResponse, LoginData, RegistrationData};

/// Authentication API service
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub const fn new() -> Self {
        Self
    }

    /// Register a new account
    pub async fn register(&self, data: RegistrationData) -> Result<AuthResponse, ClientError> {
        let client = create_public_client()?;
        client.register(&data).await
    }

    /// Log in with a username or email and password
    pub async fn login(&self, data: LoginData) -> Result<AuthResponse, ClientError> {
        let client = create_public_client()?;
        client.login(&data).await
    }

    /// Display name for the navigation bar; never fails
    pub async fn current_user_name(&self, token: Option<String>) -> String {
        match create_public_client() {
            Ok(client) => client.fetch_current_user_name(token.as_deref()).await,
            Err(err) => {
                tracing::warn!("Failed to get client: {err}");
                SessionConfig::FALLBACK_USER_NAME.to_string()
            }
        }
    }
}
