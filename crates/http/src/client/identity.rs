//! Identity API client methods

use super::{AuthenticatedCatalogClient, ClientError, PublicCatalogClient};
use crate::types::{AuthResponse, CurrentUser, ErrorBody, LoginData, RegistrationData};
use catalog_core::SessionConfig;
use reqwest::Method;

const REGISTER_FALLBACK: &str = "An unknown error occurred during registration.";
const LOGIN_FALLBACK: &str = "An unknown error occurred during login.";

/// Reduce an identity failure to the message the user should see
fn identity_error(err: ClientError, fallback: &str) -> ClientError {
    let message = match &err {
        ClientError::ServerRejected { message, .. } => ErrorBody::message_from(message),
        _ => None,
    }
    .unwrap_or_else(|| fallback.to_string());

    warn!(kind = ?err.kind(), status = ?err.status(), "Identity request failed: {err}");
    err.with_message(message)
}

impl PublicCatalogClient {
    /// Register a new account
    pub async fn register(&self, data: &RegistrationData) -> Result<AuthResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/local/register")
            .json(data);
        self.execute(request)
            .await
            .map_err(|err| identity_error(err, REGISTER_FALLBACK))
    }

    /// Exchange credentials for a session token
    pub async fn login(&self, data: &LoginData) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "/api/auth/local").json(data);
        self.execute(request)
            .await
            .map_err(|err| identity_error(err, LOGIN_FALLBACK))
    }

    /// Display name of the user owning `token`.
    ///
    /// Never fails: a missing token, a failed request or a nameless profile
    /// all yield [`SessionConfig::FALLBACK_USER_NAME`].
    pub async fn fetch_current_user_name(&self, token: Option<&str>) -> String {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return SessionConfig::FALLBACK_USER_NAME.to_string();
        };

        match self.clone().authenticate(token).current_user().await {
            Ok(user) => user
                .username
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| SessionConfig::FALLBACK_USER_NAME.to_string()),
            Err(err) => {
                warn!(kind = ?err.kind(), "Error fetching user name: {err}");
                SessionConfig::FALLBACK_USER_NAME.to_string()
            }
        }
    }
}

impl AuthenticatedCatalogClient {
    /// Profile of the authenticated user
    pub async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        let request = self.request(Method::GET, "/api/users/me");
        self.execute(request).await
    }
}
