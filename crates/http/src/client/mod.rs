//! Course catalog HTTP client

pub mod content;
pub mod error;
pub mod identity;
pub mod typed;

pub use error::{ClientError, ErrorKind};
pub use typed::{AuthenticatedCatalogClient, PublicCatalogClient, TypedClientBuilder};

/// Send a request and decode a successful JSON body.
///
/// Any received response maps to [`ClientError::ServerRejected`] on failure,
/// carrying the raw body (or the status line when the body is unreadable) as
/// message; callers refine the message for their endpoint.
pub(crate) async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let rejected = |message: String| ClientError::ServerRejected {
            status: status.as_u16(),
            message,
        };
        let body = response
            .text()
            .await
            .map_err(|e| rejected(format!("Invalid response body: {e}")))?;
        serde_json::from_str(&body).map_err(|e| rejected(format!("Invalid response body: {e}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.to_string()
        } else {
            body
        };
        Err(ClientError::ServerRejected {
            status: status.as_u16(),
            message,
        })
    }
}
