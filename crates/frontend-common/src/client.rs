//! Client configuration and initialization

use catalog_core::ApiConfig;
pub use catalog_http::ClientError;
use catalog_http::client::PublicCatalogClient;
use once_cell::sync::OnceCell;

static API_CONFIG: OnceCell<ApiConfig> = OnceCell::new();
static PUBLIC_CLIENT: OnceCell<PublicCatalogClient> = OnceCell::new();

/// Set the API location. Only the first call has an effect; without a call
/// the default local CMS address is used.
pub fn configure_api(config: ApiConfig) {
    if API_CONFIG.set(config).is_err() {
        tracing::warn!("API already configured, ignoring new configuration");
    }
}

/// The API location in effect
pub fn api_config() -> &'static ApiConfig {
    API_CONFIG.get_or_init(ApiConfig::default)
}

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicCatalogClient, ClientError> {
    PUBLIC_CLIENT
        .get_or_try_init(|| PublicCatalogClient::from_config(api_config()))
        .cloned()
}
