//! Catalog configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Session configuration
pub struct SessionConfig;

impl SessionConfig {
    /// Local storage key holding the raw session token
    pub const TOKEN_STORAGE_KEY: &'static str = "jwt";

    /// Display name used whenever the current user's name is unavailable
    pub const FALLBACK_USER_NAME: &'static str = "User";
}

/// Location of the headless content API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:1337";

    /// Create a config for the given host, e.g. `https://cms.example.com`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the config from an optional build-time value.
    ///
    /// Frontend binaries pass `option_env!("CATALOG_API_URL")`; an unset or
    /// blank value selects [`Self::DEFAULT_BASE_URL`].
    pub fn resolve(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    /// Absolute URL of a resource below `/api`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_cms() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:1337");
        assert_eq!(
            config.api_url("courses?populate=*"),
            "http://localhost:1337/api/courses?populate=*"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ApiConfig::new("https://cms.example.com/").unwrap();
        assert_eq!(config.base_url, "https://cms.example.com");
        assert_eq!(config.api_url("/users/me"), "https://cms.example.com/api/users/me");
    }

    #[test]
    fn test_new_rejects_garbage() {
        assert!(matches!(ApiConfig::new("not a url"), Err(Error::InvalidUrl(_))));
        assert!(matches!(
            ApiConfig::new("ftp://cms.example.com"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(ApiConfig::resolve(None).unwrap(), ApiConfig::default());
        assert_eq!(ApiConfig::resolve(Some("  ")).unwrap(), ApiConfig::default());
        assert_eq!(
            ApiConfig::resolve(Some("http://cms:1337")).unwrap().base_url,
            "http://cms:1337"
        );
    }
}
