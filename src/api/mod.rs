//! Optional AdMob API client bootstrap.
//!
//! The client is never needed for a run. Missing key or a client that fails to
//! build leaves the run in local simulation mode.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue};

/// Base URL of the AdMob management API
pub const ADMOB_API_BASE: &str = "https://admob.googleapis.com/v1";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configured AdMob API client. No request is sent while bootstrapping.
#[derive(Clone)]
pub struct AdmobClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdmobClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint listing the publisher accounts visible to the key
    pub fn accounts_url(&self) -> String {
        format!("{}/accounts", self.base_url)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl fmt::Debug for AdmobClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdmobClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Best-effort construction of the external API client.
pub trait ApiBootstrap {
    fn try_initialize(&self, api_key: Option<&str>) -> Option<AdmobClient>;
}

/// Builds an `AdmobClient` with reqwest.
#[derive(Debug, Clone)]
pub struct AdmobBootstrap {
    base_url: String,
}

impl AdmobBootstrap {
    pub fn new() -> Self {
        Self::with_base_url(ADMOB_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build(&self, api_key: &str) -> Result<AdmobClient, String> {
        let mut key = HeaderValue::from_str(api_key).map_err(|e| format!("invalid API key: {}", e))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| e.to_string())?;

        Ok(AdmobClient {
            http,
            base_url: self.base_url.clone(),
        })
    }
}

impl Default for AdmobBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiBootstrap for AdmobBootstrap {
    fn try_initialize(&self, api_key: Option<&str>) -> Option<AdmobClient> {
        let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
            log::info!("GOOGLE_API_KEY not set, running in local simulation mode");
            return None;
        };

        match self.build(key) {
            Ok(client) => {
                log::info!("AdMob API client ready ({})", client.base_url());
                Some(client)
            }
            Err(e) => {
                log::warn!("Could not initialize the AdMob API client: {}", e);
                log::info!("Continuing in local simulation mode");
                None
            }
        }
    }
}

/// Bootstrap that never produces a client.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBootstrap;

impl ApiBootstrap for OfflineBootstrap {
    fn try_initialize(&self, _api_key: Option<&str>) -> Option<AdmobClient> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_means_no_client() {
        let bootstrap = AdmobBootstrap::new();
        assert!(bootstrap.try_initialize(None).is_none());
        assert!(bootstrap.try_initialize(Some("   ")).is_none());
    }

    #[test]
    fn test_valid_key_builds_client() {
        let client = AdmobBootstrap::new().try_initialize(Some("AIza-test-key")).unwrap();
        assert_eq!(client.base_url(), ADMOB_API_BASE);
        assert_eq!(client.accounts_url(), "https://admob.googleapis.com/v1/accounts");
    }

    #[test]
    fn test_invalid_key_is_not_fatal() {
        let bootstrap = AdmobBootstrap::new();
        assert!(bootstrap.try_initialize(Some("bad\nkey")).is_none());
    }

    #[test]
    fn test_custom_base_url_trims_slash() {
        let client = AdmobBootstrap::with_base_url("http://localhost:8080/")
            .try_initialize(Some("k"))
            .unwrap();
        assert_eq!(client.accounts_url(), "http://localhost:8080/accounts");
    }

    #[test]
    fn test_debug_hides_client_internals() {
        let client = AdmobBootstrap::new().try_initialize(Some("secret")).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_offline_bootstrap() {
        assert!(OfflineBootstrap.try_initialize(Some("key")).is_none());
    }
}
