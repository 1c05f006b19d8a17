//! HTTP-backed [`UpstreamSource`] over the user and catalog services.

use std::time::Duration;

use async_trait::async_trait;
use forkcast_core::{Restaurant, UserProfile};
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::wire::{RestaurantRecord, UserRecord, profile_from_records};
use super::{UpstreamError, UpstreamSource};

/// Default user agent for upstream requests.
pub const DEFAULT_USER_AGENT: &str = "forkcast-upstream/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const PROFILE_ENDPOINT: &str = "GetUserAddressesAndDefaultCuisine";
const CATALOG_ENDPOINT: &str = "GeoLocation";

/// Error type for [`HttpUpstreamSource`] construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// A configured base URL did not parse.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidUrl {
        /// The configured value.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// A configured base URL cannot carry path segments, e.g. `mailto:`.
    #[error("base URL {url:?} cannot have path segments appended")]
    CannotBeABase {
        /// The configured value.
        url: String,
    },
}

/// Configuration for [`HttpUpstreamSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpUpstreamConfig {
    /// Base URL of the user service (e.g. `"http://localhost:5110/api/Patron"`).
    pub user_service_url: String,
    /// Base URL of the catalog service (e.g. `"http://localhost:5110/api/Meals"`).
    pub catalog_service_url: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpUpstreamConfig {
    fn default() -> Self {
        Self {
            user_service_url: "http://localhost:5110/api/Patron".to_owned(),
            catalog_service_url: "http://localhost:5110/api/Meals".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpUpstreamConfig {
    /// Create a configuration for the given service base URLs.
    #[must_use]
    pub fn new(user_service_url: impl Into<String>, catalog_service_url: impl Into<String>) -> Self {
        Self {
            user_service_url: user_service_url.into(),
            catalog_service_url: catalog_service_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Fetches profiles and the catalog over HTTP with a shared `reqwest` client.
///
/// Requests are never retried. Transport failures, timeouts, non-success
/// statuses, and undecodable bodies all surface as [`UpstreamError`].
#[derive(Debug, Clone)]
pub struct HttpUpstreamSource {
    client: Client,
    user_base: Url,
    catalog_url: Url,
    timeout: Duration,
}

impl HttpUpstreamSource {
    /// Create a source with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if either URL is unusable or the HTTP client fails
    /// to build.
    pub fn new(
        user_service_url: impl Into<String>,
        catalog_service_url: impl Into<String>,
    ) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpUpstreamConfig::new(
            user_service_url,
            catalog_service_url,
        ))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either URL is unusable or the HTTP client fails
    /// to build.
    pub fn with_config(config: HttpUpstreamConfig) -> Result<Self, ClientBuildError> {
        let user_base = parse_base(&config.user_service_url)?;
        let catalog_base = parse_base(&config.catalog_service_url)?;
        let catalog_url = append_segments(&catalog_base, &[CATALOG_ENDPOINT]).ok_or_else(|| {
            ClientBuildError::CannotBeABase {
                url: config.catalog_service_url.clone(),
            }
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        Ok(Self {
            client,
            user_base,
            catalog_url,
            timeout: config.timeout,
        })
    }

    /// URL of the profile endpoint for `user_id`.
    ///
    /// The id is percent-encoded as a single path segment.
    fn profile_url(&self, user_id: &str) -> Result<Url, UpstreamError> {
        append_segments(&self.user_base, &[PROFILE_ENDPOINT, user_id]).ok_or_else(|| {
            UpstreamError::InvalidUrl {
                url: self.user_base.to_string(),
            }
        })
    }

    /// GET `url` and decode a JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        serde_json::from_slice(&body).map_err(|err| {
            warn!("undecodable response from {url}: {err}");
            UpstreamError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            }
        })
    }

    /// Convert a reqwest error to an `UpstreamError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> UpstreamError {
        warn!("upstream request to {url} failed: {error}");
        let url = url.to_string();
        if error.is_timeout() {
            return UpstreamError::Timeout {
                url,
                timeout_secs: self.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return UpstreamError::Http {
                url,
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        if error.is_decode() {
            return UpstreamError::Decode {
                url,
                message: error.to_string(),
            };
        }

        UpstreamError::Network {
            url,
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl UpstreamSource for HttpUpstreamSource {
    async fn user_profile(&self, user_id: &str) -> Result<UserProfile, UpstreamError> {
        let url = self.profile_url(user_id)?;
        let records: Vec<UserRecord> = self.fetch_json(&url).await?;
        let profile = profile_from_records(records, user_id)?;
        debug!(
            "fetched profile for user {user_id}: {} cuisine(s)",
            profile.cuisines().len()
        );
        Ok(profile)
    }

    async fn catalog(&self) -> Result<Vec<Restaurant>, UpstreamError> {
        let records: Vec<RestaurantRecord> = self.fetch_json(&self.catalog_url).await?;
        debug!("fetched catalog with {} restaurant(s)", records.len());
        Ok(records.into_iter().map(Restaurant::from).collect())
    }
}

fn parse_base(raw: &str) -> Result<Url, ClientBuildError> {
    let url = Url::parse(raw).map_err(|source| ClientBuildError::InvalidUrl {
        url: raw.to_owned(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientBuildError::CannotBeABase {
            url: raw.to_owned(),
        });
    }
    Ok(url)
}

/// Append path segments to `base`, dropping a trailing empty segment first.
///
/// Returns `None` when `base` cannot carry path segments.
fn append_segments(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn source(user: &str, catalog: &str) -> HttpUpstreamSource {
        HttpUpstreamSource::new(user, catalog).expect("source should build")
    }

    #[rstest]
    #[case("http://localhost:5110/api/Patron")]
    #[case("http://localhost:5110/api/Patron/")]
    fn profile_url_appends_endpoint_and_id(#[case] base: &str) {
        let upstream = source(base, "http://localhost:5110/api/Meals");

        let url = upstream.profile_url("42").expect("profile URL");

        assert_eq!(
            url.as_str(),
            "http://localhost:5110/api/Patron/GetUserAddressesAndDefaultCuisine/42"
        );
    }

    #[rstest]
    fn profile_url_percent_encodes_user_id() {
        let upstream = source("http://users.example", "http://meals.example");

        let url = upstream.profile_url("a/b c?").expect("profile URL");

        assert_eq!(
            url.as_str(),
            "http://users.example/GetUserAddressesAndDefaultCuisine/a%2Fb%20c%3F"
        );
    }

    #[rstest]
    #[case("http://localhost:5110/api/Meals")]
    #[case("http://localhost:5110/api/Meals/")]
    fn catalog_url_is_fixed_at_construction(#[case] base: &str) {
        let upstream = source("http://localhost:5110/api/Patron", base);

        assert_eq!(
            upstream.catalog_url.as_str(),
            "http://localhost:5110/api/Meals/GeoLocation"
        );
    }

    #[rstest]
    fn rejects_unparseable_base_url() {
        let err = HttpUpstreamSource::new("not a url", "http://meals.example")
            .expect_err("should fail");

        assert!(matches!(err, ClientBuildError::InvalidUrl { .. }));
    }

    #[rstest]
    fn rejects_base_url_without_path() {
        let err = HttpUpstreamSource::new("http://users.example", "mailto:meals@example.com")
            .expect_err("should fail");

        assert!(matches!(err, ClientBuildError::CannotBeABase { .. }));
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpUpstreamConfig::new("http://users.example", "http://meals.example")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.user_service_url, "http://users.example");
        assert_eq!(config.catalog_service_url, "http://meals.example");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn default_config_targets_local_services() {
        let config = HttpUpstreamConfig::default();

        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.user_service_url.ends_with("/api/Patron"));
        assert!(config.catalog_service_url.ends_with("/api/Meals"));
    }
}
