//! The upstream seam used by request handlers.

use async_trait::async_trait;
use forkcast_core::{CoordinateError, Restaurant, UserProfile};
use thiserror::Error;

/// Errors raised while fetching or decoding upstream data.
///
/// Every variant is fatal for the request that triggered it; callers do not
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The service could not be reached.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("{url} responded with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body was not the expected JSON shape.
    #[error("could not decode response from {url}: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder error description.
        message: String,
    },
    /// A request URL could not be derived from the configured base URL.
    #[error("cannot build a request URL from {url}")]
    InvalidUrl {
        /// Base URL that rejected the path segments.
        url: String,
    },
    /// The user service returned an empty array.
    #[error("user service returned no profile for user {user_id}")]
    EmptyProfile {
        /// Requested user.
        user_id: String,
    },
    /// The user's location is missing or malformed.
    #[error("profile for user {user_id} has an unusable location: {source}")]
    InvalidProfile {
        /// Requested user.
        user_id: String,
        /// Location parse failure.
        #[source]
        source: CoordinateError,
    },
}

/// Supply the user profile and restaurant catalog for one request.
///
/// Implementations must be shareable across concurrent requests.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use forkcast_core::{Coordinate, Restaurant, UserProfile};
/// use forkcast_data::{UpstreamError, UpstreamSource};
///
/// struct Fixed;
///
/// #[async_trait]
/// impl UpstreamSource for Fixed {
///     async fn user_profile(&self, _user_id: &str) -> Result<UserProfile, UpstreamError> {
///         Ok(UserProfile::from_cuisine_list(Coordinate::new(0.0, 0.0), "Pho"))
///     }
///
///     async fn catalog(&self) -> Result<Vec<Restaurant>, UpstreamError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Fetch the location and cuisine preferences for `user_id`.
    ///
    /// # Errors
    /// Returns [`UpstreamError`] when the service fails, answers with an
    /// empty array, or supplies an unusable location.
    async fn user_profile(&self, user_id: &str) -> Result<UserProfile, UpstreamError>;

    /// Fetch every restaurant in the catalog.
    ///
    /// # Errors
    /// Returns [`UpstreamError`] when the service fails or its response does
    /// not decode.
    async fn catalog(&self) -> Result<Vec<Restaurant>, UpstreamError>;
}
