//! Fetch user profiles and the restaurant catalog from HTTP services.
//!
//! Two collaborators back every request:
//!
//! - The user service answers
//!   `GET {user_service_url}/GetUserAddressesAndDefaultCuisine/{user_id}`
//!   with an array whose first element carries `geoLocation` and
//!   `defaultCuisine`.
//! - The catalog service answers `GET {catalog_service_url}/GeoLocation` with
//!   every restaurant, its address, and its menus.
//!
//! [`HttpUpstreamSource`] implements [`UpstreamSource`] over both.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use forkcast_data::{HttpUpstreamConfig, HttpUpstreamSource, UpstreamSource};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpUpstreamConfig::new(
//!     "http://localhost:5110/api/Patron",
//!     "http://localhost:5110/api/Meals",
//! )
//! .with_timeout(Duration::from_secs(10));
//! let source = HttpUpstreamSource::with_config(config)?;
//!
//! let profile = source.user_profile("42").await?;
//! let catalog = source.catalog().await?;
//! println!("{} cuisines, {} restaurants", profile.cuisines().len(), catalog.len());
//! # Ok(())
//! # }
//! ```

mod provider;
mod source;
mod wire;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use provider::{ClientBuildError, DEFAULT_USER_AGENT, HttpUpstreamConfig, HttpUpstreamSource};
pub use source::{UpstreamError, UpstreamSource};
