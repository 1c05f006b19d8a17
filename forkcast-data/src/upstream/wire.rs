//! JSON shapes returned by the user and catalog services.
//!
//! Unknown fields are ignored. Collections that the catalog service omits or
//! sends as `null` decode as empty. Restaurant addresses are read loosely: a
//! location of the wrong JSON type is kept as unparseable text so the scan
//! skips that restaurant instead of the whole catalog failing to decode.

use forkcast_core::{
    CoordinateError, Identifier, Menu, MenuItem, Price, Restaurant, UserProfile,
    parse_coordinate,
};
use serde::Deserialize;
use serde_json::Value;

use super::UpstreamError;

/// One element of the user service's profile array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRecord {
    #[serde(default)]
    pub(crate) geo_location: Option<String>,
    #[serde(default)]
    pub(crate) default_cuisine: Option<String>,
}

/// Build a profile from the first element of the user service's answer.
pub(crate) fn profile_from_records(
    records: Vec<UserRecord>,
    user_id: &str,
) -> Result<UserProfile, UpstreamError> {
    let Some(record) = records.into_iter().next() else {
        return Err(UpstreamError::EmptyProfile {
            user_id: user_id.to_owned(),
        });
    };
    let coordinate = record
        .geo_location
        .as_deref()
        .ok_or(CoordinateError::Missing)
        .and_then(parse_coordinate)
        .map_err(|source| UpstreamError::InvalidProfile {
            user_id: user_id.to_owned(),
            source,
        })?;
    Ok(UserProfile::from_cuisine_list(
        coordinate,
        record.default_cuisine.as_deref().unwrap_or_default(),
    ))
}

#[derive(Debug, Deserialize)]
pub(crate) struct RestaurantRecord {
    user_id: Identifier,
    user_name: String,
    #[serde(default)]
    address: Option<Value>,
    #[serde(default)]
    menus: Option<Vec<MenuRecord>>,
}

/// Raw `geoLocation` text from an address of any shape.
fn raw_location(address: Option<&Value>) -> Option<String> {
    match address?.get("geoLocation")? {
        Value::Null => None,
        Value::String(raw) => Some(raw.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct MenuRecord {
    menu_id: Identifier,
    menu_name: String,
    #[serde(default)]
    menu_items: Option<Vec<ItemRecord>>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    item_id: Identifier,
    item_name: String,
    price: Price,
}

impl From<RestaurantRecord> for Restaurant {
    fn from(record: RestaurantRecord) -> Self {
        let geo_location = raw_location(record.address.as_ref());
        record
            .menus
            .unwrap_or_default()
            .into_iter()
            .map(Menu::from)
            .fold(
                Self::new(record.user_id, record.user_name, geo_location),
                Self::with_menu,
            )
    }
}

impl From<MenuRecord> for Menu {
    fn from(record: MenuRecord) -> Self {
        let items = record
            .menu_items
            .unwrap_or_default()
            .into_iter()
            .map(|item| MenuItem::new(item.item_id, item.item_name, item.price))
            .collect();
        Self::new(record.menu_id, record.menu_name, items)
    }
}
