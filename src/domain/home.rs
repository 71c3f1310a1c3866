//! Home listing types: the stored entity, creation/update payloads, and
//! the query predicate used for filtered listings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{HomeId, UserId};
use super::user::RealtorContact;

/// Residential property kinds a listing can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Residential,
    Condo,
}

impl PropertyType {
    /// Get the storage representation of this property type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PropertyType::Residential => "RESIDENTIAL",
            PropertyType::Condo => "CONDO",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "RESIDENTIAL" => Ok(PropertyType::Residential),
            "CONDO" => Ok(PropertyType::Condo),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

/// A stored home listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Home {
    pub id: HomeId,
    pub address: String,
    pub city: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f32,
    /// Lot size in square feet.
    pub land_size: f64,
    /// The user responsible for this listing.
    pub realtor_id: UserId,
    pub listed_at: DateTime<Utc>,
}

/// Fields for creating a listing.
///
/// The owning realtor and the listing timestamp are supplied by the
/// service and the store respectively, not by the caller payload.
#[derive(Debug, Clone)]
pub struct NewHome {
    pub address: String,
    pub city: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f32,
    pub land_size: f64,
    /// Gallery image URLs, in display order.
    pub images: Vec<String>,
}

/// A partial update to a listing. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct HomePatch {
    pub address: Option<String>,
    pub city: Option<String>,
    pub price: Option<Decimal>,
    pub property_type: Option<PropertyType>,
    pub number_of_bedrooms: Option<i32>,
    pub number_of_bathrooms: Option<f32>,
    pub land_size: Option<f64>,
}

impl HomePatch {
    /// Whether the patch names no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.city.is_none()
            && self.price.is_none()
            && self.property_type.is_none()
            && self.number_of_bedrooms.is_none()
            && self.number_of_bathrooms.is_none()
            && self.land_size.is_none()
    }
}

/// Inclusive price bounds. An unset bound imposes no constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

/// Listing query predicate. Unset fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct HomeFilter {
    /// Exact-match city name.
    pub city: Option<String>,
    pub price: Option<PriceRange>,
    pub property_type: Option<PropertyType>,
}

/// A listing as returned by the list-mode query: the home plus its
/// first-inserted gallery image, when one exists.
#[derive(Debug, Clone)]
pub struct ListedHome {
    pub home: Home,
    pub thumbnail: Option<String>,
}

/// A listing as returned by the detail query: the home plus its full
/// ordered gallery and the owning realtor's contact details.
#[derive(Debug, Clone)]
pub struct HomeRecord {
    pub home: Home,
    /// Gallery URLs in display (insertion) order.
    pub images: Vec<String>,
    pub realtor: RealtorContact,
}
