//! Database model types for Diesel ORM.

use diesel::prelude::*;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::schema::{homes, images, messages, users};

/// Convert a decimal price to f64 for storage.
#[must_use]
pub fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Convert a stored f64 price back to a Decimal.
#[must_use]
pub fn f64_to_decimal(f: f64) -> Decimal {
    Decimal::from_f64(f).unwrap_or(Decimal::ZERO)
}

/// Database row for a home (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = homes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HomeRow {
    pub id: i32,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub property_type: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f32,
    pub land_size: f64,
    pub realtor_id: i32,
    pub listed_at: String,
}

/// Database row for a home (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = homes)]
pub struct NewHomeRow {
    pub address: String,
    pub city: String,
    pub price: f64,
    pub property_type: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f32,
    pub land_size: f64,
    pub realtor_id: i32,
    pub listed_at: String,
}

/// Partial changeset for a home update. `None` fields are left untouched.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = homes)]
pub struct HomeChangeset {
    pub address: Option<String>,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub property_type: Option<String>,
    pub number_of_bedrooms: Option<i32>,
    pub number_of_bathrooms: Option<f32>,
    pub land_size: Option<f64>,
}

/// Database row for a gallery image (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = images)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ImageRow {
    pub id: i32,
    pub url: String,
    pub home_id: i32,
}

/// Database row for a gallery image (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = images)]
pub struct NewImageRow {
    pub url: String,
    pub home_id: i32,
}

/// Database row for an inquiry message (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MessageRow {
    pub id: i32,
    pub body: String,
    pub home_id: i32,
    pub realtor_id: i32,
    pub buyer_id: i32,
    pub sent_at: String,
}

/// Database row for an inquiry message (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    pub body: String,
    pub home_id: i32,
    pub realtor_id: i32,
    pub buyer_id: i32,
    pub sent_at: String,
}

/// Database row for a user (queryable). Users are owned by the external
/// account module; this crate never inserts or mutates them.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}
