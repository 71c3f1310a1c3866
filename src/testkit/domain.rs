//! Builders for domain values used across tests.
//!
//! Provides concise factory functions for listings and filters so tests
//! focus on assertions rather than construction boilerplate.

use rust_decimal_macros::dec;

use crate::domain::{HomeFilter, NewHome, PriceRange, PropertyType};

/// A three-bed residential listing in Portland with a two-image gallery.
pub fn craftsman() -> NewHome {
    NewHome {
        address: "714 SE Maple St".to_string(),
        city: "Portland".to_string(),
        price: dec!(450_000),
        property_type: PropertyType::Residential,
        number_of_bedrooms: 3,
        number_of_bathrooms: 2.0,
        land_size: 5200.0,
        images: vec![
            "https://img.test/714-front.jpg".to_string(),
            "https://img.test/714-kitchen.jpg".to_string(),
        ],
    }
}

/// A one-bed condo listing in Seattle with a single-image gallery.
pub fn condo() -> NewHome {
    NewHome {
        address: "509 Pike St #1204".to_string(),
        city: "Seattle".to_string(),
        price: dec!(325_000),
        property_type: PropertyType::Condo,
        number_of_bedrooms: 1,
        number_of_bathrooms: 1.0,
        land_size: 0.0,
        images: vec!["https://img.test/509-view.jpg".to_string()],
    }
}

/// A residential listing with an empty gallery.
pub fn bare_lot() -> NewHome {
    NewHome {
        address: "Lot 4, Quarry Rd".to_string(),
        city: "Bend".to_string(),
        price: dec!(120_000),
        property_type: PropertyType::Residential,
        number_of_bedrooms: 0,
        number_of_bathrooms: 0.0,
        land_size: 21_000.0,
        images: vec![],
    }
}

/// Filter matching a single city.
pub fn city_filter(city: &str) -> HomeFilter {
    HomeFilter {
        city: Some(city.to_string()),
        ..HomeFilter::default()
    }
}

/// Filter with inclusive price bounds.
pub fn price_filter(min: rust_decimal::Decimal, max: rust_decimal::Decimal) -> HomeFilter {
    HomeFilter {
        price: Some(PriceRange {
            min: Some(min),
            max: Some(max),
        }),
        ..HomeFilter::default()
    }
}
