//! Caller-facing response projections.
//!
//! Flattened shapes the controller layer serializes directly. Derived from
//! one or more stored records and never persisted themselves.

use rust_decimal::Decimal;
use serde::Serialize;

use super::home::{HomeRecord, ListedHome, PropertyType};
use super::id::HomeId;
use super::user::{BuyerContact, RealtorContact};

/// One entry of a filtered listing: headline fields plus the first gallery
/// image flattened into `thumbnail`.
///
/// A home with an empty gallery lists with no thumbnail rather than
/// failing; the raw image list is never part of this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSummary {
    pub id: HomeId,
    pub address: String,
    pub city: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<ListedHome> for HomeSummary {
    fn from(listed: ListedHome) -> Self {
        let home = listed.home;
        Self {
            id: home.id,
            address: home.address,
            city: home.city,
            price: home.price,
            property_type: home.property_type,
            number_of_bedrooms: home.number_of_bedrooms,
            number_of_bathrooms: home.number_of_bathrooms,
            thumbnail: listed.thumbnail,
        }
    }
}

/// The detail view of a single listing: every gallery image in display
/// order plus the owning realtor's contact details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeDetails {
    pub id: HomeId,
    pub address: String,
    pub city: String,
    pub price: Decimal,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f32,
    pub land_size: f64,
    pub images: Vec<String>,
    pub realtor: RealtorContact,
}

impl From<HomeRecord> for HomeDetails {
    fn from(record: HomeRecord) -> Self {
        let home = record.home;
        Self {
            id: home.id,
            address: home.address,
            city: home.city,
            price: home.price,
            property_type: home.property_type,
            number_of_bedrooms: home.number_of_bedrooms,
            number_of_bathrooms: home.number_of_bathrooms,
            land_size: home.land_size,
            images: record.images,
            realtor: record.realtor,
        }
    }
}

/// One inquiry as shown to the listing's realtor: the message text plus
/// the sending buyer's contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquirySummary {
    pub message: String,
    pub buyer: BuyerContact,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::home::Home;
    use crate::domain::id::UserId;

    fn sample_home() -> Home {
        Home {
            id: HomeId::new(1),
            address: "12 Pine Ct".to_string(),
            city: "Boise".to_string(),
            price: dec!(315_000),
            property_type: PropertyType::Residential,
            number_of_bedrooms: 3,
            number_of_bathrooms: 2.0,
            land_size: 4800.0,
            realtor_id: UserId::new(9),
            listed_at: Utc::now(),
        }
    }

    #[test]
    fn summary_flattens_first_image() {
        let summary = HomeSummary::from(ListedHome {
            home: sample_home(),
            thumbnail: Some("https://img.test/front.jpg".to_string()),
        });

        assert_eq!(summary.thumbnail.as_deref(), Some("https://img.test/front.jpg"));
        assert_eq!(summary.city, "Boise");
    }

    #[test]
    fn summary_shape_has_no_images_list() {
        let summary = HomeSummary::from(ListedHome {
            home: sample_home(),
            thumbnail: Some("https://img.test/front.jpg".to_string()),
        });

        let json = serde_json::to_value(&summary).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("thumbnail"));
        assert!(!object.contains_key("images"));
        assert!(!object.contains_key("land_size"));
    }

    #[test]
    fn summary_omits_missing_thumbnail() {
        let summary = HomeSummary::from(ListedHome {
            home: sample_home(),
            thumbnail: None,
        });

        let json = serde_json::to_value(&summary).unwrap();
        assert!(!json.as_object().unwrap().contains_key("thumbnail"));
    }

    #[test]
    fn details_keep_gallery_order() {
        let details = HomeDetails::from(HomeRecord {
            home: sample_home(),
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            realtor: RealtorContact {
                id: UserId::new(9),
                name: "Laura Vance".to_string(),
                email: "laura@vancerealty.test".to_string(),
                phone: "555-0101".to_string(),
            },
        });

        assert_eq!(details.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(details.realtor.name, "Laura Vance");
    }
}
