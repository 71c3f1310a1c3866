//! Domain types for the listing catalog.
//!
//! Entities, query predicates, and the caller-facing response projections
//! derived from them. Nothing here touches infrastructure.

pub mod home;
pub mod id;
pub mod message;
pub mod user;
pub mod view;

// Core entities and predicates
pub use home::{
    Home, HomeFilter, HomePatch, HomeRecord, ListedHome, NewHome, PriceRange, PropertyType,
};
pub use id::{HomeId, MessageId, UserId};
pub use message::{Message, NewMessage};
pub use user::{BuyerContact, RealtorContact, UserIdentity};

// Response projections
pub use view::{HomeDetails, HomeSummary, InquirySummary};
