//! User identity and contact types.
//!
//! Users are owned by an external account module; this crate only reads
//! realtor and buyer contact details and accepts caller-resolved
//! identities.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// Caller-supplied identity of the acting user.
///
/// Produced by the external auth layer and trusted as-is; this crate
/// performs no authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub name: String,
}

/// Contact details for the realtor responsible for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealtorContact {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Contact details for a buyer who sent an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}
