//! Buyer-to-realtor inquiry messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{HomeId, MessageId, UserId};

/// A stored inquiry message. Immutable once created; there is no update
/// or delete operation for messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub body: String,
    pub home_id: HomeId,
    pub realtor_id: UserId,
    pub buyer_id: UserId,
    pub sent_at: DateTime<Utc>,
}

/// Fields for creating an inquiry message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub body: String,
    pub home_id: HomeId,
    pub realtor_id: UserId,
    pub buyer_id: UserId,
}
