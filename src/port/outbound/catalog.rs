//! Persistence port for the listing catalog.

use std::future::Future;

use crate::domain::{
    BuyerContact, Home, HomeFilter, HomeId, HomePatch, HomeRecord, ListedHome, Message, NewHome,
    NewMessage, RealtorContact, UserId,
};
use crate::error::Result;

/// Storage operations for homes, their galleries, and inquiry messages.
///
/// The collaborator behind this trait owns all persistent state; the
/// service layer holds nothing beyond request-scoped values. Failures are
/// reported through the crate [`Result`]; the store performs no retries.
pub trait CatalogStore: Send + Sync {
    /// Find homes matching the filter, each paired with its first gallery
    /// image. Results come back in insertion order.
    fn find_homes(
        &self,
        filter: &HomeFilter,
    ) -> impl Future<Output = Result<Vec<ListedHome>>> + Send;

    /// Find one home by id with its full gallery and realtor contact.
    fn find_home(&self, id: HomeId) -> impl Future<Output = Result<Option<HomeRecord>>> + Send;

    /// Whether a home row exists for the given id.
    fn home_exists(&self, id: HomeId) -> impl Future<Output = Result<bool>> + Send;

    /// Insert a home and one image row per gallery URL in a single
    /// transaction. Returns the stored home.
    fn create_home(
        &self,
        home: &NewHome,
        realtor: UserId,
    ) -> impl Future<Output = Result<Home>> + Send;

    /// Apply a partial update to a home and return the updated row.
    ///
    /// A missing id surfaces as the store's own error, not a domain
    /// not-found; callers wanting the domain semantic check existence
    /// themselves.
    fn update_home(
        &self,
        id: HomeId,
        patch: &HomePatch,
    ) -> impl Future<Output = Result<Home>> + Send;

    /// Delete a home and its entire gallery in a single transaction.
    fn delete_home(&self, id: HomeId) -> impl Future<Output = Result<()>> + Send;

    /// Contact details of the realtor owning a home, if the home exists.
    fn find_realtor(
        &self,
        id: HomeId,
    ) -> impl Future<Output = Result<Option<RealtorContact>>> + Send;

    /// Insert one inquiry message. Returns the stored row.
    fn create_message(
        &self,
        message: &NewMessage,
    ) -> impl Future<Output = Result<Message>> + Send;

    /// All inquiry messages for a home in insertion order, each paired
    /// with the sending buyer's contact details.
    fn find_messages(
        &self,
        home_id: HomeId,
    ) -> impl Future<Output = Result<Vec<(Message, BuyerContact)>>> + Send;
}
