//! Home catalog service.
//!
//! The sole access point for reading and writing listing, gallery, and
//! inquiry data. Arguments arrive already validated and already shaped by
//! the controller layer; rows come back from the catalog store and leave
//! as response projections.
//!
//! Every method is one request-scoped unit of work. Errors from the store
//! propagate unchanged; the only failures minted here are the not-found
//! decisions documented per method.

use tracing::{debug, info};

use crate::domain::{
    HomeDetails, HomeFilter, HomeId, HomePatch, HomeSummary, InquirySummary, ListedHome, Message,
    NewHome, NewMessage, RealtorContact, UserId, UserIdentity,
};
use crate::error::{Error, Result};
use crate::port::outbound::CatalogStore;

/// Catalog operations exposed to the controller layer.
///
/// Holds no state of its own beyond the store handle. Identity arguments
/// (`realtor`, `buyer`) are caller-resolved and trusted; authorization is
/// the outer layer's concern.
pub struct HomeCatalogService<S> {
    store: S,
}

impl<S: CatalogStore> HomeCatalogService<S> {
    /// Create a new catalog service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List homes matching the filter, each flattened to its headline
    /// fields plus an optional thumbnail (the first gallery image).
    ///
    /// # Errors
    /// Returns [`Error::NoMatchingHomes`] when the filter matches nothing.
    /// An empty match is treated as a lookup miss rather than an empty
    /// page; the policy is uniform with the by-id lookups.
    pub async fn list_homes(&self, filter: &HomeFilter) -> Result<Vec<HomeSummary>> {
        let listed = self.store.find_homes(filter).await?;
        if listed.is_empty() {
            return Err(Error::NoMatchingHomes);
        }

        debug!(count = listed.len(), "Listed homes");
        Ok(listed.into_iter().map(HomeSummary::from).collect())
    }

    /// Fetch one home with its full ordered gallery and the owning
    /// realtor's contact details.
    ///
    /// # Errors
    /// Returns [`Error::HomeNotFound`] when no such listing exists.
    pub async fn get_home_by_id(&self, id: HomeId) -> Result<HomeDetails> {
        let record = self
            .store
            .find_home(id)
            .await?
            .ok_or(Error::HomeNotFound(id))?;

        Ok(HomeDetails::from(record))
    }

    /// Create a listing owned by the given realtor, together with its
    /// gallery, in one transactional write.
    ///
    /// The returned summary carries the first supplied image URL as its
    /// thumbnail; the gallery is not re-read from the store.
    pub async fn create_home(&self, home: NewHome, realtor: UserId) -> Result<HomeSummary> {
        let thumbnail = home.images.first().cloned();
        let stored = self.store.create_home(&home, realtor).await?;

        info!(id = %stored.id, realtor = %realtor, "Created listing");
        Ok(HomeSummary::from(ListedHome {
            home: stored,
            thumbnail,
        }))
    }

    /// Apply a partial update to a listing and return the updated row as
    /// a summary (without a thumbnail; the gallery is untouched and not
    /// re-read).
    ///
    /// # Errors
    /// No existence pre-check is performed: a missing id surfaces as the
    /// store's own failure ([`Error::Database`]), deliberately not
    /// normalized to [`Error::HomeNotFound`].
    pub async fn update_home_by_id(&self, id: HomeId, patch: &HomePatch) -> Result<HomeSummary> {
        let stored = self.store.update_home(id, patch).await?;

        info!(id = %id, "Updated listing");
        Ok(HomeSummary::from(ListedHome {
            home: stored,
            thumbnail: None,
        }))
    }

    /// Delete a listing and its entire gallery in one transactional
    /// write.
    ///
    /// # Errors
    /// Returns [`Error::HomeNotFound`] when no such listing exists.
    pub async fn delete_home_by_id(&self, id: HomeId) -> Result<()> {
        self.ensure_home_exists(id).await?;
        self.store.delete_home(id).await?;

        info!(id = %id, "Deleted listing");
        Ok(())
    }

    /// Contact details of the realtor responsible for a home.
    ///
    /// # Errors
    /// Returns [`Error::HomeNotFound`] when no such listing exists.
    pub async fn get_realtor_by_home_id(&self, id: HomeId) -> Result<RealtorContact> {
        self.store
            .find_realtor(id)
            .await?
            .ok_or(Error::HomeNotFound(id))
    }

    /// Record a buyer inquiry against a listing, addressed to the
    /// listing's realtor. Returns the stored message unprojected.
    ///
    /// # Errors
    /// Returns [`Error::HomeNotFound`] when no such listing exists
    /// (inherited from the realtor lookup).
    pub async fn inquire(
        &self,
        buyer: &UserIdentity,
        home_id: HomeId,
        body: impl Into<String>,
    ) -> Result<Message> {
        let realtor = self.get_realtor_by_home_id(home_id).await?;

        let message = self
            .store
            .create_message(&NewMessage {
                body: body.into(),
                home_id,
                realtor_id: realtor.id,
                buyer_id: buyer.id,
            })
            .await?;

        info!(home = %home_id, buyer = %buyer.id, "Recorded inquiry");
        Ok(message)
    }

    /// All inquiries for a listing, in arrival order, each with the
    /// sending buyer's contact details.
    ///
    /// # Errors
    /// Returns [`Error::HomeNotFound`] for a nonexistent home id - the
    /// same policy as every other by-id operation. An existing listing
    /// with no inquiries yields an empty list.
    pub async fn get_messages_by_home(&self, home_id: HomeId) -> Result<Vec<InquirySummary>> {
        self.ensure_home_exists(home_id).await?;

        let messages = self.store.find_messages(home_id).await?;
        Ok(messages
            .into_iter()
            .map(|(message, buyer)| InquirySummary {
                message: message.body,
                buyer,
            })
            .collect())
    }

    /// Assert a home row exists, else [`Error::HomeNotFound`].
    async fn ensure_home_exists(&self, id: HomeId) -> Result<()> {
        if self.store.home_exists(id).await? {
            Ok(())
        } else {
            Err(Error::HomeNotFound(id))
        }
    }
}
