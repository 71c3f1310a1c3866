//! SQLite catalog store implementation.
//!
//! Persists home listings, gallery images, and inquiry messages using
//! SQLite and Diesel ORM. The two multi-step writes (create a home with
//! its gallery, delete a home with its gallery) each run inside a single
//! transaction so a listing and its images appear and disappear together.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::{debug, warn};

use crate::adapter::outbound::sqlite::database::connection::{
    configure_sqlite_connection, DbConn, DbPool,
};
use crate::adapter::outbound::sqlite::database::model::{
    decimal_to_f64, f64_to_decimal, HomeChangeset, HomeRow, ImageRow, MessageRow, NewHomeRow,
    NewImageRow, NewMessageRow, UserRow,
};
use crate::adapter::outbound::sqlite::database::schema::{homes, images, messages, users};
use crate::domain::{
    BuyerContact, Home, HomeFilter, HomeId, HomePatch, HomeRecord, ListedHome, Message, MessageId,
    NewHome, NewMessage, PropertyType, RealtorContact, UserId,
};
use crate::error::{Error, Result};
use crate::port::outbound::catalog::CatalogStore;

/// SQLite-backed catalog store.
///
/// Implements the [`CatalogStore`] trait for persistent storage of
/// listings and inquiries.
pub struct SqliteCatalogStore {
    /// Database connection pool.
    pool: DbPool,
}

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

impl SqliteCatalogStore {
    /// Create a new SQLite catalog store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    fn write_conn(&self) -> Result<DbConn> {
        let mut conn = self.conn()?;
        if let Err(e) = configure_sqlite_connection(&mut conn) {
            warn!(error = %e, "Failed to configure SQLite connection");
        }
        Ok(conn)
    }

    fn home_from_row(row: HomeRow) -> Result<Home> {
        let property_type: PropertyType = row.property_type.parse().map_err(Error::Parse)?;
        let listed_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.listed_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Home {
            id: HomeId::new(row.id),
            address: row.address,
            city: row.city,
            price: f64_to_decimal(row.price),
            property_type,
            number_of_bedrooms: row.number_of_bedrooms,
            number_of_bathrooms: row.number_of_bathrooms,
            land_size: row.land_size,
            realtor_id: UserId::new(row.realtor_id),
            listed_at,
        })
    }

    fn new_home_row(home: &NewHome, realtor: UserId) -> NewHomeRow {
        NewHomeRow {
            address: home.address.clone(),
            city: home.city.clone(),
            price: decimal_to_f64(home.price),
            property_type: home.property_type.as_str().to_string(),
            number_of_bedrooms: home.number_of_bedrooms,
            number_of_bathrooms: home.number_of_bathrooms,
            land_size: home.land_size,
            realtor_id: realtor.get(),
            listed_at: Utc::now().to_rfc3339(),
        }
    }

    fn changeset_from_patch(patch: &HomePatch) -> HomeChangeset {
        HomeChangeset {
            address: patch.address.clone(),
            city: patch.city.clone(),
            price: patch.price.map(decimal_to_f64),
            property_type: patch
                .property_type
                .map(|kind| kind.as_str().to_string()),
            number_of_bedrooms: patch.number_of_bedrooms,
            number_of_bathrooms: patch.number_of_bathrooms,
            land_size: patch.land_size,
        }
    }

    fn message_from_row(row: MessageRow) -> Result<Message> {
        let sent_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.sent_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Message {
            id: MessageId::new(row.id),
            body: row.body,
            home_id: HomeId::new(row.home_id),
            realtor_id: UserId::new(row.realtor_id),
            buyer_id: UserId::new(row.buyer_id),
            sent_at,
        })
    }

    fn realtor_from_row(row: UserRow) -> RealtorContact {
        RealtorContact {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }

    fn buyer_from_row(row: UserRow) -> BuyerContact {
        BuyerContact {
            name: row.name,
            phone: row.phone,
            email: row.email,
        }
    }
}

impl CatalogStore for SqliteCatalogStore {
    async fn find_homes(&self, filter: &HomeFilter) -> Result<Vec<ListedHome>> {
        let mut conn = self.conn()?;

        let mut query = homes::table.into_boxed();
        if let Some(city) = &filter.city {
            query = query.filter(homes::city.eq(city.as_str()));
        }
        if let Some(range) = &filter.price {
            if let Some(min) = range.min {
                query = query.filter(homes::price.ge(decimal_to_f64(min)));
            }
            if let Some(max) = range.max {
                query = query.filter(homes::price.le(decimal_to_f64(max)));
            }
        }
        if let Some(property_type) = filter.property_type {
            query = query.filter(homes::property_type.eq(property_type.as_str()));
        }

        let rows: Vec<HomeRow> = query
            .order(homes::id.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let image_rows: Vec<ImageRow> = images::table
            .filter(images::home_id.eq_any(&ids))
            .order(images::id.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        // First-inserted image per home wins.
        let mut thumbnails: HashMap<i32, String> = HashMap::new();
        for image in image_rows {
            thumbnails.entry(image.home_id).or_insert(image.url);
        }

        rows.into_iter()
            .map(|row| {
                let thumbnail = thumbnails.remove(&row.id);
                Ok(ListedHome {
                    home: Self::home_from_row(row)?,
                    thumbnail,
                })
            })
            .collect()
    }

    async fn find_home(&self, id: HomeId) -> Result<Option<HomeRecord>> {
        let mut conn = self.conn()?;

        let row: Option<HomeRow> = homes::table
            .find(id.get())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        let Some(row) = row else {
            return Ok(None);
        };

        let image_urls: Vec<String> = images::table
            .filter(images::home_id.eq(id.get()))
            .order(images::id.asc())
            .select(images::url)
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let realtor_row: UserRow = users::table
            .find(row.realtor_id)
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Some(HomeRecord {
            home: Self::home_from_row(row)?,
            images: image_urls,
            realtor: Self::realtor_from_row(realtor_row),
        }))
    }

    async fn home_exists(&self, id: HomeId) -> Result<bool> {
        let mut conn = self.conn()?;

        let found: Option<i32> = homes::table
            .find(id.get())
            .select(homes::id)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn create_home(&self, home: &NewHome, realtor: UserId) -> Result<Home> {
        let row = Self::new_home_row(home, realtor);
        let mut conn = self.write_conn()?;

        let stored = conn
            .transaction(|conn| {
                diesel::insert_into(homes::table)
                    .values(&row)
                    .execute(conn)?;

                let id: i32 = diesel::sql_query("SELECT last_insert_rowid() AS id")
                    .get_result::<LastInsertRowId>(conn)
                    .map(|row| row.id)?;

                let image_rows: Vec<NewImageRow> = home
                    .images
                    .iter()
                    .map(|url| NewImageRow {
                        url: url.clone(),
                        home_id: id,
                    })
                    .collect();
                if !image_rows.is_empty() {
                    diesel::insert_into(images::table)
                        .values(&image_rows)
                        .execute(conn)?;
                }

                homes::table.find(id).first::<HomeRow>(conn)
            })
            .map_err(|e: diesel::result::Error| Error::Database(e.to_string()))?;

        debug!(id = stored.id, city = %stored.city, "Created home row");
        Self::home_from_row(stored)
    }

    async fn update_home(&self, id: HomeId, patch: &HomePatch) -> Result<Home> {
        let changeset = Self::changeset_from_patch(patch);
        let mut conn = self.write_conn()?;

        let stored = conn
            .transaction(|conn| {
                if !patch.is_empty() {
                    diesel::update(homes::table.find(id.get()))
                        .set(&changeset)
                        .execute(conn)?;
                }
                homes::table.find(id.get()).first::<HomeRow>(conn)
            })
            .map_err(|e: diesel::result::Error| Error::Database(e.to_string()))?;

        debug!(id = stored.id, "Updated home row");
        Self::home_from_row(stored)
    }

    async fn delete_home(&self, id: HomeId) -> Result<()> {
        let mut conn = self.write_conn()?;

        conn.transaction(|conn| {
            diesel::delete(images::table.filter(images::home_id.eq(id.get()))).execute(conn)?;
            diesel::delete(homes::table.find(id.get())).execute(conn)
        })
        .map_err(|e: diesel::result::Error| Error::Database(e.to_string()))?;

        debug!(id = id.get(), "Deleted home row and gallery");
        Ok(())
    }

    async fn find_realtor(&self, id: HomeId) -> Result<Option<RealtorContact>> {
        let mut conn = self.conn()?;

        let realtor_id: Option<i32> = homes::table
            .find(id.get())
            .select(homes::realtor_id)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        let Some(realtor_id) = realtor_id else {
            return Ok(None);
        };

        let row: UserRow = users::table
            .find(realtor_id)
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Some(Self::realtor_from_row(row)))
    }

    async fn create_message(&self, message: &NewMessage) -> Result<Message> {
        let row = NewMessageRow {
            body: message.body.clone(),
            home_id: message.home_id.get(),
            realtor_id: message.realtor_id.get(),
            buyer_id: message.buyer_id.get(),
            sent_at: Utc::now().to_rfc3339(),
        };
        let mut conn = self.write_conn()?;

        let stored = conn
            .transaction(|conn| {
                diesel::insert_into(messages::table)
                    .values(&row)
                    .execute(conn)?;

                let id: i32 = diesel::sql_query("SELECT last_insert_rowid() AS id")
                    .get_result::<LastInsertRowId>(conn)
                    .map(|row| row.id)?;

                messages::table.find(id).first::<MessageRow>(conn)
            })
            .map_err(|e: diesel::result::Error| Error::Database(e.to_string()))?;

        debug!(id = stored.id, home_id = stored.home_id, "Recorded inquiry row");
        Self::message_from_row(stored)
    }

    async fn find_messages(&self, home_id: HomeId) -> Result<Vec<(Message, BuyerContact)>> {
        let mut conn = self.conn()?;

        let message_rows: Vec<MessageRow> = messages::table
            .filter(messages::home_id.eq(home_id.get()))
            .order(messages::id.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let buyer_ids: Vec<i32> = message_rows.iter().map(|row| row.buyer_id).collect();
        let buyer_rows: Vec<UserRow> = users::table
            .filter(users::id.eq_any(&buyer_ids))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        let buyers: HashMap<i32, UserRow> =
            buyer_rows.into_iter().map(|row| (row.id, row)).collect();

        message_rows
            .into_iter()
            .map(|row| {
                let buyer = buyers.get(&row.buyer_id).cloned().ok_or_else(|| {
                    Error::Database(format!(
                        "buyer #{} missing for message #{}",
                        row.buyer_id, row.id
                    ))
                })?;
                Ok((Self::message_from_row(row)?, Self::buyer_from_row(buyer)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::testkit::db::{memory_pool, seed_buyer, seed_realtor};
    use crate::testkit::domain::{bare_lot, city_filter, condo, craftsman};

    fn setup() -> (SqliteCatalogStore, UserId) {
        let pool = memory_pool();
        let realtor = seed_realtor(&pool);
        (SqliteCatalogStore::new(pool), realtor)
    }

    #[tokio::test]
    async fn create_then_find_preserves_gallery_order() {
        let (store, realtor) = setup();

        let home = store.create_home(&craftsman(), realtor).await.unwrap();
        let record = store.find_home(home.id).await.unwrap().unwrap();

        assert_eq!(record.images, craftsman().images);
        assert_eq!(record.realtor.id, realtor);
        assert_eq!(record.realtor.email, "laura@vancerealty.test");
        assert_eq!(record.home.price, dec!(450_000));
    }

    #[tokio::test]
    async fn find_home_returns_none_for_missing_id() {
        let (store, _realtor) = setup();

        let record = store.find_home(HomeId::new(77)).await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn find_homes_pairs_each_home_with_first_image() {
        let (store, realtor) = setup();

        let first = store.create_home(&craftsman(), realtor).await.unwrap();
        let second = store.create_home(&condo(), realtor).await.unwrap();

        let listed = store.find_homes(&HomeFilter::default()).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].home.id, first.id);
        assert_eq!(
            listed[0].thumbnail.as_deref(),
            Some("https://img.test/714-front.jpg")
        );
        assert_eq!(listed[1].home.id, second.id);
    }

    #[tokio::test]
    async fn find_homes_leaves_thumbnail_empty_for_bare_gallery() {
        let (store, realtor) = setup();

        store.create_home(&bare_lot(), realtor).await.unwrap();

        let listed = store.find_homes(&HomeFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].thumbnail.is_none());
    }

    #[tokio::test]
    async fn find_homes_applies_city_and_type_and_price_filters() {
        let (store, realtor) = setup();

        store.create_home(&craftsman(), realtor).await.unwrap();
        store.create_home(&condo(), realtor).await.unwrap();

        let by_city = store.find_homes(&city_filter("Seattle")).await.unwrap();
        assert_eq!(by_city.len(), 1);
        assert_eq!(by_city[0].home.city, "Seattle");

        let by_type = store
            .find_homes(&HomeFilter {
                property_type: Some(PropertyType::Condo),
                ..HomeFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].home.property_type, PropertyType::Condo);

        let in_range = store
            .find_homes(&HomeFilter {
                price: Some(crate::domain::PriceRange {
                    min: Some(dec!(400_000)),
                    max: Some(dec!(500_000)),
                }),
                ..HomeFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].home.price, dec!(450_000));
    }

    #[tokio::test]
    async fn price_bounds_are_inclusive() {
        let (store, realtor) = setup();

        store.create_home(&craftsman(), realtor).await.unwrap();

        let exact = store
            .find_homes(&HomeFilter {
                price: Some(crate::domain::PriceRange {
                    min: Some(dec!(450_000)),
                    max: Some(dec!(450_000)),
                }),
                ..HomeFilter::default()
            })
            .await
            .unwrap();

        assert_eq!(exact.len(), 1);
    }

    #[tokio::test]
    async fn home_exists_tracks_row_lifecycle() {
        let (store, realtor) = setup();

        let home = store.create_home(&bare_lot(), realtor).await.unwrap();
        assert!(store.home_exists(home.id).await.unwrap());

        store.delete_home(home.id).await.unwrap();
        assert!(!store.home_exists(home.id).await.unwrap());
    }

    #[tokio::test]
    async fn update_changes_only_patched_fields() {
        let (store, realtor) = setup();

        let home = store.create_home(&craftsman(), realtor).await.unwrap();
        let updated = store
            .update_home(
                home.id,
                &HomePatch {
                    price: Some(dec!(475_000)),
                    ..HomePatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, dec!(475_000));
        assert_eq!(updated.address, home.address);
        assert_eq!(updated.number_of_bedrooms, home.number_of_bedrooms);
        assert_eq!(updated.property_type, home.property_type);
    }

    #[tokio::test]
    async fn update_missing_id_surfaces_store_error() {
        let (store, _realtor) = setup();

        let err = store
            .update_home(
                HomeId::new(404),
                &HomePatch {
                    city: Some("Nowhere".to_string()),
                    ..HomePatch::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Database(_)));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn empty_patch_returns_row_unchanged() {
        let (store, realtor) = setup();

        let home = store.create_home(&condo(), realtor).await.unwrap();
        let updated = store
            .update_home(home.id, &HomePatch::default())
            .await
            .unwrap();

        assert_eq!(updated.price, home.price);
        assert_eq!(updated.city, home.city);
    }

    #[tokio::test]
    async fn delete_removes_home_and_gallery_together() {
        let (store, realtor) = setup();

        let home = store.create_home(&craftsman(), realtor).await.unwrap();
        store.delete_home(home.id).await.unwrap();

        assert!(store.find_home(home.id).await.unwrap().is_none());

        let mut conn = store.pool.get().unwrap();
        let remaining: i64 = images::table
            .filter(images::home_id.eq(home.id.get()))
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn find_realtor_resolves_owner_contact() {
        let (store, realtor) = setup();

        let home = store.create_home(&condo(), realtor).await.unwrap();
        let contact = store.find_realtor(home.id).await.unwrap().unwrap();

        assert_eq!(contact.id, realtor);
        assert_eq!(contact.phone, "555-0101");

        assert!(store.find_realtor(HomeId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn messages_roundtrip_with_buyer_contact() {
        let (store, realtor) = setup();
        let buyer = seed_buyer(&store.pool);

        let home = store.create_home(&craftsman(), realtor).await.unwrap();
        let message = store
            .create_message(&NewMessage {
                body: "Is the roof new?".to_string(),
                home_id: home.id,
                realtor_id: realtor,
                buyer_id: buyer,
            })
            .await
            .unwrap();

        assert_eq!(message.home_id, home.id);
        assert_eq!(message.buyer_id, buyer);

        let inquiries = store.find_messages(home.id).await.unwrap();
        assert_eq!(inquiries.len(), 1);
        assert_eq!(inquiries[0].0.body, "Is the roof new?");
        assert_eq!(inquiries[0].1.email, "omar@example.test");
    }

    #[tokio::test]
    async fn find_messages_is_empty_for_quiet_home() {
        let (store, realtor) = setup();

        let home = store.create_home(&condo(), realtor).await.unwrap();
        let inquiries = store.find_messages(home.id).await.unwrap();

        assert!(inquiries.is_empty());
    }
}
