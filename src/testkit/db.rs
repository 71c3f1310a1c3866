//! Database fixtures for tests.
//!
//! Users are owned by an external account module in production, so tests
//! seed them directly at the row level.

use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::{
    create_pool_from, run_migrations, DbPool,
};
use crate::adapter::outbound::sqlite::database::schema::users;
use crate::config::DatabaseConfig;
use crate::domain::UserId;

/// Create a migrated in-memory database pool.
///
/// The pool holds exactly one connection: each SQLite `:memory:`
/// connection is its own database, so a larger pool would hand out
/// unmigrated databases.
pub fn memory_pool() -> DbPool {
    let pool = create_pool_from(&DatabaseConfig {
        url: ":memory:".into(),
        max_connections: 1,
    })
    .expect("create pool");
    run_migrations(&pool).expect("run migrations");
    pool
}

/// Insert a user row and return its id.
pub fn seed_user(pool: &DbPool, name: &str, email: &str, phone: &str, role: &str) -> UserId {
    let mut conn = pool.get().expect("get connection");

    diesel::insert_into(users::table)
        .values((
            users::name.eq(name),
            users::email.eq(email),
            users::phone.eq(phone),
            users::role.eq(role),
        ))
        .execute(&mut conn)
        .expect("insert user");

    let id: i32 = users::table
        .select(diesel::dsl::max(users::id))
        .first::<Option<i32>>(&mut conn)
        .expect("query user id")
        .expect("user id");
    UserId::new(id)
}

/// Insert a realtor-role user with canned contact details.
pub fn seed_realtor(pool: &DbPool) -> UserId {
    seed_user(
        pool,
        "Laura Vance",
        "laura@vancerealty.test",
        "555-0101",
        "REALTOR",
    )
}

/// Insert a buyer-role user with canned contact details.
pub fn seed_buyer(pool: &DbPool) -> UserId {
    seed_user(pool, "Omar Reyes", "omar@example.test", "555-0107", "BUYER")
}
