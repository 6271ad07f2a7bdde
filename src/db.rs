use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use dotenv::dotenv;
use std::env;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub fn create_connection_pool() -> DbPool {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool.")
}

/// In-memory pool for tests. A single connection so every checkout sees
/// the same database.
#[cfg(test)]
pub fn create_test_pool() -> DbPool {
    use diesel::connection::SimpleConnection;

    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to create test pool.");
    let conn = pool.get().expect("Failed to check out test connection.");
    conn.batch_execute(include_str!(
        "../migrations/2025-10-12-083456_create_articles_and_suggestions/up.sql"
    ))
    .expect("Failed to create test schema.");
    pool
}
