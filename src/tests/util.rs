use crate::db::{connect_db, Database};

/// In-memory database with the bot schema, for tests.
pub async fn init_test_db() -> Database {
    let db = connect_db("sqlite::memory:", 1)
        .await
        .expect("failed to create in-memory database");
    db.init_schema().await.expect("failed to create schema");
    db
}
