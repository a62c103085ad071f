//! Shared test utilities for the market backend.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    core::{item, user},
    entities,
    errors::Result,
};
use sea_orm::{ActiveModelTrait, ConnectOptions, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
///
/// The pool is capped at a single connection: each pooled connection to
/// `sqlite::memory:` is its own database, so every query in a test must go
/// through the same one.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = sea_orm::Database::connect(options).await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with the default balance of 1000.0.
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    user::create_user(db, email.to_string(), 1000.0).await
}

/// Creates a test user with a custom starting balance.
pub async fn create_custom_user(
    db: &DatabaseConnection,
    email: &str,
    balance: f64,
) -> Result<entities::user::Model> {
    user::create_user(db, email.to_string(), balance).await
}

/// Creates a test item with the default cost of 100.0.
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::item::Model> {
    item::create_item(db, name.to_string(), 100.0).await
}

/// Creates a test item with a custom cost.
pub async fn create_custom_item(
    db: &DatabaseConnection,
    name: &str,
    cost: f64,
) -> Result<entities::item::Model> {
    item::create_item(db, name.to_string(), cost).await
}

/// Inserts a ledger row with an explicit timestamp, bypassing the buy
/// operation. Report tests need historical purchase dates that `buy`
/// (which stamps `Utc::now()`) cannot produce.
pub async fn create_backdated_purchase(
    db: &DatabaseConnection,
    user_id: i64,
    item_id: i64,
    purchased_at: chrono::DateTime<chrono::Utc>,
) -> Result<entities::purchase::Model> {
    let row = entities::purchase::ActiveModel {
        user_id: Set(user_id),
        item_id: Set(item_id),
        purchased_at: Set(purchased_at),
        ..Default::default()
    };

    row.insert(db).await.map_err(Into::into)
}

/// Sets up a complete test environment with one user and one item.
/// Returns (db, user, item) for common purchase scenarios.
pub async fn setup_market() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::item::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "buyer@example.com").await?;
    let item = create_test_item(&db, "Test Item").await?;
    Ok((db, user, item))
}
