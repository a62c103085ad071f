//! Database configuration module for the market backend.
//!
//! This module handles `SQLite` database connection, table creation, and
//! catalog seeding using `SeaORM`. Table creation uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to generate SQL statements from
//! the entity models, ensuring that the database schema matches the Rust
//! struct definitions without requiring manual SQL.

use crate::config::catalog;
use crate::entities::{Item, Purchase, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file created on first use.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://marketplace.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Statements are issued `IF NOT EXISTS` so the binary can be re-run
/// against an existing database file.
///
/// # Errors
/// Returns an error if a table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut user_table = schema.create_table_from_entity(User);
    let mut item_table = schema.create_table_from_entity(Item);
    let mut purchase_table = schema.create_table_from_entity(Purchase);

    db.execute(builder.build(user_table.if_not_exists())).await?;
    db.execute(builder.build(item_table.if_not_exists())).await?;
    db.execute(builder.build(purchase_table.if_not_exists()))
        .await?;

    Ok(())
}

/// Seeds users and items from the catalog configuration.
///
/// Idempotent: a user whose email already exists, or an item whose name
/// already exists, is left untouched, so the binary can re-run against a
/// seeded database.
///
/// # Errors
/// Returns an error if a lookup or insert fails, or if a catalog entry
/// fails validation (empty name, negative amount).
pub async fn seed_initial_catalog(db: &DatabaseConnection, config: &catalog::Config) -> Result<()> {
    for user in &config.users {
        if crate::core::user::get_user_by_email(db, &user.email)
            .await?
            .is_some()
        {
            debug!(email = %user.email, "user already seeded");
            continue;
        }
        crate::core::user::create_user(db, user.email.clone(), user.balance).await?;
        info!(email = %user.email, balance = user.balance, "seeded user");
    }

    for item in &config.items {
        if crate::core::item::get_item_by_name(db, &item.name)
            .await?
            .is_some()
        {
            debug!(name = %item.name, "item already seeded");
            continue;
        }
        crate::core::item::create_item(db, item.name.clone(), item.cost).await?;
        info!(name = %item.name, cost = item.cost, "seeded item");
    }

    Ok(())
}
