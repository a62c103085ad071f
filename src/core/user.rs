//! User business logic - account lookups and validated creation.
//!
//! Users are created externally to the purchase flow (seeding, fixtures,
//! an eventual admin surface); the buy operation itself only ever reads a
//! user and debits its balance. All functions are async and return Result
//! types for error handling.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Finds a user by its unique ID, returning None if not found.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by email address, returning None if not found.
///
/// Used by catalog seeding to keep re-runs idempotent: a user whose email
/// already exists is not inserted again.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new user with the given email and starting balance.
///
/// Validates that the email is non-empty and the balance is a finite,
/// non-negative amount. The email is trimmed before storage.
pub async fn create_user(
    db: &DatabaseConnection,
    email: String,
    balance: f64,
) -> Result<user::Model> {
    if email.trim().is_empty() {
        return Err(Error::Config {
            message: "User email cannot be empty".to_string(),
        });
    }

    if balance < 0.0 || !balance.is_finite() {
        return Err(Error::InvalidAmount { amount: balance });
    }

    let user = user::ActiveModel {
        email: Set(email.trim().to_string()),
        balance: Set(balance),
        ..Default::default()
    };

    user.insert(db).await.map_err(Into::into)
}
