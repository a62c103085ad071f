//! Purchase business logic - the atomic buy operation and ledger reads.
//!
//! `buy` is the only mutating operation in the system. Every attempt runs
//! its whole validate-then-commit sequence while holding a process-wide
//! async mutex, and inside a storage transaction on top of that. The double
//! protection is deliberately conservative: it trades throughput for
//! correctness simplicity, which is acceptable at this system's scale.
//!
//! A failed attempt rolls back, logs a diagnostic, and returns a typed
//! error so callers can tell the outcomes apart without re-reading state.

use crate::{
    entities::{Item, Purchase, User, purchase, user},
    errors::{Error, Result},
};
use sea_orm::{
    DatabaseBackend, DatabaseTransaction, IsolationLevel, QueryOrder, Set, TransactionTrait,
    prelude::*,
};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// The Gate: serializes all buy attempts process-wide, not just per-user.
/// Prevents two concurrent purchases from both reading a stale balance and
/// both succeeding when only one should.
static BUY_GATE: Mutex<()> = Mutex::const_new(());

/// Executes "user buys item" as a single all-or-nothing operation.
///
/// Preconditions are checked inside the transaction, not before: the user
/// must exist, the item must exist, and the user's balance must cover the
/// item's cost. On success the balance is debited by exactly the cost and
/// exactly one ledger row is appended, both visible together. On any
/// failure the transaction rolls back and nothing is persisted.
///
/// # Errors
/// Returns `UserNotFound`, `ItemNotFound`, `InsufficientBalance`, or
/// `Database` for storage failures during the attempt.
pub async fn buy(db: &DatabaseConnection, user_id: i64, item_id: i64) -> Result<purchase::Model> {
    // Held across the whole validate-then-commit sequence, released on
    // every return path when the guard drops.
    let _gate = BUY_GATE.lock().await;

    let txn = begin_buy_transaction(db).await?;

    match attempt_buy(&txn, user_id, item_id).await {
        Ok(receipt) => {
            txn.commit().await?;
            debug!(user_id, item_id, purchase_id = receipt.id, "purchase committed");
            Ok(receipt)
        }
        Err(err) => {
            warn!(user_id, item_id, error = %err, "purchase aborted");
            // The domain error is the outcome; a rollback failure must not
            // replace it.
            if let Err(rollback_err) = txn.rollback().await {
                warn!(user_id, item_id, error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

/// Opens the storage transaction for a buy attempt.
///
/// Server backends get an explicit repeatable-read isolation level; SQLite
/// transactions are serializable already and take no level configuration.
async fn begin_buy_transaction(db: &DatabaseConnection) -> Result<DatabaseTransaction> {
    match db.get_database_backend() {
        DatabaseBackend::Sqlite => db.begin().await.map_err(Into::into),
        _ => db
            .begin_with_config(Some(IsolationLevel::RepeatableRead), None)
            .await
            .map_err(Into::into),
    }
}

/// The validate-then-write sequence, run inside the gate and transaction.
async fn attempt_buy(
    txn: &DatabaseTransaction,
    user_id: i64,
    item_id: i64,
) -> Result<purchase::Model> {
    let user = User::find_by_id(user_id)
        .one(txn)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })?;

    let item = Item::find_by_id(item_id)
        .one(txn)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    if user.balance < item.cost {
        return Err(Error::InsufficientBalance {
            balance: user.balance,
            cost: item.cost,
        });
    }

    let new_balance = user.balance - item.cost;
    let mut account: user::ActiveModel = user.into();
    account.balance = Set(new_balance);
    account.update(txn).await?;

    let receipt = purchase::ActiveModel {
        user_id: Set(user_id),
        item_id: Set(item_id),
        purchased_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    receipt.insert(txn).await.map_err(Into::into)
}

/// Retrieves a user's ledger rows, newest first.
pub async fn get_purchases_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<purchase::Model>> {
    Purchase::find()
        .filter(purchase::Column::UserId.eq(user_id))
        .order_by_desc(purchase::Column::PurchasedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
