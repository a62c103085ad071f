//! Purchase entity - One row per purchase event in the append-only ledger.
//!
//! A purchase references its user and item by plain id rather than a
//! database-level foreign key: the core validates both references inside the
//! buy transaction, and historical ledger rows must survive later catalog
//! deletions (the report resolves names at read time and falls back to a
//! sentinel for items that no longer exist). Buying the same item twice on
//! the same day produces two rows, not a count field.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase ledger row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    /// Unique identifier for the ledger row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who made the purchase
    pub user_id: i64,
    /// ID of the purchased item
    pub item_id: i64,
    /// When the purchase was committed (UTC)
    pub purchased_at: DateTimeUtc,
}

/// No owned relations; the ledger side carries plain ids only.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
