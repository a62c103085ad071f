//! Item entity - Represents a purchasable catalog item.
//!
//! Each item has a display name (used as the report key) and a cost.
//! Items are read-only from the purchase executor's perspective.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name, shown in the popularity report
    pub name: String,
    /// Price in dollars, never negative
    pub cost: f64,
}

/// Purchases reference items by plain id; see the purchase entity for why
/// no database-level relation is declared.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
