//! User entity - Represents an account holder in the market.
//!
//! Each user has an email for display/identity and a balance in dollars.
//! The balance is only ever mutated by the purchase executor; user creation
//! happens through the catalog helpers (seeding, tests).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Email address, used as the human-readable identity
    pub email: String,
    /// Current balance in dollars, never negative
    pub balance: f64,
}

/// Purchases reference users by plain id; see the purchase entity for why
/// no database-level relation is declared.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
