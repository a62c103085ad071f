//! Unified error types and result handling for the market backend.
//!
//! All fallible operations in the crate return [`Result`]. Purchase-domain
//! failures carry enough context to diagnose the attempt (ids, amounts);
//! storage and I/O failures convert via `#[from]`.

use thiserror::Error;

/// Crate-wide error enum
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced user does not exist
    #[error("user {id} not found")]
    UserNotFound {
        /// The user id that failed to resolve
        id: i64,
    },

    /// The referenced item does not exist
    #[error("item {id} not found")]
    ItemNotFound {
        /// The item id that failed to resolve
        id: i64,
    },

    /// The user's balance does not cover the item's cost
    #[error("insufficient balance: have {balance:.2}, item costs {cost:.2}")]
    InsufficientBalance {
        /// Balance at the time of the attempt
        balance: f64,
        /// Cost of the requested item
        cost: f64,
    },

    /// A monetary amount failed validation (negative, NaN, infinite)
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// Configuration loading or validation failed
    #[error("configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Any underlying storage failure (query, commit, connection)
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error, e.g. while reading config files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
