//! Core business logic - framework-agnostic market operations.
//!
//! The two operations the service exposes live here: the atomic purchase
//! executor in [`purchase`] and the popularity report in [`report`]. The
//! [`user`] and [`item`] modules hold the catalog helpers (lookups,
//! validated creation) that seeding and tests build on.

/// Catalog item helpers - lookups and validated creation
pub mod item;
/// The atomic buy operation and ledger reads
pub mod purchase;
/// Popularity report aggregation
pub mod report;
/// User account helpers - lookups and validated creation
pub mod user;
