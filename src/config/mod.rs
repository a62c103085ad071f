/// Database connection, table creation, and catalog seeding
pub mod database;

/// Initial catalog (users and items) loading from config.toml
pub mod catalog;
