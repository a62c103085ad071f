//! Item business logic - catalog lookups and validated creation.
//!
//! Items are immutable from the purchase executor's perspective: the buy
//! operation reads an item's cost and the report resolves item names, but
//! nothing in the core ever updates one. All functions are async and return
//! Result types for error handling.

use crate::{
    entities::{Item, item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all catalog items, ordered alphabetically by name.
pub async fn get_all_items(db: &DatabaseConnection) -> Result<Vec<item::Model>> {
    Item::find()
        .order_by_asc(item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an item by its unique ID, returning None if not found.
pub async fn get_item_by_id(db: &DatabaseConnection, item_id: i64) -> Result<Option<item::Model>> {
    Item::find_by_id(item_id).one(db).await.map_err(Into::into)
}

/// Finds an item by name, returning None if not found.
///
/// Used by catalog seeding to keep re-runs idempotent: an item whose name
/// already exists is not inserted again.
pub async fn get_item_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<item::Model>> {
    Item::find()
        .filter(item::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new catalog item with the given name and cost.
///
/// Validates that the name is non-empty and the cost is a finite,
/// non-negative amount. The name is trimmed before storage.
pub async fn create_item(db: &DatabaseConnection, name: String, cost: f64) -> Result<item::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Item name cannot be empty".to_string(),
        });
    }

    if cost < 0.0 || !cost.is_finite() {
        return Err(Error::InvalidAmount { amount: cost });
    }

    let item = item::ActiveModel {
        name: Set(name.trim().to_string()),
        cost: Set(cost),
        ..Default::default()
    };

    item.insert(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_item() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_item(&db, "Coffee".to_string(), 4.5).await?;
        assert_eq!(item.name, "Coffee");
        assert_eq!(item.cost, 4.5);

        let found = get_item_by_id(&db, item.id).await?;
        assert_eq!(found, Some(item));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_empty_name_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_item(&db, String::new(), 10.0).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_invalid_cost_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_item(&db, "Broken".to_string(), -10.0).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -10.0 }
        ));

        let result = create_item(&db, "Broken".to_string(), f64::INFINITY).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_items_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        create_item(&db, "Zither".to_string(), 200.0).await?;
        create_item(&db, "Apple".to_string(), 1.0).await?;

        let items = get_all_items(&db).await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Apple");
        assert_eq!(items[1].name, "Zither");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_item_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_item(&db, "Tea".to_string(), 3.0).await?;

        let found = get_item_by_name(&db, "Tea").await?;
        assert_eq!(found, Some(created));

        let missing = get_item_by_name(&db, "Cocoa").await?;
        assert!(missing.is_none());

        Ok(())
    }
}
