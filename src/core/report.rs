//! Popularity report aggregation.
//!
//! Produces a per-year top-3 ranking of items where the popularity of a
//! (year, item) pair is the largest number of times that item was bought by
//! a single user on a single calendar day - a "best single-day burst", not
//! the item's total purchase count. Read-only: the report never mutates the
//! ledger and takes no gate, so it can run concurrently with buys.

use crate::{
    entities::{Item, Purchase},
    errors::Result,
};
use chrono::{Datelike, NaiveDate};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// How many items each year's ranking retains.
const TOP_ITEMS_PER_YEAR: usize = 3;

/// Display name substituted when a ledger row references an item that no
/// longer exists in the catalog.
pub const UNKNOWN_ITEM_NAME: &str = "[Unknown Item]";

/// One row of the popularity report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularItemReport {
    /// Calendar year the ranking applies to
    pub year: i32,
    /// Item display name, or [`UNKNOWN_ITEM_NAME`] if unresolvable
    pub item_name: String,
    /// Popularity: the best single-user single-day purchase count
    pub purchase_count: i64,
}

/// Generates the per-year top-3 popularity report over the full ledger.
///
/// The aggregation runs in two explicit stages. Stage 1 counts ledger rows
/// per (year, item, calendar day, user). Stage 2 reduces those counts per
/// (year, item), keeping the maximum - collapsing the stages into one pass
/// would conflate total purchases with the intended best-burst metric.
/// Within each year, items rank by popularity descending with ties broken
/// by item id ascending so results are reproducible.
///
/// The ledger is read in a single query, so all counts in one report come
/// from one consistent snapshot even if purchases commit mid-computation.
/// An empty ledger yields an empty report; a year with fewer than three
/// items returns them all.
///
/// # Errors
/// Propagates storage errors unchanged; an unresolvable item is a
/// data-quality fallback, not an error.
pub async fn get_popular_items_report(db: &DatabaseConnection) -> Result<Vec<PopularItemReport>> {
    let ledger = Purchase::find().all(db).await?;

    // Stage 1: purchases per (year, item, day, user).
    let mut daily_counts: HashMap<(i32, i64, NaiveDate, i64), i64> = HashMap::new();
    for row in &ledger {
        let day = row.purchased_at.date_naive();
        *daily_counts
            .entry((day.year(), row.item_id, day, row.user_id))
            .or_insert(0) += 1;
    }

    // Stage 2: popularity of (year, item) is the max stage-1 count, i.e.
    // the best single-user single-day count, not a sum across users or days.
    let mut popularity: HashMap<(i32, i64), i64> = HashMap::new();
    for ((year, item_id, _day, _user_id), count) in daily_counts {
        let best = popularity.entry((year, item_id)).or_insert(0);
        *best = (*best).max(count);
    }

    // Rank within each year; BTreeMap keeps the year traversal stable.
    let mut years: BTreeMap<i32, Vec<(i64, i64)>> = BTreeMap::new();
    for ((year, item_id), count) in popularity {
        years.entry(year).or_default().push((item_id, count));
    }

    let mut report = Vec::new();
    for (year, mut entries) in years {
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        for (item_id, purchase_count) in entries.into_iter().take(TOP_ITEMS_PER_YEAR) {
            let item_name = Item::find_by_id(item_id)
                .one(db)
                .await?
                .map_or_else(|| UNKNOWN_ITEM_NAME.to_string(), |item| item.name);

            report.push(PopularItemReport {
                year,
                item_name,
                purchase_count,
            });
        }
    }

    Ok(report)
}
