//! Aggregation of record lists into dashboard reports.
//!
//! Every function here is a pure reduction over a slice of records already
//! fetched from the backend. Percentages are returned as [`Decimal`] rounded
//! to two places; any percentage whose denominator is zero is zero.

mod expenses;
mod inventory;
mod pre_order;
mod revenue;
mod sales;

pub use expenses::ExpenseSummary;
pub use inventory::{CategoryStock, InventorySummary, StockAlert};
pub use pre_order::{ADVANCE_RATE, PreOrderPayment};
pub use revenue::{RevenueComparison, monthly_revenue};
pub use sales::{ProductSales, SalesReport, top_products};

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Discount, Money};

/// `price * (1 - discount / 100)`.
#[must_use]
pub fn discounted_price(price: Money, discount: Discount) -> Money {
    discount.apply(price)
}

/// Month-over-month style growth: `(current - previous) / previous * 100`.
///
/// Returns zero when `previous` is zero.
#[must_use]
pub fn growth_percent(current: Money, previous: Money) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    ((current.amount() - previous.amount()) / previous.amount() * Decimal::ONE_HUNDRED).round_dp(2)
}

/// `part / total * 100`, or zero when `total` is zero.
#[must_use]
pub fn percent_of(part: Money, total: Money) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (part.amount() / total.amount() * Decimal::ONE_HUNDRED).round_dp(2)
}

/// One group of records sharing a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<K> {
    pub key: K,
    pub count: usize,
    pub total: Money,
    /// Share of the report's grand total, in percent.
    pub share: Decimal,
}

/// Group `(key, amount)` pairs, ordered by key.
fn group_by_key<K: Ord>(entries: impl IntoIterator<Item = (K, Money)>) -> Vec<Bucket<K>> {
    let mut groups: BTreeMap<K, (usize, Money)> = BTreeMap::new();
    for (key, amount) in entries {
        let slot = groups.entry(key).or_insert((0, Money::ZERO));
        slot.0 += 1;
        slot.1 += amount;
    }

    let grand_total: Money = groups.values().map(|(_, total)| *total).sum();
    groups
        .into_iter()
        .map(|(key, (count, total))| Bucket {
            key,
            count,
            total,
            share: percent_of(total, grand_total),
        })
        .collect()
}

/// Group `(key, amount)` pairs, largest total first (ties broken by key).
fn group_by_total<K: Ord>(entries: impl IntoIterator<Item = (K, Money)>) -> Vec<Bucket<K>> {
    let mut buckets = group_by_key(entries);
    buckets.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
    buckets
}

/// Blank labels are grouped together under one name.
fn label(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "Uncategorized".to_string()
    } else {
        trimmed.to_string()
    }
}
