//! Inventory products.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Money, ProductId};

/// A product in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Selling price.
    pub price: Money,
    /// Purchase price paid to the supplier.
    #[serde(default)]
    pub cost_price: Money,
    /// Units on hand. Negative or fractional counts from the backend are
    /// read as the nearest count in `0..=u32::MAX`.
    #[serde(default, deserialize_with = "stock_count")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn stock_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default();
    if raw.is_sign_negative() {
        return Ok(0);
    }
    Ok(raw.trunc().to_u32().unwrap_or(u32::MAX))
}

impl Product {
    /// Margin earned on one unit at full price.
    #[must_use]
    pub fn unit_margin(&self) -> Money {
        self.price - self.cost_price
    }

    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

/// Payload for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub cost_price: Money,
    pub quantity: u32,
}
