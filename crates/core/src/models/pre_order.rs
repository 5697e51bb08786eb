//! Pre-orders: sales recorded before full payment.
//!
//! A pre-order carries a snapshot of the product and the customer as they
//! were when the order was taken, so later edits to either record do not
//! change what the customer agreed to pay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Discount, Money, PreOrderId, PreOrderStatus, ProductId};

/// Product as captured on the pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    #[serde(rename = "_id", alias = "id", alias = "productID")]
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub category: String,
}

/// Customer as captured on the pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreOrder {
    #[serde(rename = "_id", alias = "id")]
    pub id: PreOrderId,
    pub product: ProductSnapshot,
    pub customer: CustomerSnapshot,
    #[serde(default)]
    pub discount: Discount,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub due_amount: Money,
    #[serde(default)]
    pub status: PreOrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PreOrder {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.due_amount.is_zero() || self.due_amount.is_negative()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPreOrder {
    pub product: ProductSnapshot,
    pub customer: CustomerSnapshot,
    pub discount: Discount,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub due_amount: Money,
    pub status: PreOrderStatus,
}

/// Partial update of a pre-order. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreOrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PreOrderStatus>,
}

impl PreOrderUpdate {
    /// Collect the outstanding balance and mark the order delivered.
    #[must_use]
    pub fn settle(order: &PreOrder) -> Self {
        Self {
            paid_amount: Some(order.total_amount),
            due_amount: Some(Money::ZERO),
            status: Some(PreOrderStatus::Delivered),
        }
    }

    #[must_use]
    pub fn cancel() -> Self {
        Self {
            status: Some(PreOrderStatus::Cancelled),
            ..Self::default()
        }
    }
}
