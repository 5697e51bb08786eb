//! Expenses and the categories they are filed under.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ExpenseCategoryId, ExpenseId, ExpenseStatus, Money, PaymentMethod};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", alias = "id")]
    pub id: ExpenseId,
    pub name: String,
    /// Category name (not id); the backend denormalizes it.
    pub category: String,
    pub cost: Money,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ExpenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub name: String,
    pub category: String,
    pub cost: Money,
    pub payment_method: PaymentMethod,
    pub description: String,
    pub status: ExpenseStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: ExpenseCategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewExpenseCategory {
    pub name: String,
    pub description: String,
}
