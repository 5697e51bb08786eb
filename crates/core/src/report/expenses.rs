//! Expense summaries.

use serde::Serialize;

use super::{Bucket, group_by_key, group_by_total, label};
use crate::models::Expense;
use crate::types::{ExpenseStatus, Money, PaymentMethod, YearMonth};

/// Expense totals grouped several ways.
///
/// Cancelled expenses are reported separately and are excluded from every
/// other figure, so each grouping sums to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: Money,
    /// Still owed (status `pending`).
    pub outstanding: Money,
    pub cancelled_count: usize,
    pub cancelled: Money,
    pub by_category: Vec<Bucket<String>>,
    pub by_payment_method: Vec<Bucket<PaymentMethod>>,
    pub by_status: Vec<Bucket<ExpenseStatus>>,
    /// Expenses with a creation date, per month, oldest first.
    pub by_month: Vec<Bucket<YearMonth>>,
    /// Expenses the backend returned without a creation date.
    pub undated: Money,
}

impl ExpenseSummary {
    #[must_use]
    pub fn build(expenses: &[Expense]) -> Self {
        let (cancelled, active): (Vec<&Expense>, Vec<&Expense>) = expenses
            .iter()
            .partition(|expense| expense.status == ExpenseStatus::Cancelled);

        let total: Money = active.iter().map(|expense| expense.cost).sum();
        let outstanding: Money = active
            .iter()
            .filter(|expense| expense.status == ExpenseStatus::Pending)
            .map(|expense| expense.cost)
            .sum();
        let undated: Money = active
            .iter()
            .filter(|expense| expense.created_at.is_none())
            .map(|expense| expense.cost)
            .sum();

        Self {
            count: active.len(),
            total,
            outstanding,
            cancelled_count: cancelled.len(),
            cancelled: cancelled.iter().map(|expense| expense.cost).sum(),
            by_category: group_by_total(
                active
                    .iter()
                    .map(|expense| (label(&expense.category), expense.cost)),
            ),
            by_payment_method: group_by_total(
                active
                    .iter()
                    .map(|expense| (expense.payment_method, expense.cost)),
            ),
            by_status: group_by_key(active.iter().map(|expense| (expense.status, expense.cost))),
            by_month: group_by_key(active.iter().filter_map(|expense| {
                expense
                    .created_at
                    .map(|at| (YearMonth::of(at), expense.cost))
            })),
            undated,
        }
    }
}
