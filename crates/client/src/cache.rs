//! Cache types for reference lists.
//!
//! Only lists that forms pick from are cached: products, customers and
//! expense categories. Reports always read fresh sales and expenses.

use std::sync::Arc;

use stockdesk_core::models::{Customer, ExpenseCategory, Product};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products,
    Customers,
    ExpenseCategories,
}

#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
    Customers(Arc<Vec<Customer>>),
    ExpenseCategories(Arc<Vec<ExpenseCategory>>),
}
