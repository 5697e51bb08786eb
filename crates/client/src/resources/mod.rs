//! One module per backend resource. Each adds methods to [`crate::ApiClient`].

mod customers;
mod expenses;
mod pre_orders;
mod products;
mod sales;
mod users;

const PRODUCTS: &str = "products";
const CUSTOMERS: &str = "customers";
const SALES_ITEMS: &str = "sales-items";
const MONTHLY_REVENUE: &str = "sales-items/monthly-revenue";
const EXPENSES: &str = "expenses";
const EXPENSE_CATEGORIES: &str = "expense-category";
const PRE_ORDERS: &str = "pre-order-sale";
const USERS: &str = "users";
