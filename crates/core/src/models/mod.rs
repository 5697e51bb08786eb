//! Records and payloads exchanged with the inventory backend.
//!
//! Records (`Product`, `Expense`, ...) are what the backend returns. Payloads
//! (`NewProduct`, `NewExpense`, ...) are what the client sends; they are only
//! built from validated forms, see [`crate::validation`].
//!
//! Field names follow the backend's camelCase JSON. Document ids arrive as
//! `_id`; `id` is accepted as well.

mod customer;
mod envelope;
mod expense;
mod pre_order;
mod product;
mod sales;
mod user;

pub use customer::{Customer, NewCustomer};
pub use envelope::{Envelope, EnvelopeError};
pub use expense::{Expense, ExpenseCategory, NewExpense, NewExpenseCategory};
pub use pre_order::{CustomerSnapshot, NewPreOrder, PreOrder, PreOrderUpdate, ProductSnapshot};
pub use product::{NewProduct, Product};
pub use sales::{MonthlyRevenue, NewSalesItem, SalesItem};
pub use user::{NewUser, User};
