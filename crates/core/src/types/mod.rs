//! Core types for Stockdesk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod period;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{Discount, DiscountError, Money};
pub use period::{DateRange, YearMonth, YearMonthError};
pub use status::*;
