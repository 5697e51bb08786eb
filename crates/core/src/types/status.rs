//! Status and category enums shared by records and forms.
//!
//! The backend has historically written these values in Title Case (from
//! form dropdowns) and in `snake_case` (from later API versions). Records are
//! read through `FromStr`, which accepts both spellings; anything else becomes
//! the `Other` variant so that one odd row cannot fail a whole list. Values
//! are always written in `snake_case`. `FromStr` itself never yields `Other`,
//! so forms stay strict.

use serde::{Deserialize, Deserializer, Serialize};

/// Implement `Deserialize` through `FromStr`, falling back to `Other` for
/// unknown or missing values.
macro_rules! lenient_deserialize {
    ($name:ident) => {
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(Self::Other))
            }
        }
    };
}

/// Payment state of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
    /// A status this client does not know.
    Other,
}

lenient_deserialize!(ExpenseStatus);

impl ExpenseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid expense status: {s}")),
        }
    }
}

/// How an expense was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
    MobileBanking,
    /// Cheques and anything else recorded outside the four form choices.
    Other,
}

lenient_deserialize!(PaymentMethod);

impl PaymentMethod {
    /// Methods offered on the expense form, in display order.
    pub const ALL: [Self; 4] = [
        Self::Cash,
        Self::Card,
        Self::BankTransfer,
        Self::MobileBanking,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
            Self::MobileBanking => "mobile_banking",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "bank_transfer" | "bank" => Ok(Self::BankTransfer),
            "mobile_banking" | "mobile" => Ok(Self::MobileBanking),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Lifecycle of a pre-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreOrderStatus {
    /// Advance taken, product not yet handed over.
    #[default]
    Pending,
    /// Balance collected and product delivered.
    Delivered,
    Cancelled,
    Other,
}

lenient_deserialize!(PreOrderStatus);

impl PreOrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PreOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PreOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "delivered" | "completed" => Ok(Self::Delivered),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid pre-order status: {s}")),
        }
    }
}

/// Dashboard user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access including user management.
    Admin,
    /// Inventory and expense management.
    Manager,
    /// Records sales and pre-orders.
    SalesManager,
    Other,
}

lenient_deserialize!(UserRole);

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::SalesManager => write!(f, "sales_manager"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "sales_manager" | "salesmanager" => Ok(Self::SalesManager),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}
