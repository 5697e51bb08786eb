//! Forms for every record the client can create.

use super::rules::{self, Bound};
use super::{FieldErrors, Validate};
use crate::models::{
    Customer, CustomerSnapshot, NewCustomer, NewExpense, NewExpenseCategory, NewPreOrder,
    NewProduct, NewSalesItem, NewUser, Product, ProductSnapshot,
};
use crate::report::PreOrderPayment;
use crate::types::{
    Discount, Email, ExpenseStatus, Money, PaymentMethod, PreOrderStatus, UserRole,
};

const NAME_MAX: usize = 100;
const CATEGORY_NAME_MAX: usize = 50;
const ADDRESS_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 500;

/// Run `check`, then `build` if nothing was reported.
///
/// `build` only runs when every field parsed, so it may rely on the
/// `Option`s it receives being `Some`.
fn finish<T>(
    errors: FieldErrors,
    build: impl FnOnce() -> Option<T>,
) -> Result<T, FieldErrors> {
    errors.into_result()?;
    build().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.insert("form", "form is incomplete");
        errors
    })
}

fn discount_field(errors: &mut FieldErrors, value: &str) -> Option<Discount> {
    rules::percent_or_zero(errors, "discount", value).and_then(|p| Discount::new(p).ok())
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub cost_price: String,
    pub quantity: String,
}

impl ProductForm {
    /// Pre-fill the form from an existing product, for editing.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.amount().to_string(),
            cost_price: product.cost_price.amount().to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    pub fn into_payload(self) -> Result<NewProduct, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = rules::required(&mut errors, "name", &self.name, NAME_MAX);
        let category = rules::required(&mut errors, "category", &self.category, NAME_MAX);
        let price = rules::number(&mut errors, "price", &self.price, Bound::Positive);
        let cost_price = rules::number(&mut errors, "cost_price", &self.cost_price, Bound::NonNegative);
        let quantity = rules::count(&mut errors, "quantity", &self.quantity);

        finish(errors, || {
            Some(NewProduct {
                name: name?.to_string(),
                category: category?.to_string(),
                price: Money::new(price?),
                cost_price: Money::new(cost_price?),
                quantity: quantity?,
            })
        })
    }
}

impl Validate for ProductForm {
    fn check(&self, errors: &mut FieldErrors) {
        if let Err(found) = self.clone().into_payload() {
            for (field, message) in found.iter() {
                errors.insert(field, message);
            }
        }
    }
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerForm {
    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    pub fn into_payload(self) -> Result<NewCustomer, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = rules::required(&mut errors, "name", &self.name, NAME_MAX);
        let phone = rules::phone(&mut errors, "phone", &self.phone);
        let address = rules::optional(&mut errors, "address", &self.address, ADDRESS_MAX);

        finish(errors, || {
            Some(NewCustomer {
                name: name?.to_string(),
                phone: phone?.to_string(),
                address: address?.to_string(),
            })
        })
    }
}

impl Validate for CustomerForm {
    fn check(&self, errors: &mut FieldErrors) {
        rules::required(errors, "name", &self.name, NAME_MAX);
        rules::phone(errors, "phone", &self.phone);
        rules::optional(errors, "address", &self.address, ADDRESS_MAX);
    }
}

// =============================================================================
// Expenses
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub name: String,
    pub category: String,
    pub cost: String,
    pub payment_method: String,
    pub description: String,
    /// Blank means `pending`.
    pub status: String,
}

impl ExpenseForm {
    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    pub fn into_payload(self) -> Result<NewExpense, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = rules::required(&mut errors, "name", &self.name, NAME_MAX);
        let category = rules::required(&mut errors, "category", &self.category, CATEGORY_NAME_MAX);
        let cost = rules::number(&mut errors, "cost", &self.cost, Bound::Positive);
        let payment_method = rules::required(&mut errors, "payment_method", &self.payment_method, 32)
            .and_then(|raw| match raw.parse::<PaymentMethod>() {
                Ok(method) => Some(method),
                Err(_) => {
                    errors.insert(
                        "payment_method",
                        "Payment method must be one of cash, card, bank_transfer, mobile_banking",
                    );
                    None
                }
            });
        let description =
            rules::optional(&mut errors, "description", &self.description, DESCRIPTION_MAX);
        let status = if self.status.trim().is_empty() {
            Some(ExpenseStatus::Pending)
        } else if let Ok(status) = self.status.parse::<ExpenseStatus>() {
            Some(status)
        } else {
            errors.insert("status", "Status must be one of pending, paid, cancelled");
            None
        };

        finish(errors, || {
            Some(NewExpense {
                name: name?.to_string(),
                category: category?.to_string(),
                cost: Money::new(cost?),
                payment_method: payment_method?,
                description: description?.to_string(),
                status: status?,
            })
        })
    }
}

impl Validate for ExpenseForm {
    fn check(&self, errors: &mut FieldErrors) {
        if let Err(found) = self.clone().into_payload() {
            for (field, message) in found.iter() {
                errors.insert(field, message);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseCategoryForm {
    pub name: String,
    pub description: String,
}

impl ExpenseCategoryForm {
    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    pub fn into_payload(self) -> Result<NewExpenseCategory, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = rules::required(&mut errors, "name", &self.name, CATEGORY_NAME_MAX);
        let description =
            rules::optional(&mut errors, "description", &self.description, DESCRIPTION_MAX);

        finish(errors, || {
            Some(NewExpenseCategory {
                name: name?.to_string(),
                description: description?.to_string(),
            })
        })
    }
}

impl Validate for ExpenseCategoryForm {
    fn check(&self, errors: &mut FieldErrors) {
        rules::required(errors, "name", &self.name, CATEGORY_NAME_MAX);
        rules::optional(errors, "description", &self.description, DESCRIPTION_MAX);
    }
}

// =============================================================================
// Sales and pre-orders
// =============================================================================

/// Record the sale of one unit of a selected product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleForm {
    pub product: Option<Product>,
    pub discount: String,
    pub sales_manager: String,
}

impl SaleForm {
    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    pub fn into_payload(self) -> Result<NewSalesItem, FieldErrors> {
        let mut errors = FieldErrors::new();
        let product = self.checked_product(&mut errors);
        let discount = discount_field(&mut errors, &self.discount);
        let sales_manager =
            rules::required(&mut errors, "sales_manager", &self.sales_manager, NAME_MAX);

        finish(errors, || {
            let product = product?;
            Some(NewSalesItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                product_price: product.price,
                discount: discount?,
                category: product.category.clone(),
                sales_manager: sales_manager?.to_string(),
            })
        })
    }

    fn checked_product(&self, errors: &mut FieldErrors) -> Option<&Product> {
        match &self.product {
            None => {
                errors.insert("product", "Please select a product");
                None
            }
            Some(product) if product.is_out_of_stock() => {
                errors.insert("product", format!("{} is out of stock", product.name));
                None
            }
            Some(product) => Some(product),
        }
    }
}

impl Validate for SaleForm {
    fn check(&self, errors: &mut FieldErrors) {
        self.checked_product(errors);
        discount_field(errors, &self.discount);
        rules::required(errors, "sales_manager", &self.sales_manager, NAME_MAX);
    }
}

/// Take a pre-order with the fixed 50% advance.
///
/// Out-of-stock products are allowed; that is what pre-orders are for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreOrderForm {
    pub product: Option<Product>,
    pub customer: Option<Customer>,
    pub discount: String,
}

impl PreOrderForm {
    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    pub fn into_payload(self) -> Result<NewPreOrder, FieldErrors> {
        let mut errors = FieldErrors::new();
        self.check(&mut errors);
        let discount = discount_field(&mut FieldErrors::new(), &self.discount);

        finish(errors, || {
            let product = self.product?;
            let customer = self.customer?;
            let discount = discount?;
            let payment = PreOrderPayment::compute(product.price, discount);
            Some(NewPreOrder {
                product: ProductSnapshot {
                    id: product.id,
                    name: product.name,
                    price: product.price,
                    category: product.category,
                },
                customer: CustomerSnapshot {
                    name: customer.name,
                    phone: customer.phone,
                    address: customer.address,
                },
                discount,
                total_amount: payment.total_amount,
                paid_amount: payment.paid_amount,
                due_amount: payment.due_amount,
                status: PreOrderStatus::Pending,
            })
        })
    }
}

impl Validate for PreOrderForm {
    fn check(&self, errors: &mut FieldErrors) {
        if self.product.is_none() {
            errors.insert("product", "Please select a product");
        }
        if self.customer.is_none() {
            errors.insert("customer", "Please select a customer");
        }
        discount_field(errors, &self.discount);
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl UserForm {
    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    pub fn into_payload(self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        let full_name = rules::required(&mut errors, "full_name", &self.full_name, NAME_MAX);
        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.insert("email", capitalize(&e.to_string()));
                None
            }
        };
        let role = match self.role.parse::<UserRole>() {
            Ok(role) => Some(role),
            Err(_) => {
                errors.insert("role", "Role must be one of admin, manager, sales_manager");
                None
            }
        };

        finish(errors, || {
            Some(NewUser {
                full_name: full_name?.to_string(),
                email: email?,
                role: role?,
            })
        })
    }
}

impl Validate for UserForm {
    fn check(&self, errors: &mut FieldErrors) {
        if let Err(found) = self.clone().into_payload() {
            for (field, message) in found.iter() {
                errors.insert(field, message);
            }
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
