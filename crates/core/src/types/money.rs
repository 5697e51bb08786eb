//! Decimal money and percentage discounts.
//!
//! The backend stores amounts as plain JSON numbers in the shop's single
//! currency. `Money` keeps them as [`Decimal`] so that sums and discount
//! arithmetic never drift the way floating point does.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An amount of money in the shop currency.
///
/// Deserializes from either a JSON number or a numeric string and
/// serializes back as a JSON number, which is what the backend expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build an amount from an integer number of minor units (cents).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Round to cents, halves away from zero.
    #[must_use]
    pub fn round(self) -> Self {
        Self(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Multiply by an integer quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round().0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<u32> for Money {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Write a decimal as a JSON number. Whole values go out as integers so the
/// backend sees `120`, not `120.0`.
fn serialize_number<S: Serializer>(value: Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    serializer.serialize_f64(value.to_f64().unwrap_or_default())
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Self)
    }
}

/// Errors that can occur when building a [`Discount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// The percentage is below zero.
    #[error("discount cannot be negative")]
    Negative,
    /// The percentage is above one hundred.
    #[error("discount cannot exceed 100%")]
    TooLarge,
}

/// A percentage discount in the range `0..=100`.
///
/// Forms build one with [`Discount::new`], which rejects anything outside the
/// range. Backend records are clamped into it instead.
///
/// ```
/// use rust_decimal::{Decimal, RoundingStrategy};
/// use stockdesk_core::{Discount, Money};
///
/// let discount = Discount::new(Decimal::from(10)).unwrap();
/// let price = Money::from(200);
/// assert_eq!(discount.apply(price), Money::from(180));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Discount(Decimal);

impl Discount {
    /// No discount.
    pub const NONE: Self = Self(Decimal::ZERO);

    /// Create a discount from a percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage is outside `0..=100`.
    pub fn new(percent: Decimal) -> Result<Self, DiscountError> {
        if percent.is_sign_negative() && !percent.is_zero() {
            return Err(DiscountError::Negative);
        }
        if percent > Decimal::ONE_HUNDRED {
            return Err(DiscountError::TooLarge);
        }
        Ok(Self(percent))
    }

    /// Create a discount, pulling an out-of-range percentage into `0..=100`.
    ///
    /// Used for records read from the backend, which are taken as they are.
    #[must_use]
    pub fn clamped(percent: Decimal) -> Self {
        Self(percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// The percentage value (e.g. `15` for 15%).
    #[must_use]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// `price * (1 - discount / 100)`.
    #[must_use]
    pub fn apply(&self, price: Money) -> Money {
        price * (Decimal::ONE - self.0 / Decimal::ONE_HUNDRED)
    }

    /// The amount taken off `price` by this discount.
    #[must_use]
    pub fn amount_off(&self, price: Money) -> Money {
        price - self.apply(price)
    }
}

impl Serialize for Discount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Discount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Self::clamped)
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
