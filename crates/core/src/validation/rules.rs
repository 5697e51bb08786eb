//! Field-level checks shared by the forms.
//!
//! Each rule records at most one message and returns the parsed value when
//! the field is usable, so a form can check and convert in one pass.

use rust_decimal::Decimal;

use super::FieldErrors;

/// Trimmed non-empty text no longer than `max` characters.
pub fn required<'a>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Option<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, format!("{} is required", pretty(field)));
        return None;
    }
    if value.chars().count() > max {
        errors.insert(
            field,
            format!("{} must be at most {max} characters", pretty(field)),
        );
        return None;
    }
    Some(value)
}

/// Optional text; empty is fine, over-long is not.
pub fn optional<'a>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Option<&'a str> {
    let value = value.trim();
    if value.chars().count() > max {
        errors.insert(
            field,
            format!("{} must be at most {max} characters", pretty(field)),
        );
        return None;
    }
    Some(value)
}

/// Which bound a number must respect.
#[derive(Debug, Clone, Copy)]
pub enum Bound {
    Positive,
    NonNegative,
    Percent,
}

/// A required decimal number within `bound`.
pub fn number(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    bound: Bound,
) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, format!("{} is required", pretty(field)));
        return None;
    }
    let Ok(parsed) = value.parse::<Decimal>() else {
        errors.insert(field, format!("{} must be a number", pretty(field)));
        return None;
    };

    let problem = match bound {
        Bound::Positive if parsed <= Decimal::ZERO => Some("must be greater than 0"),
        Bound::NonNegative | Bound::Percent if parsed < Decimal::ZERO => {
            Some("cannot be negative")
        }
        Bound::Percent if parsed > Decimal::ONE_HUNDRED => Some("cannot exceed 100"),
        _ => None,
    };
    if let Some(problem) = problem {
        errors.insert(field, format!("{} {problem}", pretty(field)));
        return None;
    }
    Some(parsed)
}

/// Like [`number`] with `Bound::Percent`, but blank means zero.
pub fn percent_or_zero(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<Decimal> {
    if value.trim().is_empty() {
        return Some(Decimal::ZERO);
    }
    number(errors, field, value, Bound::Percent)
}

/// A required whole number of zero or more.
pub fn count(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, format!("{} is required", pretty(field)));
        return None;
    }
    if value.starts_with('-') {
        errors.insert(field, format!("{} cannot be negative", pretty(field)));
        return None;
    }
    value.parse::<u32>().map_or_else(
        |_| {
            errors.insert(field, format!("{} must be a whole number", pretty(field)));
            None
        },
        Some,
    )
}

/// Phone number: 7 to 15 digits, optionally led by `+`. Spaces and dashes
/// are ignored.
pub fn phone<'a>(errors: &mut FieldErrors, field: &'static str, value: &'a str) -> Option<&'a str> {
    let value = required(errors, field, value, 32)?;
    let digits = value.strip_prefix('+').unwrap_or(value);
    let mut count = 0;
    for c in digits.chars() {
        match c {
            '0'..='9' => count += 1,
            ' ' | '-' => {}
            _ => {
                errors.insert(field, "Phone may only contain digits, spaces, dashes and a leading +");
                return None;
            }
        }
    }
    if !(7..=15).contains(&count) {
        errors.insert(field, "Phone must have 7 to 15 digits");
        return None;
    }
    Some(value)
}

/// `cost_price` -> `Cost price`.
fn pretty(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_required() {
        let mut errors = FieldErrors::new();
        assert_eq!(required(&mut errors, "name", "  Lamp ", 10), Some("Lamp"));
        assert_eq!(required(&mut errors, "category", "   ", 10), None);
        assert_eq!(required(&mut errors, "full_name", "abcdefghijk", 10), None);
        assert_eq!(errors.get("category"), Some("Category is required"));
        assert_eq!(
            errors.get("full_name"),
            Some("Full name must be at most 10 characters")
        );
    }

    #[test]
    fn test_number_bounds() {
        let mut errors = FieldErrors::new();
        assert_eq!(number(&mut errors, "price", "12.50", Bound::Positive), Some(dec!(12.50)));
        assert_eq!(number(&mut errors, "cost", "0", Bound::Positive), None);
        assert_eq!(number(&mut errors, "cost_price", "0", Bound::NonNegative), Some(dec!(0)));
        assert_eq!(number(&mut errors, "discount", "101", Bound::Percent), None);
        assert_eq!(number(&mut errors, "total", "abc", Bound::NonNegative), None);
        assert_eq!(errors.get("cost"), Some("Cost must be greater than 0"));
        assert_eq!(errors.get("discount"), Some("Discount cannot exceed 100"));
        assert_eq!(errors.get("total"), Some("Total must be a number"));
    }

    #[test]
    fn test_percent_or_zero() {
        let mut errors = FieldErrors::new();
        assert_eq!(percent_or_zero(&mut errors, "discount", ""), Some(Decimal::ZERO));
        assert_eq!(percent_or_zero(&mut errors, "discount", "-5"), None);
        assert_eq!(errors.get("discount"), Some("Discount cannot be negative"));
    }

    #[test]
    fn test_count() {
        let mut errors = FieldErrors::new();
        assert_eq!(count(&mut errors, "quantity", "12"), Some(12));
        assert_eq!(count(&mut errors, "a", "-1"), None);
        assert_eq!(count(&mut errors, "b", "1.5"), None);
        assert_eq!(errors.get("a"), Some("A cannot be negative"));
        assert_eq!(errors.get("b"), Some("B must be a whole number"));
    }

    #[test]
    fn test_phone() {
        let mut errors = FieldErrors::new();
        assert!(phone(&mut errors, "phone", "+880 1711-000000").is_some());
        assert!(phone(&mut errors, "short", "12345").is_none());
        assert!(phone(&mut errors, "letters", "555-CALL-NOW").is_none());
        assert_eq!(errors.get("short"), Some("Phone must have 7 to 15 digits"));
        assert!(errors.contains("letters"));
    }
}
